use cube_core::{Color, ColorScheme, Cube, Face, FaceId, Location, Move, Orientation};
use cube_solver::{Solver, Solver3x3, SolverError, Unsolvable, solver_for};
use itertools::Itertools;
use log::info;

fn scramble(cube: &mut Cube, moves: usize, seed: u64) -> Vec<Move> {
    let shuffle = cube.generate_seeded_shuffle_moves(moves, seed).collect_vec();
    cube.execute_moves(&shuffle).unwrap();
    shuffle
}

/// Rebuilds `cube` with some stickers repainted.
fn repaint(cube: &Cube, stickers: &[(Location, Color)]) -> Cube {
    let faces = cube
        .faces()
        .map(|face| {
            let mut rows = face.rows().map(<[Color]>::to_vec).collect_vec();
            for &(location, color) in stickers {
                if location.face == face.id() {
                    rows[location.row][location.col] = color;
                }
            }
            Face::new(face.id(), rows).unwrap()
        })
        .collect_vec();
    Cube::new_from_faces(cube.size(), faces).unwrap()
}

fn piece(cube: &Cube, location: Location) -> Vec<(Location, Color)> {
    [location]
        .into_iter()
        .chain(cube.other_sticker_locations(location).unwrap())
        .map(|l| (l, cube.location_color(l).unwrap()))
        .collect()
}

fn assert_unsolvable(mut cube: Cube) {
    for seed in 0..40 {
        let mut scrambled = cube.clone();
        scramble(&mut scrambled, 50, seed);
        let solution = Solver3x3::new(&mut scrambled).unwrap().solve().unwrap();
        assert!(!solution.is_solved(), "seed {seed} claimed a solve");
        info!("Gave up: {}", solution.unsolvable.unwrap());
    }
    let solution = Solver3x3::new(&mut cube).unwrap().solve().unwrap();
    assert!(!solution.is_solved());
}

#[test_log::test]
fn solved_cube_needs_no_moves() {
    let mut cube = Cube::new(3);
    let solution = Solver3x3::new(&mut cube).unwrap().solve().unwrap();
    assert!(solution.is_solved());
    assert!(solution.moves.is_empty());
}

#[test_log::test]
fn single_turns_are_solved() {
    for (axis, layer, forward) in itertools::iproduct!(Orientation::ALL, 0..3, [true, false]) {
        let mut cube = Cube::new(3);
        cube.apply_move(Move::new(axis, layer, forward)).unwrap();
        let solution = Solver3x3::new(&mut cube).unwrap().solve().unwrap();
        assert!(solution.is_solved());
        assert!(cube.is_solved());
    }
}

#[test_log::test]
fn shuffled_cubes_are_solved() {
    for seed in 0..200 {
        let mut cube = Cube::new(3);
        scramble(&mut cube, 100, seed);
        let scrambled = cube.clone();

        let solution = Solver3x3::new(&mut cube).unwrap().solve().unwrap();
        assert!(solution.is_solved(), "seed {seed}: {:?}", solution.unsolvable);
        assert!(cube.is_solved());

        // The moves replay on an untouched copy
        let mut replay = scrambled;
        replay.execute_moves(&solution.moves).unwrap();
        assert!(replay.is_solved());
        assert_eq!(replay, cube);
    }
}

#[test_log::test]
fn solution_stays_within_the_outer_layers() {
    let mut cube = Cube::new(3);
    scramble(&mut cube, 100, 1234);
    let solution = Solver3x3::new(&mut cube).unwrap().solve().unwrap();
    assert!(solution.is_solved());
    assert!(solution.moves.iter().all(|m| m.layer() != 1));
}

#[test_log::test]
fn other_color_schemes_are_solved() {
    let scheme = ColorScheme::new(|face| match face {
        FaceId::U => Color::Yellow,
        FaceId::D => Color::White,
        FaceId::F => Color::Red,
        FaceId::B => Color::Orange,
        FaceId::R => Color::Blue,
        FaceId::L => Color::Green,
    });
    let mut cube = Cube::with_scheme(3, &scheme);
    scramble(&mut cube, 100, 77);
    let solution = Solver3x3::new(&mut cube).unwrap().solve().unwrap();
    assert!(solution.is_solved());
    assert!(cube.is_solved());

    // Slice turns may have moved the centers, so the cube ends up as a rotation
    // of the scheme: every face keeps its opposite
    let color_of = |face: FaceId| cube.location_color(Location::new(face, 1, 1)).unwrap();
    for face in FaceId::ALL {
        let home = scheme.face_of(color_of(face)).unwrap();
        assert_eq!(color_of(face.opposite()), scheme[home.opposite()]);
    }
}

#[test_log::test]
fn centers_pin_the_target_colors() {
    // A middle slice turn moves the centers; the solver then solves relative to them
    let mut cube = Cube::new(3);
    cube.apply_move(Move::new(Orientation::X, 1, true)).unwrap();
    scramble(&mut cube, 60, 5);
    let solution = Solver3x3::new(&mut cube).unwrap().solve().unwrap();
    assert!(solution.is_solved());
    assert!(cube.is_solved());
    assert_ne!(cube, Cube::new(3));
}

#[test_log::test]
fn twisted_corner_is_unsolvable() {
    let cube = Cube::new(3);
    let corner = piece(&cube, Location::new(FaceId::U, 2, 2));
    let twisted = corner
        .iter()
        .zip(corner.iter().cycle().skip(1))
        .map(|(&(location, _), &(_, color))| (location, color))
        .collect_vec();
    assert_unsolvable(repaint(&cube, &twisted));
}

#[test_log::test]
fn flipped_edge_is_unsolvable() {
    let cube = Cube::new(3);
    let edge = piece(&cube, Location::new(FaceId::U, 2, 1));
    let flipped = [(edge[0].0, edge[1].1), (edge[1].0, edge[0].1)];
    assert_unsolvable(repaint(&cube, &flipped));
}

#[test_log::test]
fn swapped_edges_are_unsolvable() {
    let cube = Cube::new(3);
    let first = piece(&cube, Location::new(FaceId::U, 2, 1));
    let second = piece(&cube, Location::new(FaceId::U, 0, 1));
    let swapped = first
        .iter()
        .zip(&second)
        .flat_map(|(&(a, a_color), &(b, b_color))| [(a, b_color), (b, a_color)])
        .collect_vec();
    assert_unsolvable(repaint(&cube, &swapped));
}

#[test_log::test]
fn mirrored_corner_is_unsolvable() {
    let cube = Cube::new(3);
    let corner = piece(&cube, Location::new(FaceId::U, 2, 2));
    let mirrored = [(corner[1].0, corner[2].1), (corner[2].0, corner[1].1)];
    assert_unsolvable(repaint(&cube, &mirrored));
}

#[test_log::test]
fn repainted_sticker_is_inconsistent() {
    let mut rng = fastrand::Rng::with_seed(53);
    for seed in 0..300 {
        let mut cube = Cube::new(3);
        scramble(&mut cube, 100, seed);

        let (row, col) = loop {
            let (row, col) = (rng.usize(..3), rng.usize(..3));
            if (row, col) != (1, 1) {
                break (row, col);
            }
        };
        let location = Location::new(FaceId::ALL[rng.usize(..6)], row, col);
        let old = cube.location_color(location).unwrap();
        let choices = Color::ALL.into_iter().filter(|&c| c != old).collect_vec();
        let mut cube = repaint(&cube, &[(location, choices[rng.usize(..choices.len())])]);

        let solution = Solver3x3::new(&mut cube).unwrap().solve().unwrap();
        assert_eq!(
            solution.unsolvable,
            Some(Unsolvable::InconsistentStickers),
            "seed {seed}, {location} repainted"
        );
        assert!(solution.moves.is_empty());
    }
}

#[test_log::test]
fn only_3x3_has_a_solver() {
    let mut cube = Cube::new(4);
    assert_eq!(
        Solver3x3::new(&mut cube).err(),
        Some(SolverError::InvalidCubeSize(4))
    );
    assert!(solver_for(&mut cube).unwrap().is_none());

    let mut cube = Cube::new(3);
    scramble(&mut cube, 30, 3);
    let mut solver = solver_for(&mut cube).unwrap().unwrap();
    assert!(solver.solve().unwrap().is_solved());
}

#[test_log::test]
fn duplicate_centers_are_rejected() {
    let mut cube = repaint(&Cube::new(3), &[(Location::new(FaceId::D, 1, 1), Color::White)]);
    assert_eq!(
        Solver3x3::new(&mut cube).err(),
        Some(SolverError::DuplicateCenterColor(Color::White))
    );
}

#[test_log::test]
fn stickers_are_found_in_request_order() {
    let mut cube = Cube::new(3);
    scramble(&mut cube, 40, 17);
    let solver = Solver3x3::new(&mut cube).unwrap();

    let colors = [Color::Green, Color::White, Color::Red];
    let locations = solver.find_sticker_locations(&colors).unwrap();
    assert_eq!(locations.len(), 3);
    drop(solver);
    for (location, color) in locations.iter().zip(colors) {
        assert_eq!(cube.location_color(*location).unwrap(), color);
    }

    let solver = Solver3x3::new(&mut cube).unwrap();
    assert_eq!(
        solver.find_sticker_locations(&[Color::White, Color::Yellow]),
        Err(SolverError::StickerNotFound(vec![Color::White, Color::Yellow]))
    );
}

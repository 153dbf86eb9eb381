use cube_core::{Color, Cube, CubeError, Face, FaceId, Location, Move, Orientation};
use itertools::{Itertools, iproduct};

fn scrambled(size: usize, seed: u64) -> Cube {
    let mut cube = Cube::new(size);
    let moves = cube.generate_seeded_shuffle_moves(60, seed).collect_vec();
    cube.execute_moves(&moves).unwrap();
    cube
}

fn all_locations(size: usize) -> impl Iterator<Item = Location> {
    iproduct!(FaceId::ALL, 0..size, 0..size).map(|(face, row, col)| Location::new(face, row, col))
}

fn color_counts(cube: &Cube) -> Vec<usize> {
    Color::ALL
        .iter()
        .map(|&color| {
            all_locations(cube.size())
                .filter(|&loc| cube.location_color(loc).unwrap() == color)
                .count()
        })
        .collect()
}

#[test_log::test]
fn x0_then_x0b_restores_solved_cube() {
    let mut cube = Cube::new(3);
    let move_ = Move::new(Orientation::X, 0, true);
    cube.apply_move(move_).unwrap();
    assert!(!cube.is_solved());
    cube.apply_move(move_.reversed()).unwrap();
    assert!(cube.is_solved());
    assert_eq!(cube, Cube::new(3));
}

#[test_log::test]
fn every_move_round_trips() {
    for size in [2, 3, 4, 5] {
        let original = scrambled(size, 7);
        for (axis, layer, forward) in iproduct!(Orientation::ALL, 0..size, [true, false]) {
            let move_ = Move::new(axis, layer, forward);
            let mut cube = original.clone();
            cube.apply_move(move_).unwrap();
            assert_eq!(color_counts(&cube), color_counts(&original));
            cube.apply_move(move_.reversed()).unwrap();
            assert_eq!(cube, original, "{move_} did not round trip");
        }
    }
}

#[test_log::test]
fn four_quarter_turns_are_identity() {
    let original = scrambled(4, 11);
    for (axis, layer) in iproduct!(Orientation::ALL, 0..4) {
        let mut cube = original.clone();
        for _ in 0..4 {
            cube.apply_move(Move::new(axis, layer, true)).unwrap();
        }
        assert_eq!(cube, original);
    }
}

#[test_log::test]
fn inverted_sequence_undoes_sequence() {
    let mut cube = scrambled(3, 1);
    let original = cube.clone();
    let moves = cube.generate_seeded_shuffle_moves(40, 99).collect_vec();
    cube.execute_moves(&moves).unwrap();
    assert_ne!(cube, original);
    cube.execute_moves(&Move::invert(&moves)).unwrap();
    assert_eq!(cube, original);
}

#[test_log::test]
fn tracing_predicts_the_move() {
    for size in [3, 4] {
        let cube = scrambled(size, 3);
        for (axis, layer, forward) in iproduct!(Orientation::ALL, 0..size, [true, false]) {
            let move_ = Move::new(axis, layer, forward);
            let mut moved = cube.clone();
            moved.apply_move(move_).unwrap();

            let mut traced = 0;
            for location in all_locations(size) {
                let Ok(target) = cube.trace_moved_sticker(location, move_) else {
                    continue;
                };
                traced += 1;
                assert_ne!(target.face, location.face);
                assert_eq!(
                    moved.location_color(target).unwrap(),
                    cube.location_color(location).unwrap(),
                    "{location} under {move_}"
                );
            }
            assert_eq!(traced, 4 * size);
        }
    }
}

#[test_log::test]
fn tracing_rejects_stickers_that_stay() {
    let cube = Cube::new(3);
    let move_ = Move::new(Orientation::X, 0, true);
    let location = Location::new(FaceId::U, 1, 1);
    assert!(matches!(
        cube.trace_moved_sticker(location, move_),
        Err(CubeError::InvalidLocation { .. })
    ));
}

#[test_log::test]
fn other_sticker_locations_pair_up() {
    let cube = Cube::new(3);
    for location in all_locations(3) {
        let others = cube.other_sticker_locations(location).unwrap();
        let borders = usize::from(location.row != 1) + usize::from(location.col != 1);
        assert_eq!(others.len(), borders, "{location}");
        for other in &others {
            assert_ne!(other.face, location.face);
            assert!(
                cube.other_sticker_locations(*other)
                    .unwrap()
                    .contains(&location)
            );
        }
    }
}

#[test_log::test]
fn pieces_keep_their_colors_together() {
    let mut cube = scrambled(3, 5);
    let solved = Cube::new(3);
    let piece = |cube: &Cube, location: Location| {
        let mut colors = cube
            .other_sticker_locations(location)
            .unwrap()
            .into_iter()
            .chain([location])
            .map(|l| cube.location_color(l).unwrap())
            .collect_vec();
        colors.sort();
        colors
    };
    let legal = all_locations(3)
        .map(|location| piece(&solved, location))
        .collect::<std::collections::HashSet<_>>();

    for move_ in cube.generate_seeded_shuffle_moves(30, 8).collect_vec() {
        cube.apply_move(move_).unwrap();
        for location in all_locations(3) {
            assert!(legal.contains(&piece(&cube, location)));
        }
    }
}

#[test_log::test]
fn small_cubes_have_no_piece_lookup() {
    let cube = Cube::new(2);
    assert!(matches!(
        cube.other_sticker_locations(Location::new(FaceId::F, 0, 0)),
        Err(CubeError::InvalidLocation { .. })
    ));
}

#[test_log::test]
fn rotating_a_face_only_spins_its_layer() {
    for face in FaceId::ALL {
        let mut cube = Cube::new(3);
        let move_ = cube.move_to_rotate_face(face, true).unwrap();
        assert!(move_.layer() == 0 || move_.layer() == 2);
        cube.apply_move(move_).unwrap();
        assert!(cube[face].is_monochrome());
        assert!(cube[face.opposite()].is_monochrome());
        assert!(!cube.is_solved());

        let counter = cube.move_to_rotate_face(face, false).unwrap();
        assert_eq!(counter, move_.reversed());
    }
}

#[test_log::test]
fn clockwise_carries_up_neighbour_to_the_right() {
    let cube = Cube::new(3);
    for face in FaceId::ALL {
        let corner = Location::new(face, 0, 0);
        let on_up = cube
            .other_sticker_locations(corner)
            .unwrap()
            .into_iter()
            .find(|l| l.face == face.side_linked_faces()[1])
            .unwrap();
        let move_ = cube.move_to_rotate_face(face, true).unwrap();
        let traced = cube.trace_moved_sticker(on_up, move_).unwrap();
        assert_eq!(traced.face, face.side_linked_faces()[2]);
    }
}

#[test_log::test]
fn rotation_moves_till_found() {
    let cube = scrambled(3, 21);
    let start = Location::new(FaceId::F, 2, 1);
    assert_eq!(
        cube.rotation_moves_till_found(FaceId::D, start, FaceId::F).unwrap(),
        (vec![], start)
    );

    let color = cube.location_color(start).unwrap();
    for goal in FaceId::D.side_linked_faces() {
        let (moves, traced) = cube.rotation_moves_till_found(FaceId::D, start, goal).unwrap();
        assert!(moves.len() <= 2);
        assert_eq!(traced.face, goal);

        let mut moved = cube.clone();
        moved.execute_moves(&moves).unwrap();
        assert_eq!(moved.location_color(traced).unwrap(), color);
    }
}

#[test_log::test]
fn rotation_moves_till_found_rejects_unreachable_goals() {
    let cube = Cube::new(3);
    let start = Location::new(FaceId::F, 2, 1);
    for goal in [FaceId::U, FaceId::D] {
        assert!(matches!(
            cube.rotation_moves_till_found(FaceId::D, start, goal),
            Err(CubeError::InvalidLocation { location, .. }) if location == start
        ));
    }
}

#[test_log::test]
fn needed_single_move_refuses_opposite_faces() {
    let cube = Cube::new(3);
    let location = Location::new(FaceId::U, 0, 1);
    assert_eq!(
        cube.needed_single_move(location, FaceId::D),
        Err(CubeError::NoSingleMove {
            from: FaceId::U,
            to: FaceId::D
        })
    );
    let move_ = cube.needed_single_move(location, FaceId::F).unwrap();
    assert_eq!(cube.trace_moved_sticker(location, move_).unwrap().face, FaceId::F);
}

#[test_log::test]
fn out_of_range_layers_are_rejected() {
    let mut cube = Cube::new(3);
    assert_eq!(
        cube.apply_move(Move::new(Orientation::Y, 3, true)),
        Err(CubeError::LayerOutOfRange { layer: 3, size: 3 })
    );
    assert!(cube.is_solved());
}

#[test_log::test]
fn shuffles_are_exact_and_reproducible() {
    let cube = Cube::new(4);
    let shuffle = cube.generate_seeded_shuffle_moves(25, 42);
    assert_eq!(shuffle.len(), 25);
    let moves = shuffle.collect_vec();
    assert!(moves.iter().all(|m| m.layer() < 4));
    assert_eq!(moves, cube.generate_seeded_shuffle_moves(25, 42).collect_vec());
    assert_eq!(cube.generate_shuffle_moves(100).count(), 100);
}

#[test_log::test]
fn cube_from_faces() {
    let solved = Cube::new(3);
    let faces = solved.faces().cloned().collect_vec();
    let rebuilt = Cube::new_from_faces(3, faces.iter().rev().cloned()).unwrap();
    assert_eq!(rebuilt, solved);

    assert_eq!(
        Cube::new_from_faces(3, faces.iter().take(5).cloned()),
        Err(CubeError::MissingFace(FaceId::B))
    );
    assert_eq!(
        Cube::new_from_faces(3, faces.iter().chain([&faces[0]]).cloned()),
        Err(CubeError::DuplicateFace(FaceId::U))
    );
    assert!(matches!(
        Cube::new_from_faces(4, faces),
        Err(CubeError::FaceSizeMismatch { expected: 4, found: 3, .. })
    ));

    let odd = Face::new(
        FaceId::U,
        vec![vec![Color::Red; 3], vec![Color::White; 3], vec![Color::White; 3]],
    )
    .unwrap();
    let faces = Cube::new(3)
        .faces()
        .map(|face| if face.id() == FaceId::U { odd.clone() } else { face.clone() })
        .collect_vec();
    let cube = Cube::new_from_faces(3, faces).unwrap();
    assert_eq!(cube.location_color(Location::new(FaceId::U, 0, 2)), Ok(Color::Red));
    assert!(!cube.is_solved());
}

mod first_two_layers;
mod last_layer;

use std::{collections::HashMap, ops::ControlFlow};

use cube_core::{Color, ColorScheme, Cube, FaceId, Location, Move};
use itertools::{Itertools, iproduct};
use log::{debug, info, trace, warn};

use crate::{Solution, Solver, SolverError, Unsolvable};

type PhaseResult = Result<ControlFlow<Unsolvable>, SolverError>;

/// The faces around `D`, in the order a clockwise turn of `D` carries stickers.
const RING: [FaceId; 4] = FaceId::D.side_linked_faces();

/// Steps `offset` faces along the ring. Faces outside the ring map to themselves.
fn ring_offset(face: FaceId, offset: usize) -> FaceId {
    RING.iter()
        .position(|&f| f == face)
        .map_or(face, |i| RING[(i + offset) % 4])
}

fn ring_next(face: FaceId) -> FaceId {
    ring_offset(face, 1)
}

fn ring_prev(face: FaceId) -> FaceId {
    ring_offset(face, 3)
}

fn count(flags: &[bool; 4]) -> usize {
    flags.iter().filter(|&&flag| flag).count()
}

/// Ring distances from `pivot` to each set flag, ascending.
fn relative_offsets(flags: &[bool; 4], pivot: usize) -> Vec<usize> {
    (0..4)
        .filter(|&k| flags[k])
        .map(|k| (k + 4 - pivot) % 4)
        .sorted()
        .collect()
}

/// The sorted colors of the piece `location` belongs to.
fn piece_colors(cube: &Cube, location: Location) -> Result<Vec<Color>, SolverError> {
    let mut colors = vec![cube.location_color(location)?];
    for other in cube.other_sticker_locations(location)? {
        colors.push(cube.location_color(other)?);
    }
    colors.sort();
    Ok(colors)
}

/// The pieces of a 3×3 cube, listed once per sticker and sorted, so two cubes made
/// of the same pieces give the same inventory however they are arranged.
fn inventory(cube: &Cube) -> Result<Vec<Vec<Color>>, SolverError> {
    let mut pieces = iproduct!(FaceId::ALL, 0..3, 0..3)
        .map(|(face, row, col)| piece_colors(cube, Location::new(face, row, col)))
        .collect::<Result<Vec<_>, _>>()?;
    pieces.sort();
    Ok(pieces)
}

/// Solves a 3×3 cube one layer at a time, starting from the top.
///
/// Every move the solver makes is an outer face turn, so the centers stay where
/// they were when the solver was created and define the target color of each face.
pub struct Solver3x3<'a> {
    cube: &'a mut Cube,
    face_colors: ColorScheme,
    color_faces: HashMap<Color, FaceId>,
    applied: Vec<Move>,
}

impl<'a> Solver3x3<'a> {
    pub fn new(cube: &'a mut Cube) -> Result<Solver3x3<'a>, SolverError> {
        if cube.size() != 3 {
            return Err(SolverError::InvalidCubeSize(cube.size()));
        }

        let mut centers = [Color::White; 6];
        for face in FaceId::ALL {
            centers[face as usize] = cube.location_color(Location::new(face, 1, 1))?;
        }
        let face_colors = ColorScheme::new(|face| centers[face as usize]);

        let mut color_faces = HashMap::new();
        for face in FaceId::ALL {
            if color_faces.insert(face_colors[face], face).is_some() {
                return Err(SolverError::DuplicateCenterColor(face_colors[face]));
            }
        }

        Ok(Solver3x3 {
            cube,
            face_colors,
            color_faces,
            applied: Vec::new(),
        })
    }

    #[must_use]
    pub fn face_colors(&self) -> &ColorScheme {
        &self.face_colors
    }

    /// Finds the piece made of exactly `colors` and returns its stickers in the
    /// same order as `colors`.
    pub fn find_sticker_locations(&self, colors: &[Color]) -> Result<Vec<Location>, SolverError> {
        let wanted = colors.iter().copied().sorted().collect_vec();
        for (face, row, col) in iproduct!(FaceId::ALL, 0..3, 0..3) {
            let location = Location::new(face, row, col);
            let mut piece = self.cube.other_sticker_locations(location)?;
            if piece.len() + 1 != colors.len() {
                continue;
            }
            piece.push(location);

            let piece_colors = piece
                .iter()
                .map(|&l| self.cube.location_color(l))
                .collect::<Result<Vec<_>, _>>()?;
            if piece_colors.iter().copied().sorted().collect_vec() != wanted {
                continue;
            }

            return Ok(piece
                .into_iter()
                .zip(piece_colors)
                .sorted_by_key(|&(_, color)| colors.iter().position(|&c| c == color))
                .map(|(l, _)| l)
                .collect());
        }

        Err(SolverError::StickerNotFound(colors.to_vec()))
    }

    fn locate<const N: usize>(&self, colors: [Color; N]) -> Result<[Location; N], SolverError> {
        let locations = self.find_sticker_locations(&colors)?;
        <[Location; N]>::try_from(locations)
            .map_err(|_| SolverError::StickerNotFound(colors.to_vec()))
    }

    /// The sticker on `face` whose piece also shows on exactly `neighbours`.
    fn position(&self, face: FaceId, neighbours: &[FaceId]) -> Result<Location, SolverError> {
        let wanted = neighbours.iter().copied().sorted().collect_vec();
        for (row, col) in iproduct!(0..3, 0..3) {
            let location = Location::new(face, row, col);
            let faces = self
                .cube
                .other_sticker_locations(location)?
                .into_iter()
                .map(|l| l.face)
                .sorted()
                .collect_vec();
            if faces == wanted {
                return Ok(location);
            }
        }

        Err(SolverError::NoPosition {
            face,
            neighbours: neighbours.to_vec(),
        })
    }

    fn color(&self, location: Location) -> Result<Color, SolverError> {
        Ok(self.cube.location_color(location)?)
    }

    fn piece_colors(&self, location: Location) -> Result<Vec<Color>, SolverError> {
        piece_colors(self.cube, location)
    }

    fn turn(&self, face: FaceId, clockwise: bool) -> Result<Move, SolverError> {
        Ok(self.cube.move_to_rotate_face(face, clockwise)?)
    }

    fn rotate_until(
        &self,
        face: FaceId,
        location: Location,
        goal: FaceId,
    ) -> Result<Vec<Move>, SolverError> {
        Ok(self
            .cube
            .rotation_moves_till_found(face, location, goal)?
            .0)
    }

    fn execute(&mut self, moves: &[Move]) -> Result<(), SolverError> {
        if moves.is_empty() {
            return Ok(());
        }
        trace!("Executing {}", moves.iter().join(" "));
        self.cube.execute_moves(moves)?;
        self.applied.extend_from_slice(moves);
        Ok(())
    }

    fn solution(&self, unsolvable: Option<Unsolvable>) -> Solution {
        Solution {
            moves: self.applied.clone(),
            unsolvable,
        }
    }
}

impl Solver for Solver3x3<'_> {
    fn solve(&mut self) -> Result<Solution, SolverError> {
        info!(start!("Solving 3x3 cube"));

        // Every phase assumes each piece exists exactly once
        if inventory(self.cube)? != inventory(&Cube::with_scheme(3, &self.face_colors))? {
            warn!("The stickers do not add up to the pieces of a cube");
            return Ok(self.solution(Some(Unsolvable::InconsistentStickers)));
        }

        let phases: [(&str, fn(&mut Self) -> PhaseResult); 7] = [
            ("cross", Self::cross),
            ("upper corners", Self::upper_corners),
            ("middle edges", Self::middle_edges),
            ("bottom cross", Self::down_cross),
            ("bottom edges", Self::down_edges),
            ("bottom corner permutation", Self::down_corner_permutation),
            ("bottom corner orientation", Self::down_corner_orientation),
        ];

        for (name, phase) in phases {
            let before = self.applied.len();
            if let ControlFlow::Break(reason) = phase(self)? {
                warn!("Giving up during the {name} phase: {reason}");
                return Ok(self.solution(Some(reason)));
            }
            debug!(
                working!("Finished the {} phase with {} moves"),
                name,
                self.applied.len() - before
            );
        }

        if !self.cube.is_solved() {
            warn!("Every phase finished but the cube is not solved");
            return Ok(self.solution(Some(Unsolvable::InconsistentStickers)));
        }

        info!(success!("Solved in {} moves"), self.applied.len());
        Ok(self.solution(None))
    }
}

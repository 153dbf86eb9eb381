use std::ops::Index;

use log::trace;

use crate::{
    Color, ColorScheme, CubeError, Face, FaceId, Location, Move, Orientation, ShuffleMoves, Side,
    single_move_between,
};

/// The faces a turn of the first and last layer spins, and whether each spins
/// clockwise for a forward turn.
const fn boundary_faces(axis: Orientation) -> [(FaceId, bool); 2] {
    match axis {
        Orientation::X => [(FaceId::U, false), (FaceId::D, true)],
        Orientation::Y => [(FaceId::L, false), (FaceId::R, true)],
        Orientation::Z => [(FaceId::B, true), (FaceId::F, false)],
    }
}

/// An N×N cube: six faces of the same size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cube {
    size: usize,
    faces: [Face; 6],
}

impl Cube {
    /// A solved cube in the default color scheme.
    #[must_use]
    pub fn new(size: usize) -> Cube {
        Cube::with_scheme(size, &ColorScheme::default())
    }

    #[must_use]
    pub fn with_scheme(size: usize, scheme: &ColorScheme) -> Cube {
        Cube {
            size,
            faces: FaceId::ALL.map(|id| Face::filled(id, size, scheme[id])),
        }
    }

    /// Assembles a cube from externally supplied faces, one per [`FaceId`] in any
    /// order. Only the shape is checked; the stickers need not form a reachable state.
    pub fn new_from_faces(
        size: usize,
        faces: impl IntoIterator<Item = Face>,
    ) -> Result<Cube, CubeError> {
        let mut assembled = FaceId::ALL.map(|id| Face::filled(id, size, Color::White));
        let mut seen = [false; 6];
        for face in faces {
            if face.size() != size {
                return Err(CubeError::FaceSizeMismatch {
                    face: face.id(),
                    expected: size,
                    found: face.size(),
                });
            }
            let slot = face.id() as usize;
            if seen[slot] {
                return Err(CubeError::DuplicateFace(face.id()));
            }
            seen[slot] = true;
            assembled[slot] = face;
        }
        if let Some(id) = FaceId::ALL.into_iter().find(|&id| !seen[id as usize]) {
            return Err(CubeError::MissingFace(id));
        }

        Ok(Cube {
            size,
            faces: assembled,
        })
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn faces(&self) -> impl Iterator<Item = &Face> {
        self.faces.iter()
    }

    pub fn location_color(&self, location: Location) -> Result<Color, CubeError> {
        self[location.face]
            .get(location.row, location.col)
            .ok_or(CubeError::InvalidLocation {
                location,
                reason: "coordinates lie outside the face",
            })
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.faces.iter().all(Face::is_monochrome)
    }

    /// Applies a single quarter turn in place.
    pub fn apply_move(&mut self, move_: Move) -> Result<(), CubeError> {
        let axis = move_.axis();
        let layer = move_.layer();
        if layer >= self.size {
            return Err(CubeError::LayerOutOfRange {
                layer,
                size: self.size,
            });
        }

        let cycle = axis.rotation_faces();
        let mut carried = self[cycle[0]].get_strip(axis, layer)?;
        for step in 1..=4 {
            let target = if move_.is_forward() {
                cycle[step % 4]
            } else {
                cycle[(4 - step) % 4]
            };
            let face = self.face_mut(target);
            let replaced = face.get_strip(axis, layer)?;
            face.set_strip(axis, layer, &carried)?;
            carried = replaced;
        }

        let [(first, first_flag), (last, last_flag)] = boundary_faces(axis);
        if layer == 0 {
            self.face_mut(first).rotate_face(first_flag == move_.is_forward());
        } else if layer == self.size - 1 {
            self.face_mut(last).rotate_face(last_flag == move_.is_forward());
        }

        trace!("Applied {move_}");
        Ok(())
    }

    pub fn execute_moves(&mut self, moves: &[Move]) -> Result<(), CubeError> {
        moves.iter().try_for_each(|&move_| self.apply_move(move_))
    }

    /// A random scramble of `count` moves for a cube of this size.
    #[must_use]
    pub fn generate_shuffle_moves(&self, count: usize) -> ShuffleMoves {
        ShuffleMoves::new(fastrand::Rng::new(), self.size, count)
    }

    #[must_use]
    pub fn generate_seeded_shuffle_moves(&self, count: usize, seed: u64) -> ShuffleMoves {
        ShuffleMoves::new(fastrand::Rng::with_seed(seed), self.size, count)
    }

    /// Where the sticker at `location` ends up after `move_`, computed without
    /// touching the cube.
    pub fn trace_moved_sticker(
        &self,
        location: Location,
        move_: Move,
    ) -> Result<Location, CubeError> {
        self.check_location(location)?;
        let axis = move_.axis();
        let not_moved = CubeError::InvalidLocation {
            location,
            reason: "the sticker does not move to another face",
        };

        let Some(position) = axis.cycle_position(location.face) else {
            return Err(not_moved);
        };
        let source = &self[location.face];
        if source.find_move_index(axis, location.row, location.col)? != move_.layer() {
            return Err(not_moved);
        }

        let cycle = axis.rotation_faces();
        let target = if move_.is_forward() {
            cycle[(position + 1) % 4]
        } else {
            cycle[(position + 3) % 4]
        };
        let i = source
            .strip_translator(axis, move_.layer())?
            .inverse(location.row, location.col);
        let (row, col) = self[target]
            .strip_translator(axis, move_.layer())?
            .translate(i);

        Ok(Location::new(target, row, col))
    }

    /// The stickers that belong to the same piece as `location`: one for an edge,
    /// two for a corner and none for a center.
    pub fn other_sticker_locations(&self, location: Location) -> Result<Vec<Location>, CubeError> {
        self.check_location(location)?;
        if self.size <= 2 {
            return Err(CubeError::InvalidLocation {
                location,
                reason: "pieces are only distinguished on cubes larger than 2x2",
            });
        }

        let last = self.size - 1;
        let borders = [
            (location.row == 0, Side::Up),
            (location.row == last, Side::Down),
            (location.col == 0, Side::Left),
            (location.col == last, Side::Right),
        ];

        borders
            .into_iter()
            .filter(|&(touches, _)| touches)
            .map(|(_, side)| {
                let neighbour = location.face.side_linked_face(side);
                let move_ = self.needed_single_move(location, neighbour)?;
                let i = self[location.face]
                    .strip_translator(move_.axis(), move_.layer())?
                    .inverse(location.row, location.col);
                let (row, col) = self[neighbour]
                    .strip_translator(move_.axis(), move_.layer())?
                    .opposite(i);
                Ok(Location::new(neighbour, row, col))
            })
            .collect()
    }

    /// The quarter turn that carries the sticker at `from` onto face `to`.
    pub fn needed_single_move(&self, from: Location, to: FaceId) -> Result<Move, CubeError> {
        self.check_location(from)?;
        let (axis, forward) = single_move_between(from.face, to)?;
        let layer = self[from.face].find_move_index(axis, from.row, from.col)?;
        Ok(Move::new(axis, layer, forward))
    }

    /// The move that spins the outer layer of `face`, clockwise as seen looking at it.
    pub fn move_to_rotate_face(&self, face: FaceId, clockwise: bool) -> Result<Move, CubeError> {
        let up = face.side_linked_face(Side::Up);
        let corner = Location::new(face, 0, 0);
        let on_up = self
            .other_sticker_locations(corner)?
            .into_iter()
            .find(|location| location.face == up)
            .ok_or(CubeError::InvalidLocation {
                location: corner,
                reason: "the corner has no sticker on the upper neighbour",
            })?;

        let towards = face.side_linked_face(if clockwise { Side::Right } else { Side::Left });
        self.needed_single_move(on_up, towards)
    }

    /// The shortest run of turns of `face_to_rotate` that carries `location` onto
    /// `goal`, together with the location the sticker is traced to. Nothing is
    /// applied to the cube.
    pub fn rotation_moves_till_found(
        &self,
        face_to_rotate: FaceId,
        location: Location,
        goal: FaceId,
    ) -> Result<(Vec<Move>, Location), CubeError> {
        if location.face == goal {
            return Ok((Vec::new(), location));
        }

        let clockwise = self.move_to_rotate_face(face_to_rotate, true)?;
        let traced = self.trace_moved_sticker(location, clockwise)?;
        if traced.face == goal {
            return Ok((vec![clockwise], traced));
        }

        let counter = clockwise.reversed();
        let traced = self.trace_moved_sticker(location, counter)?;
        if traced.face == goal {
            return Ok((vec![counter], traced));
        }

        let traced = self.trace_moved_sticker(traced, counter)?;
        if traced.face != goal {
            return Err(CubeError::InvalidLocation {
                location,
                reason: "turning the face never carries the sticker onto the goal",
            });
        }
        Ok((vec![counter, counter], traced))
    }

    fn check_location(&self, location: Location) -> Result<(), CubeError> {
        self.location_color(location).map(|_| ())
    }

    fn face_mut(&mut self, id: FaceId) -> &mut Face {
        &mut self.faces[id as usize]
    }
}

impl Index<FaceId> for Cube {
    type Output = Face;

    fn index(&self, index: FaceId) -> &Self::Output {
        &self.faces[index as usize]
    }
}

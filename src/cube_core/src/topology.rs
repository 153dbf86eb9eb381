use std::fmt;

use serde::{Deserialize, Serialize};

use crate::CubeError;

/// One of the six faces of a cube.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FaceId {
    U,
    D,
    R,
    L,
    F,
    B,
}

impl FaceId {
    pub const ALL: [Self; 6] = {
        use FaceId::*;
        let v = [U, D, R, L, F, B];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    #[must_use]
    pub const fn opposite(self) -> FaceId {
        use FaceId::*;
        match self {
            U => D,
            D => U,
            R => L,
            L => R,
            F => B,
            B => F,
        }
    }

    /// The four neighbours of this face, indexed by [`Side`] as seen when looking
    /// straight at the face.
    #[must_use]
    pub const fn side_linked_faces(self) -> [FaceId; 4] {
        use FaceId::*;
        match self {
            F => [L, U, R, D],
            U => [L, B, R, F],
            B => [L, D, R, U],
            L => [D, B, U, F],
            R => [U, B, D, F],
            D => [R, B, L, F],
        }
    }

    #[must_use]
    pub const fn side_linked_face(self, side: Side) -> FaceId {
        self.side_linked_faces()[side as usize]
    }
}

impl fmt::Display for FaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A border of a face, in the order used by [`FaceId::side_linked_faces`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Up,
    Right,
    Down,
}

/// A rotation axis. Each axis permutes a fixed 4-cycle of faces.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    X,
    Y,
    Z,
}

impl Orientation {
    pub const ALL: [Self; 3] = [Orientation::X, Orientation::Y, Orientation::Z];

    /// The faces a turn about this axis cycles through. A forward turn carries the
    /// strip on `cycle[i]` onto `cycle[i + 1]`.
    #[must_use]
    pub const fn rotation_faces(self) -> [FaceId; 4] {
        use FaceId::*;
        match self {
            Orientation::X => [F, R, B, L],
            Orientation::Y => [F, U, B, D],
            Orientation::Z => [R, U, L, D],
        }
    }

    pub(crate) fn cycle_position(self, face: FaceId) -> Option<usize> {
        self.rotation_faces().iter().position(|&f| f == face)
    }
}

impl TryFrom<char> for Orientation {
    type Error = CubeError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'X' | 'x' => Ok(Orientation::X),
            'Y' | 'y' => Ok(Orientation::Y),
            'Z' | 'z' => Ok(Orientation::Z),
            _ => Err(CubeError::InvalidOrientation(value)),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Finds the axis and direction of the quarter turn that carries a sticker from
/// `from` onto the adjacent face `to`.
pub fn single_move_between(from: FaceId, to: FaceId) -> Result<(Orientation, bool), CubeError> {
    if from == to || from.opposite() == to {
        return Err(CubeError::NoSingleMove { from, to });
    }

    Orientation::ALL
        .into_iter()
        .find_map(|axis| {
            let from_pos = axis.cycle_position(from)?;
            let to_pos = axis.cycle_position(to)?;
            Some((axis, (to_pos + 4 - from_pos) % 4 == 1))
        })
        .ok_or(CubeError::NoSingleMove { from, to })
}

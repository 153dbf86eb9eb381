use std::fmt;

use crate::FaceId;

/// A single sticker, addressed by its face and grid coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    pub face: FaceId,
    pub row: usize,
    pub col: usize,
}

impl Location {
    #[must_use]
    pub const fn new(face: FaceId, row: usize, col: usize) -> Location {
        Location { face, row, col }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {})", self.face, self.row, self.col)
    }
}

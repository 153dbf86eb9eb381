use crate::{CubeError, FaceId, Orientation};

/// The order in which a strip's stickers are read off a face.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Traversal {
    TopDown,
    BottomUp,
    LeftRight,
    RightLeft,
}

impl Traversal {
    #[must_use]
    pub const fn reversed(self) -> Traversal {
        match self {
            Traversal::TopDown => Traversal::BottomUp,
            Traversal::BottomUp => Traversal::TopDown,
            Traversal::LeftRight => Traversal::RightLeft,
            Traversal::RightLeft => Traversal::LeftRight,
        }
    }

    /// Whether the strip runs along a column, with its fixed coordinate being the
    /// column index.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Traversal::TopDown | Traversal::BottomUp)
    }

    const fn cell(self, i: usize, fixed: usize, size: usize) -> (usize, usize) {
        match self {
            Traversal::TopDown => (i, fixed),
            Traversal::BottomUp => (size - 1 - i, fixed),
            Traversal::LeftRight => (fixed, i),
            Traversal::RightLeft => (fixed, size - 1 - i),
        }
    }
}

#[derive(Debug, Copy, Clone)]
pub(crate) struct StripLayout {
    pub traversal: Traversal,
    /// Layer indices count from the opposite border of this face.
    pub mirrored: bool,
}

const fn layout(traversal: Traversal, mirrored: bool) -> Option<StripLayout> {
    Some(StripLayout {
        traversal,
        mirrored,
    })
}

// Indexed by `[axis][face]`, faces in `FaceId::ALL` order.
const STRIP_LAYOUTS: [[Option<StripLayout>; 6]; 3] = {
    use Traversal::*;
    [
        // U, D, R, L, F, B
        [
            None,
            None,
            layout(BottomUp, false),
            layout(TopDown, true),
            layout(LeftRight, false),
            layout(RightLeft, true),
        ],
        [
            layout(BottomUp, false),
            layout(TopDown, true),
            None,
            None,
            layout(BottomUp, false),
            layout(BottomUp, false),
        ],
        [
            layout(RightLeft, false),
            layout(RightLeft, false),
            layout(RightLeft, false),
            layout(RightLeft, false),
            None,
            None,
        ],
    ]
};

pub(crate) fn strip_layout(face: FaceId, axis: Orientation) -> Result<StripLayout, CubeError> {
    STRIP_LAYOUTS[axis as usize][face as usize].ok_or(CubeError::IllegalStripAccess { face, axis })
}

/// Maps positions along one strip of a face to grid coordinates and back.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct IndexTranslator {
    traversal: Traversal,
    fixed: usize,
    size: usize,
}

impl IndexTranslator {
    /// The translator for the strip that a turn of `layer` about `axis` moves on `face`.
    pub fn for_strip(
        face: FaceId,
        axis: Orientation,
        layer: usize,
        size: usize,
    ) -> Result<IndexTranslator, CubeError> {
        if layer >= size {
            return Err(CubeError::LayerOutOfRange { layer, size });
        }
        let StripLayout {
            traversal,
            mirrored,
        } = strip_layout(face, axis)?;
        let fixed = if mirrored { size - 1 - layer } else { layer };

        Ok(IndexTranslator {
            traversal,
            fixed,
            size,
        })
    }

    #[must_use]
    pub fn traversal(&self) -> Traversal {
        self.traversal
    }

    #[must_use]
    pub fn translate(&self, i: usize) -> (usize, usize) {
        self.traversal.cell(i, self.fixed, self.size)
    }

    #[must_use]
    pub fn inverse(&self, row: usize, col: usize) -> usize {
        match self.traversal {
            Traversal::TopDown => row,
            Traversal::BottomUp => self.size - 1 - row,
            Traversal::LeftRight => col,
            Traversal::RightLeft => self.size - 1 - col,
        }
    }

    /// Like [`IndexTranslator::translate`] but reading the strip backwards, which is
    /// how the neighbouring face across a shared edge sees the same stickers.
    #[must_use]
    pub fn opposite(&self, i: usize) -> (usize, usize) {
        self.traversal.reversed().cell(i, self.fixed, self.size)
    }
}

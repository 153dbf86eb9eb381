use std::ops::Index;

use itertools::Itertools;

use crate::{
    Color, CubeError, FaceId, IndexTranslator, Orientation, index_translator::strip_layout,
};

/// A square grid of stickers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    size: usize,
    id: FaceId,
    // Row major
    grid: Vec<Color>,
}

impl Face {
    /// Builds a face from its rows, read while looking straight at the face.
    pub fn new(id: FaceId, rows: Vec<Vec<Color>>) -> Result<Face, CubeError> {
        let size = rows.len();
        if let Some(row) = rows.iter().find(|row| row.len() != size) {
            return Err(CubeError::FaceSizeMismatch {
                face: id,
                expected: size,
                found: row.len(),
            });
        }

        Ok(Face {
            size,
            id,
            grid: rows.into_iter().flatten().collect(),
        })
    }

    #[must_use]
    pub fn filled(id: FaceId, size: usize, color: Color) -> Face {
        Face {
            size,
            id,
            grid: vec![color; size * size],
        }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn id(&self) -> FaceId {
        self.id
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Color> {
        (row < self.size && col < self.size).then(|| self.grid[row * self.size + col])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.grid.chunks_exact(self.size.max(1))
    }

    #[must_use]
    pub fn is_monochrome(&self) -> bool {
        self.grid.iter().all_equal()
    }

    pub fn strip_translator(
        &self,
        axis: Orientation,
        layer: usize,
    ) -> Result<IndexTranslator, CubeError> {
        IndexTranslator::for_strip(self.id, axis, layer, self.size)
    }

    pub fn get_strip(&self, axis: Orientation, layer: usize) -> Result<Vec<Color>, CubeError> {
        let translator = self.strip_translator(axis, layer)?;
        Ok((0..self.size)
            .map(|i| {
                let (row, col) = translator.translate(i);
                self.grid[row * self.size + col]
            })
            .collect())
    }

    pub fn set_strip(
        &mut self,
        axis: Orientation,
        layer: usize,
        colors: &[Color],
    ) -> Result<(), CubeError> {
        debug_assert_eq!(colors.len(), self.size);
        let translator = self.strip_translator(axis, layer)?;
        for (i, &color) in colors.iter().enumerate() {
            let (row, col) = translator.translate(i);
            self.grid[row * self.size + col] = color;
        }
        Ok(())
    }

    /// Turns the grid a quarter turn, clockwise as seen looking at the face.
    pub fn rotate_face(&mut self, clockwise: bool) {
        let n = self.size;
        let old = self.grid.clone();
        for row in 0..n {
            for col in 0..n {
                let (src_row, src_col) = if clockwise {
                    (n - 1 - col, row)
                } else {
                    (col, n - 1 - row)
                };
                self.grid[row * n + col] = old[src_row * n + src_col];
            }
        }
    }

    /// The layer a turn about `axis` has to use to move the sticker at `(row, col)`.
    pub fn find_move_index(
        &self,
        axis: Orientation,
        row: usize,
        col: usize,
    ) -> Result<usize, CubeError> {
        let layout = strip_layout(self.id, axis)?;
        let fixed = if layout.traversal.is_vertical() {
            col
        } else {
            row
        };

        Ok(if layout.mirrored {
            self.size - 1 - fixed
        } else {
            fixed
        })
    }
}

impl Index<usize> for Face {
    type Output = [Color];

    fn index(&self, row: usize) -> &Self::Output {
        &self.grid[row * self.size..(row + 1) * self.size]
    }
}

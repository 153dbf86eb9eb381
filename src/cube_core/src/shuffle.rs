use std::iter::FusedIterator;

use crate::{Move, Orientation};

/// A lazily generated random scramble.
pub struct ShuffleMoves {
    rng: fastrand::Rng,
    size: usize,
    remaining: usize,
}

impl ShuffleMoves {
    pub(crate) fn new(rng: fastrand::Rng, size: usize, count: usize) -> ShuffleMoves {
        ShuffleMoves {
            rng,
            size,
            remaining: if size == 0 { 0 } else { count },
        }
    }
}

impl Iterator for ShuffleMoves {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let axis = Orientation::ALL[self.rng.usize(..Orientation::ALL.len())];
        Some(Move::new(axis, self.rng.usize(..self.size), self.rng.bool()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for ShuffleMoves {}

impl FusedIterator for ShuffleMoves {}

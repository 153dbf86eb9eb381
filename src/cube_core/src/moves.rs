use std::fmt;

use crate::Orientation;

/// A quarter turn of one layer about one axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    axis: Orientation,
    layer: usize,
    forward: bool,
}

impl Move {
    #[must_use]
    pub const fn new(axis: Orientation, layer: usize, forward: bool) -> Move {
        Move {
            axis,
            layer,
            forward,
        }
    }

    #[must_use]
    pub const fn axis(&self) -> Orientation {
        self.axis
    }

    #[must_use]
    pub const fn layer(&self) -> usize {
        self.layer
    }

    #[must_use]
    pub const fn is_forward(&self) -> bool {
        self.forward
    }

    #[must_use]
    pub const fn reversed(&self) -> Move {
        Move {
            forward: !self.forward,
            ..*self
        }
    }

    /// The sequence that undoes `moves`.
    #[must_use]
    pub fn invert(moves: &[Move]) -> Vec<Move> {
        moves.iter().rev().map(Move::reversed).collect()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.axis, self.layer)?;
        if !self.forward {
            write!(f, "b")?;
        }
        Ok(())
    }
}

#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

//! Layer-by-layer solving on top of the [`cube_core`] geometry engine.

macro_rules! start {
    ($msg:expr) => {
        concat!("⏳ ", $msg)
    };
}

macro_rules! working {
    ($msg:expr) => {
        concat!("🛠  ", $msg)
    };
}

macro_rules! success {
    ($msg:expr) => {
        concat!("✅ ", $msg)
    };
}

mod solver_3x3;

use cube_core::{Color, Cube, CubeError, FaceId, Move};
use thiserror::Error;

pub use solver_3x3::Solver3x3;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("There is no solver for cubes of size {0}")]
    InvalidCubeSize(usize),
    #[error("No piece carries exactly the colors {0:?}")]
    StickerNotFound(Vec<Color>),
    #[error("Two centers share the color {0}")]
    DuplicateCenterColor(Color),
    #[error("Face {face} has no sticker bordering exactly {neighbours:?}")]
    NoPosition {
        face: FaceId,
        neighbours: Vec<FaceId>,
    },
    #[error(transparent)]
    Cube(#[from] CubeError),
}

/// Why a cube could not be brought back to the solved state. These describe
/// sticker arrangements no sequence of legal moves can produce, such as a cube
/// reassembled with a twisted corner or read back with a misdetected color.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Unsolvable {
    #[error("an odd number of bottom edges face down")]
    OddDownCross,
    #[error("the bottom edges are in an odd permutation")]
    DownEdgeParity,
    #[error("exactly two bottom corners can be placed")]
    CornerPermutationParity,
    #[error("the bottom corner twists do not sum to zero")]
    CornerOrientationParity,
    #[error("a piece of the first two layers cannot be placed")]
    UnplaceablePiece,
    #[error("the stickers do not form a consistent cube")]
    InconsistentStickers,
}

/// The moves a solver applied, and whether they solved the cube.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub moves: Vec<Move>,
    pub unsolvable: Option<Unsolvable>,
}

impl Solution {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.unsolvable.is_none()
    }
}

pub trait Solver {
    /// Solves the cube in place. The returned moves have already been applied.
    fn solve(&mut self) -> Result<Solution, SolverError>;
}

/// The solver for this cube's size, if one exists.
pub fn solver_for(cube: &mut Cube) -> Result<Option<Box<dyn Solver + '_>>, SolverError> {
    match cube.size() {
        3 => Ok(Some(Box::new(Solver3x3::new(cube)?))),
        _ => Ok(None),
    }
}

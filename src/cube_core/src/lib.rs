#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

//! Geometry engine for N×N cube puzzles.
//!
//! A [`Cube`] is six [`Face`] grids glued together by a fixed topology. Every move
//! permutes four strips of stickers around one of three axes and, when it turns an
//! outer layer, rotates the face sitting at that end of the axis. The query side of
//! the API (tracing stickers, finding the other stickers of a piece, choosing the
//! turn that carries a sticker onto a face) never mutates the cube, so a solver can
//! plan against the live state before committing moves.

mod color;
mod cube;
mod face;
mod index_translator;
mod location;
mod moves;
mod shuffle;
mod topology;

pub use color::{Color, ColorScheme};
pub use cube::Cube;
pub use face::Face;
pub use index_translator::{IndexTranslator, Traversal};
pub use location::Location;
pub use moves::Move;
pub use shuffle::ShuffleMoves;
pub use topology::{FaceId, Orientation, Side, single_move_between};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    #[error("`{0}` is not a rotation axis, expected one of X, Y or Z")]
    InvalidOrientation(char),
    #[error("Face {face} does not carry a strip along the {axis} axis")]
    IllegalStripAccess { face: FaceId, axis: Orientation },
    #[error("No single quarter turn carries a sticker from face {from} to face {to}")]
    NoSingleMove { from: FaceId, to: FaceId },
    #[error("Invalid location {location}: {reason}")]
    InvalidLocation {
        location: Location,
        reason: &'static str,
    },
    #[error("Layer {layer} is out of range for a cube of size {size}")]
    LayerOutOfRange { layer: usize, size: usize },
    #[error("Face {face} has size {found}, expected {expected}")]
    FaceSizeMismatch {
        face: FaceId,
        expected: usize,
        found: usize,
    },
    #[error("No grid was supplied for face {0}")]
    MissingFace(FaceId),
    #[error("More than one grid was supplied for face {0}")]
    DuplicateFace(FaceId),
}

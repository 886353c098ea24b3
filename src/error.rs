//! Errors raised at the string and byte boundaries of the engine.
//!
//! Turning faces never fails: faces and directions are closed enums.
//! Everything here comes from parsing notation, parsing color strings,
//! or decoding snapshots.

use thiserror::Error;

use crate::core::{Color, Face};

/// Errors produced while parsing or decoding cube data.
#[derive(Debug, Error)]
pub enum CubeError {
    #[error("Unknown face letter {0:?}, expected one of U, R, F, D, L, B")]
    InvalidFace(char),
    #[error("Invalid move notation {0:?}")]
    InvalidNotation(String),
    #[error("Color string must have {expected} characters but got {actual}")]
    ColorStringLength { expected: usize, actual: usize },
    #[error("Unknown color code {0:?}, expected one of w, r, g, y, o, b")]
    InvalidColor(char),
    #[error("Expected 9 facelets of color {color} but found {count}")]
    ColorCount { color: Color, count: usize },
    #[error("Center of face {face} is {found} but must be {expected}")]
    MisplacedCenter {
        face: Face,
        expected: Color,
        found: Color,
    },
    #[error("Snapshot is marked solved but its layout or history is not")]
    SolvedFlagMismatch,
    #[error("Could not encode or decode cube snapshot: {0}")]
    Snapshot(#[from] bincode::Error),
}

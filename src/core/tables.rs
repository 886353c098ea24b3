//! Constant lookup tables for face turns.
//!
//! These are the single source of truth for cube geometry:
//!
//! - Two own-face permutations (one per direction), shared by all faces.
//! - Four strip index triples (top, right, bottom, left).
//! - One adjacency cycle per face listing the 4 neighboring strips.
//!
//! ## Orientation
//!
//! Faces are stored as seen from outside the cube, in row-major order:
//!
//! ```text
//!        U
//!     L  F  R  B
//!        D
//! ```
//!
//! U is viewed with B at its top edge, D with F at its top edge, B with U at
//! its top edge. Every strip is read clockwise around its own face, which
//! walks every shared edge in the same rotational sense around the turned
//! face. A plain cyclic shift of the four strips is then a legal turn.

use serde::{Deserialize, Serialize};

use super::face::Face;
use super::moves::Direction;

/// Clockwise own-face permutation: `new[i] = old[CLOCKWISE[i]]`.
pub const CLOCKWISE: [usize; 9] = [6, 3, 0, 7, 4, 1, 8, 5, 2];

/// Counter-clockwise own-face permutation, the inverse of `CLOCKWISE`.
pub const COUNTER_CLOCKWISE: [usize; 9] = [2, 5, 8, 1, 4, 7, 0, 3, 6];

/// Index of the center facelet, fixed by every permutation.
pub const CENTER: usize = 4;

/// One of the four edge strips of a face, as viewed head-on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strip {
    Top,
    Right,
    Bottom,
    Left,
}

impl Strip {
    /// All strips, clockwise from the top.
    pub const ALL: [Strip; 4] = [Strip::Top, Strip::Right, Strip::Bottom, Strip::Left];

    /// Facelet indices of this strip, read clockwise around its face.
    #[must_use]
    pub const fn indices(self) -> [usize; 3] {
        STRIP_INDICES[self as usize]
    }
}

/// Facelet indices per strip, indexed by `Strip as usize`.
pub const STRIP_INDICES: [[usize; 3]; 4] = [
    [0, 1, 2], // top
    [2, 5, 8], // right
    [8, 7, 6], // bottom
    [6, 3, 0], // left
];

/// Neighboring strips per turned face, indexed by `Face::index()`.
///
/// Each cycle lists the strips in clockwise order around the turned face.
/// A clockwise turn carries each strip's content one entry forward.
pub static ADJACENT: [[(Face, Strip); 4]; 6] = [
    // U
    [
        (Face::B, Strip::Top),
        (Face::R, Strip::Top),
        (Face::F, Strip::Top),
        (Face::L, Strip::Top),
    ],
    // R
    [
        (Face::U, Strip::Right),
        (Face::B, Strip::Left),
        (Face::D, Strip::Right),
        (Face::F, Strip::Right),
    ],
    // F
    [
        (Face::U, Strip::Bottom),
        (Face::R, Strip::Left),
        (Face::D, Strip::Top),
        (Face::L, Strip::Right),
    ],
    // D
    [
        (Face::F, Strip::Bottom),
        (Face::R, Strip::Bottom),
        (Face::B, Strip::Bottom),
        (Face::L, Strip::Bottom),
    ],
    // L
    [
        (Face::U, Strip::Left),
        (Face::F, Strip::Left),
        (Face::D, Strip::Left),
        (Face::B, Strip::Right),
    ],
    // B
    [
        (Face::U, Strip::Top),
        (Face::L, Strip::Left),
        (Face::D, Strip::Bottom),
        (Face::R, Strip::Right),
    ],
];

/// Own-face permutation for a direction.
#[must_use]
pub const fn face_permutation(direction: Direction) -> &'static [usize; 9] {
    match direction {
        Direction::Clockwise => &CLOCKWISE,
        Direction::CounterClockwise => &COUNTER_CLOCKWISE,
    }
}

/// Adjacency cycle for a turned face.
#[must_use]
pub fn adjacent_cycle(face: Face) -> &'static [(Face, Strip); 4] {
    &ADJACENT[face.index()]
}

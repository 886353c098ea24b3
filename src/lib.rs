//! # rust-cube
//!
//! A state engine for the 3×3×3 twisty puzzle.
//!
//! ## Design Principles
//!
//! 1. **One Mutation Primitive**: Every change to the facelets goes through
//!    `Cube::rotate`. Scramble, solve and replay are loops over it.
//!
//! 2. **Tables Over Code**: Turn geometry lives in constant lookup tables
//!    (`core::tables`). Tests validate against them directly.
//!
//! 3. **Owned State**: No global cube. Callers own their `Cube` values and
//!    clone them for non-destructive previews.
//!
//! ## Solving
//!
//! "Solving" replays the exact inverse of the recorded history. The engine
//! does not search for solutions of arbitrary states.
//!
//! ## Modules
//!
//! - `core`: Faces, colors, moves, lookup tables, RNG, configuration, cube state
//! - `replay`: Step-by-step replay for rendering collaborators
//! - `error`: Parse and decode errors
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod error;
pub mod replay;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Color, Face, Strip,
    Direction, Move, parse_algorithm, format_algorithm, invert_algorithm,
    CubeRng,
    ScrambleConfig, DEFAULT_SCRAMBLE_MOVES,
    Cube, FaceletGrid, FACELET_COUNT, FACELETS_PER_FACE,
};

pub use crate::error::CubeError;

pub use crate::replay::{Replay, ReplayStep};

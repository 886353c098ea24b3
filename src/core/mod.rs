//! Core cube types: faces, colors, moves, lookup tables, RNG, configuration, state.
//!
//! Everything a caller needs to turn, scramble and solve a cube lives here.
//! Geometry is fixed in `tables`; all mutation goes through `Cube::rotate`.

pub mod color;
pub mod face;
pub mod moves;
pub mod tables;
pub mod rng;
pub mod config;
pub mod cube;

pub use color::Color;
pub use face::Face;
pub use moves::{format_algorithm, invert_algorithm, parse_algorithm, Direction, Move};
pub use tables::Strip;
pub use rng::CubeRng;
pub use config::{ScrambleConfig, DEFAULT_SCRAMBLE_MOVES};
pub use cube::{Cube, FaceletGrid, FACELETS_PER_FACE, FACELET_COUNT};

//! Python bindings for the cube engine.
//!
//! Rendering front ends written in Python drive the engine through these
//! bindings: they send turns, scramble and solve, and read back color
//! strings and move lists.
//!
//! # Quick Start
//!
//! ```python
//! import rust_cube
//!
//! cube = rust_cube.Cube()
//! cube.scramble(20, seed=42)
//!
//! for move, colors in cube.preview_solve():
//!     draw(colors)
//!
//! cube.solve()
//! assert cube.is_solved
//! ```

use pyo3::prelude::*;

mod py_cube;

pub use py_cube::*;

/// rust_cube: a 3x3x3 cube state engine.
#[pymodule]
fn rust_cube(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCube>()?;
    Ok(())
}

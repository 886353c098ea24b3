//! Cube bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{format_algorithm, Cube, ScrambleConfig, DEFAULT_SCRAMBLE_MOVES};
use crate::error::CubeError;
use crate::replay::Replay;

fn to_py_err(err: CubeError) -> PyErr {
    PyErr::new::<PyValueError, _>(err.to_string())
}

/// Python wrapper for Cube.
#[pyclass(name = "Cube")]
#[derive(Clone)]
pub struct PyCube(pub Cube);

#[pymethods]
impl PyCube {
    /// Create a solved cube, or parse one from a 54-character color string.
    #[new]
    #[pyo3(signature = (colors = None))]
    fn new(colors: Option<&str>) -> PyResult<Self> {
        match colors {
            Some(colors) => Cube::from_color_string(colors).map(Self).map_err(to_py_err),
            None => Ok(Self(Cube::new())),
        }
    }

    /// Apply moves in notation, e.g. "R U R' U'".
    fn rotate(&mut self, notation: &str) -> PyResult<()> {
        self.0.apply_notation(notation).map_err(to_py_err)
    }

    /// Scramble with random quarter turns. Returns the seed used.
    #[pyo3(signature = (move_count = DEFAULT_SCRAMBLE_MOVES, seed = None))]
    fn scramble(&mut self, move_count: usize, seed: Option<u64>) -> u64 {
        let mut config = ScrambleConfig::new().with_move_count(move_count);
        if let Some(seed) = seed {
            config = config.with_seed(seed);
        }
        self.0.scramble_with(&config)
    }

    /// Undo the history. Returns the applied moves in notation.
    fn solve(&mut self) -> Vec<String> {
        self.0.solve().iter().map(ToString::to_string).collect()
    }

    /// Color strings after each move of the pending solve, without solving.
    fn preview_solve(&self) -> Vec<(String, String)> {
        Replay::preview_solve(&self.0)
            .map(|step| (step.turn.to_string(), step.colors))
            .collect()
    }

    /// Return to the solved state.
    fn reset(&mut self) {
        self.0.reset();
    }

    /// The 54-character color string.
    fn color_string(&self) -> String {
        self.0.color_string()
    }

    #[getter]
    fn history(&self) -> Vec<String> {
        self.0.history_notation()
    }

    #[getter]
    fn is_solved(&self) -> bool {
        self.0.is_solved()
    }

    fn copy(&self) -> Self {
        self.clone()
    }

    fn __repr__(&self) -> String {
        let history: Vec<_> = self.0.history().iter().copied().collect();
        format!(
            "Cube({}, history=\"{}\")",
            self.0.color_string(),
            format_algorithm(&history)
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

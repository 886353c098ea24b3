//! Step-by-step replay of move sequences.
//!
//! Rendering collaborators show scrambles and solutions one turn at a time.
//! A `Replay` applies the moves to its own clone of the starting cube and
//! yields the color string after each turn, so the caller's cube is never
//! touched.
//!
//! ```
//! use rust_cube::core::{Cube, CubeRng};
//! use rust_cube::replay::Replay;
//!
//! let mut cube = Cube::new();
//! cube.scramble(4, &mut CubeRng::new(1));
//!
//! let steps: Vec<_> = Replay::preview_solve(&cube).collect();
//! assert_eq!(steps.len(), 4);
//! assert_eq!(steps[3].colors, Cube::new().color_string());
//! assert!(!cube.is_solved());
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{Cube, Move};

/// The state after one replayed turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayStep {
    /// Position of this turn in the sequence (0-indexed).
    pub index: usize,

    /// The turn that was applied.
    pub turn: Move,

    /// Color string after applying the turn.
    pub colors: String,
}

/// Iterator applying moves to a private copy of a cube.
#[derive(Clone, Debug)]
pub struct Replay {
    cube: Cube,
    moves: Vec<Move>,
    next: usize,
}

impl Replay {
    /// Replay `moves` starting from a copy of `start`.
    #[must_use]
    pub fn new(start: &Cube, moves: &[Move]) -> Self {
        Self {
            cube: start.clone(),
            moves: moves.to_vec(),
            next: 0,
        }
    }

    /// Replay what `solve` would apply to `cube`, without solving it.
    #[must_use]
    pub fn preview_solve(cube: &Cube) -> Self {
        Self::new(cube, &cube.inverse_history())
    }

    /// The replay's cube in its current state.
    #[must_use]
    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    /// Moves not yet replayed.
    #[must_use]
    pub fn remaining(&self) -> &[Move] {
        &self.moves[self.next..]
    }
}

impl Iterator for Replay {
    type Item = ReplayStep;

    fn next(&mut self) -> Option<Self::Item> {
        let turn = *self.moves.get(self.next)?;
        self.cube.apply(turn);

        let step = ReplayStep {
            index: self.next,
            turn,
            colors: self.cube.color_string(),
        };
        self.next += 1;
        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.moves.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Replay {}

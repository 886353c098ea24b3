//! Cube state: six faces of nine facelets, move history, solved flag.
//!
//! ## Turning
//!
//! Every mutation goes through [`Cube::rotate`], which permutes the turned
//! face's own facelets and cycles the four neighboring strips, then records
//! the move. Scrambling and solving are built from repeated `rotate` calls.
//!
//! ## Solved flag
//!
//! `is_solved` tracks history, not geometry: it is `true` only after
//! construction, `reset` or `solve`, and any turn clears it, even one that
//! happens to restore the solved layout. Use
//! [`Cube::matches_solved_layout`] for the geometric check.
//!
//! ## Example
//!
//! ```
//! use rust_cube::core::{Cube, CubeRng};
//!
//! let mut cube = Cube::new();
//! let solved = cube.color_string();
//!
//! cube.scramble(5, &mut CubeRng::new(42));
//! assert_eq!(cube.history().len(), 5);
//!
//! let solution = cube.solve();
//! assert_eq!(solution.len(), 5);
//! assert_eq!(cube.color_string(), solved);
//! ```

use im::Vector;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::color::Color;
use super::config::ScrambleConfig;
use super::face::Face;
use super::moves::{parse_algorithm, Direction, Move};
use super::rng::CubeRng;
use super::tables::{adjacent_cycle, face_permutation, CENTER};
use crate::error::CubeError;

/// Total number of facelets on the cube.
pub const FACELET_COUNT: usize = 54;

/// Facelets per face.
pub const FACELETS_PER_FACE: usize = 9;

/// The facelets of one face in row-major order.
pub type FaceletGrid = [Color; FACELETS_PER_FACE];

/// A 3×3×3 cube.
///
/// Faces are stored in `Face::ALL` order. History uses a persistent vector,
/// so cloning a cube for replay does not copy the move list.
///
/// Deserializing from any serde format validates the facelets, so a decoded
/// cube always satisfies the same invariants as one built by turning.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CubeSnapshot")]
pub struct Cube {
    faces: [FaceletGrid; 6],
    history: Vector<Move>,
    solved: bool,
}

/// Unchecked wire form of a [`Cube`].
#[derive(Deserialize)]
struct CubeSnapshot {
    faces: [FaceletGrid; 6],
    history: Vector<Move>,
    solved: bool,
}

impl TryFrom<CubeSnapshot> for Cube {
    type Error = CubeError;

    fn try_from(snapshot: CubeSnapshot) -> Result<Self, Self::Error> {
        validate_faces(&snapshot.faces)?;
        let cube = Self {
            faces: snapshot.faces,
            history: snapshot.history,
            solved: snapshot.solved,
        };
        // Only new, reset and solve set the flag, and each leaves a solved layout with no history.
        if cube.solved && (!cube.history.is_empty() || !cube.matches_solved_layout()) {
            return Err(CubeError::SolvedFlagMismatch);
        }
        Ok(cube)
    }
}

impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}

impl Cube {
    /// Create a cube in the solved configuration with empty history.
    #[must_use]
    pub fn new() -> Self {
        Self {
            faces: Face::ALL.map(|face| [face.home_color(); FACELETS_PER_FACE]),
            history: Vector::new(),
            solved: true,
        }
    }

    /// Parse a 54-character color string (faces U, R, F, D, L, B).
    ///
    /// The string must use the `wrgyob` alphabet, contain nine facelets of
    /// each color, and keep every center on its home face. The parsed cube
    /// has an empty history and counts as solved only if it matches the
    /// solved layout.
    pub fn from_color_string(colors: &str) -> Result<Self, CubeError> {
        let codes: Vec<char> = colors.chars().collect();
        if codes.len() != FACELET_COUNT {
            return Err(CubeError::ColorStringLength {
                expected: FACELET_COUNT,
                actual: codes.len(),
            });
        }

        let mut faces = [[Color::White; FACELETS_PER_FACE]; 6];
        for (i, code) in codes.into_iter().enumerate() {
            faces[i / FACELETS_PER_FACE][i % FACELETS_PER_FACE] =
                Color::from_code(code).ok_or(CubeError::InvalidColor(code))?;
        }
        validate_faces(&faces)?;

        let mut cube = Self {
            faces,
            history: Vector::new(),
            solved: false,
        };
        cube.solved = cube.matches_solved_layout();
        Ok(cube)
    }

    /// Decode a snapshot produced by [`Cube::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CubeError> {
        let snapshot: CubeSnapshot = bincode::deserialize(bytes)?;
        Cube::try_from(snapshot)
    }

    /// Encode the full state, history included, as a compact snapshot.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CubeError> {
        Ok(bincode::serialize(self)?)
    }

    // === Turning ===

    /// Turn `face` a quarter turn in `direction` and record the move.
    ///
    /// Always clears the solved flag.
    pub fn rotate(&mut self, face: Face, direction: Direction) {
        let mv = Move::new(face, direction);
        trace!("rotate {mv}");

        self.rotate_face(face, direction);
        self.rotate_adjacent(face, direction);
        self.history.push_back(mv);
        self.solved = false;
    }

    /// Apply a single move.
    pub fn apply(&mut self, mv: Move) {
        self.rotate(mv.face, mv.direction);
    }

    /// Apply a sequence of moves in order.
    pub fn apply_algorithm(&mut self, moves: &[Move]) {
        for mv in moves {
            self.apply(*mv);
        }
    }

    /// Parse and apply notation such as `"R U R' U'"`.
    ///
    /// Nothing is applied if any token fails to parse.
    pub fn apply_notation(&mut self, notation: &str) -> Result<(), CubeError> {
        let moves = parse_algorithm(notation)?;
        self.apply_algorithm(&moves);
        Ok(())
    }

    /// Permute the turned face's own nine facelets.
    fn rotate_face(&mut self, face: Face, direction: Direction) {
        let permutation = face_permutation(direction);
        let old = self.faces[face.index()];
        self.faces[face.index()] = std::array::from_fn(|i| old[permutation[i]]);
    }

    /// Cycle the four strips bordering the turned face.
    fn rotate_adjacent(&mut self, face: Face, direction: Direction) {
        let cycle = adjacent_cycle(face);
        let strips: [[Color; 3]; 4] = std::array::from_fn(|k| {
            let (neighbor, strip) = cycle[k];
            strip.indices().map(|i| self.faces[neighbor.index()][i])
        });

        for (k, (neighbor, strip)) in cycle.iter().enumerate() {
            // Clockwise pulls from the previous cycle entry, counter-clockwise from the next.
            let source = match direction {
                Direction::Clockwise => (k + 3) % 4,
                Direction::CounterClockwise => (k + 1) % 4,
            };
            for (index, color) in strip.indices().into_iter().zip(strips[source]) {
                self.faces[neighbor.index()][index] = color;
            }
        }
    }

    // === Scramble / Solve ===

    /// Clear history, then apply `move_count` uniformly random quarter turns.
    ///
    /// Leaves the cube marked unsolved, even for `move_count == 0`.
    pub fn scramble(&mut self, move_count: usize, rng: &mut CubeRng) {
        self.history.clear();
        for _ in 0..move_count {
            let mv = rng.random_move();
            self.apply(mv);
        }
        self.solved = false;

        debug!("Scrambled with {} moves (seed {})", move_count, rng.seed());
    }

    /// Scramble according to `config`. Returns the seed that was used.
    pub fn scramble_with(&mut self, config: &ScrambleConfig) -> u64 {
        let mut rng = config.rng();
        self.scramble(config.move_count, &mut rng);
        rng.seed()
    }

    /// Undo the entire history by applying its exact inverse.
    ///
    /// Returns the applied inverse sequence (history reversed, every
    /// direction flipped), then clears history and marks the cube solved.
    /// An empty history yields an empty sequence.
    pub fn solve(&mut self) -> Vec<Move> {
        let solution = self.inverse_history();
        self.apply_algorithm(&solution);
        self.history.clear();
        self.solved = true;

        debug!("Solved by undoing {} moves", solution.len());
        solution
    }

    /// Return to the reference solved state with empty history.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    // === Queries ===

    /// Moves applied since the last scramble, solve or reset, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<Move> {
        &self.history
    }

    /// History in move notation, e.g. `["R", "U'"]`.
    #[must_use]
    pub fn history_notation(&self) -> Vec<String> {
        self.history.iter().map(ToString::to_string).collect()
    }

    /// The sequence `solve` would apply right now.
    #[must_use]
    pub fn inverse_history(&self) -> Vec<Move> {
        self.history.iter().rev().map(|mv| mv.inverse()).collect()
    }

    /// History-based solved flag. See the module docs.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Whether every face is uniformly its home color.
    #[must_use]
    pub fn matches_solved_layout(&self) -> bool {
        Face::ALL.iter().all(|face| {
            self.faces[face.index()]
                .iter()
                .all(|color| *color == face.home_color())
        })
    }

    /// Facelets of one face.
    #[must_use]
    pub fn face(&self, face: Face) -> &FaceletGrid {
        &self.faces[face.index()]
    }

    /// A single facelet, or `None` if `index` is outside 0..9.
    #[must_use]
    pub fn facelet(&self, face: Face, index: usize) -> Option<Color> {
        self.faces[face.index()].get(index).copied()
    }

    /// Facelet count per color, indexed by `Color::index()`.
    #[must_use]
    pub fn color_counts(&self) -> [usize; 6] {
        count_colors(&self.faces)
    }

    /// The 54-character color string, faces in U, R, F, D, L, B order.
    #[must_use]
    pub fn color_string(&self) -> String {
        self.faces
            .iter()
            .flatten()
            .map(|color| color.code())
            .collect()
    }
}

impl std::fmt::Display for Cube {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.color_string())
    }
}

fn count_colors(faces: &[FaceletGrid; 6]) -> [usize; 6] {
    let mut counts = [0; 6];
    for color in faces.iter().flatten() {
        counts[color.index()] += 1;
    }
    counts
}

fn validate_faces(faces: &[FaceletGrid; 6]) -> Result<(), CubeError> {
    let counts = count_colors(faces);
    for color in Color::ALL {
        let count = counts[color.index()];
        if count != FACELETS_PER_FACE {
            return Err(CubeError::ColorCount { color, count });
        }
    }

    for face in Face::ALL {
        let found = faces[face.index()][CENTER];
        if found != face.home_color() {
            return Err(CubeError::MisplacedCenter {
                face,
                expected: face.home_color(),
                found,
            });
        }
    }

    Ok(())
}

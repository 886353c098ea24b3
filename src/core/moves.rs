//! Move representation: face + direction.
//!
//! Moves use standard notation: the face letter, optionally followed by an
//! apostrophe for a counter-clockwise ("prime") turn.
//!
//! ```
//! use rust_cube::core::{Direction, Face, Move};
//!
//! let mv: Move = "R'".parse().unwrap();
//! assert_eq!(mv, Move::new(Face::R, Direction::CounterClockwise));
//! assert_eq!(mv.inverse().to_string(), "R");
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::face::Face;
use crate::error::CubeError;

/// Direction of a quarter turn, as seen looking straight at the turned face.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// Both directions, clockwise first.
    pub const ALL: [Direction; 2] = [Direction::Clockwise, Direction::CounterClockwise];

    /// `true` for the prime (counter-clockwise) direction.
    #[must_use]
    pub const fn is_prime(self) -> bool {
        matches!(self, Direction::CounterClockwise)
    }

    /// Build from a prime flag.
    #[must_use]
    pub const fn from_prime(prime: bool) -> Self {
        if prime {
            Direction::CounterClockwise
        } else {
            Direction::Clockwise
        }
    }

    /// The opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// A single quarter turn of one face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The face being turned.
    pub face: Face,

    /// The turn direction.
    pub direction: Direction,
}

impl Move {
    /// Create a move.
    #[must_use]
    pub const fn new(face: Face, direction: Direction) -> Self {
        Self { face, direction }
    }

    /// Clockwise turn of `face`.
    #[must_use]
    pub const fn clockwise(face: Face) -> Self {
        Self::new(face, Direction::Clockwise)
    }

    /// Counter-clockwise turn of `face`.
    #[must_use]
    pub const fn prime(face: Face) -> Self {
        Self::new(face, Direction::CounterClockwise)
    }

    /// The move that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self::new(self.face, self.direction.flipped())
    }

    /// Whether this is a counter-clockwise turn.
    #[must_use]
    pub const fn is_prime(self) -> bool {
        self.direction.is_prime()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_prime() {
            write!(f, "{}'", self.face)
        } else {
            write!(f, "{}", self.face)
        }
    }
}

impl FromStr for Move {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let letter = chars
            .next()
            .ok_or_else(|| CubeError::InvalidNotation(s.to_string()))?;
        let face = Face::try_from(letter)?;

        match (chars.next(), chars.next()) {
            (None, _) => Ok(Move::clockwise(face)),
            (Some('\''), None) => Ok(Move::prime(face)),
            _ => Err(CubeError::InvalidNotation(s.to_string())),
        }
    }
}

/// Parse a whitespace-separated sequence of moves, e.g. `"R U R' U'"`.
///
/// An empty or all-whitespace string yields an empty sequence.
pub fn parse_algorithm(notation: &str) -> Result<Vec<Move>, CubeError> {
    notation.split_whitespace().map(str::parse).collect()
}

/// Format moves as space-separated notation.
#[must_use]
pub fn format_algorithm(moves: &[Move]) -> String {
    moves
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// The group inverse of a move sequence: reversed order, every direction flipped.
#[must_use]
pub fn invert_algorithm(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().map(|mv| mv.inverse()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_flip() {
        assert_eq!(Direction::Clockwise.flipped(), Direction::CounterClockwise);
        assert_eq!(Direction::CounterClockwise.flipped(), Direction::Clockwise);
        assert!(Direction::from_prime(true).is_prime());
        assert!(!Direction::from_prime(false).is_prime());
        assert_eq!(Direction::default(), Direction::Clockwise);
    }

    #[test]
    fn test_display() {
        assert_eq!(Move::clockwise(Face::U).to_string(), "U");
        assert_eq!(Move::prime(Face::L).to_string(), "L'");
    }

    #[test]
    fn test_parse_all_moves() {
        for face in Face::ALL {
            for direction in Direction::ALL {
                let mv = Move::new(face, direction);
                assert_eq!(mv.to_string().parse::<Move>().unwrap(), mv);
            }
        }
    }

    #[test]
    fn test_parse_rejects_bad_notation() {
        assert!(matches!("".parse::<Move>(), Err(CubeError::InvalidNotation(_))));
        assert!(matches!("X".parse::<Move>(), Err(CubeError::InvalidFace('X'))));
        assert!(matches!("R2".parse::<Move>(), Err(CubeError::InvalidNotation(_))));
        assert!(matches!("R''".parse::<Move>(), Err(CubeError::InvalidNotation(_))));
    }

    #[test]
    fn test_parse_algorithm() {
        let moves = parse_algorithm("R U  R'\tU'").unwrap();
        assert_eq!(
            moves,
            vec![
                Move::clockwise(Face::R),
                Move::clockwise(Face::U),
                Move::prime(Face::R),
                Move::prime(Face::U),
            ]
        );
        assert_eq!(format_algorithm(&moves), "R U R' U'");

        assert!(parse_algorithm("").unwrap().is_empty());
        assert!(parse_algorithm("R Q").is_err());
    }

    #[test]
    fn test_invert_algorithm() {
        let moves = parse_algorithm("F R' U").unwrap();
        let inverse = invert_algorithm(&moves);
        assert_eq!(format_algorithm(&inverse), "U' R F'");
        assert!(invert_algorithm(&[]).is_empty());
    }

    #[test]
    fn test_move_serialization() {
        let mv = Move::prime(Face::D);
        let json = serde_json::to_string(&mv).unwrap();
        let deserialized: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(mv, deserialized);
    }
}

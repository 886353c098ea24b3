//! Face identifiers.
//!
//! The six faces are named by their standard letters. Their declaration
//! order (U, R, F, D, L, B) is the canonical order used for storage and for
//! the color string.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::color::Color;
use crate::error::CubeError;

/// One of the six faces of the cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Face {
    /// Up
    U,
    /// Right
    R,
    /// Front
    F,
    /// Down
    D,
    /// Left
    L,
    /// Back
    B,
}

impl Face {
    /// All faces in canonical order.
    pub const ALL: [Face; 6] = [Face::U, Face::R, Face::F, Face::D, Face::L, Face::B];

    /// Position of this face in `Face::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Notation letter for this face.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Face::U => 'U',
            Face::R => 'R',
            Face::F => 'F',
            Face::D => 'D',
            Face::L => 'L',
            Face::B => 'B',
        }
    }

    /// Parse a notation letter. Only uppercase letters are accepted.
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Face> {
        match letter {
            'U' => Some(Face::U),
            'R' => Some(Face::R),
            'F' => Some(Face::F),
            'D' => Some(Face::D),
            'L' => Some(Face::L),
            'B' => Some(Face::B),
            _ => None,
        }
    }

    /// Color of this face in the solved configuration.
    #[must_use]
    pub const fn home_color(self) -> Color {
        Color::ALL[self.index()]
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl TryFrom<char> for Face {
    type Error = CubeError;

    fn try_from(letter: char) -> Result<Self, Self::Error> {
        Face::from_letter(letter).ok_or(CubeError::InvalidFace(letter))
    }
}

impl FromStr for Face {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Face::try_from(letter),
            _ => Err(CubeError::InvalidNotation(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        let letters: String = Face::ALL.iter().map(|f| f.letter()).collect();
        assert_eq!(letters, "URFDLB");

        for (i, face) in Face::ALL.iter().enumerate() {
            assert_eq!(face.index(), i);
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("R".parse::<Face>().unwrap(), Face::R);
        assert_eq!(Face::try_from('B').unwrap(), Face::B);

        assert!(matches!("u".parse::<Face>(), Err(CubeError::InvalidFace('u'))));
        assert!(matches!("RU".parse::<Face>(), Err(CubeError::InvalidNotation(_))));
        assert!(matches!("".parse::<Face>(), Err(CubeError::InvalidNotation(_))));
    }

    #[test]
    fn test_home_color_matches_color_home_face() {
        for face in Face::ALL {
            assert_eq!(face.home_color().home_face(), face);
        }
    }
}

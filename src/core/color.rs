//! Facelet colors.
//!
//! Six fixed colors, one per face center. Each color has a single-character
//! code used in the 54-character color string.

use serde::{Deserialize, Serialize};

use super::face::Face;

/// Color of a single facelet.
///
/// Declared in face order (U, R, F, D, L, B), so `Color::ALL[i]` is the
/// home color of `Face::ALL[i]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    White,
    Red,
    Green,
    Yellow,
    Orange,
    Blue,
}

impl Color {
    /// All colors in face order.
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Orange,
        Color::Blue,
    ];

    /// Position of this color in `Color::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Single-character code used in color strings.
    ///
    /// ```
    /// use rust_cube::core::Color;
    ///
    /// assert_eq!(Color::White.code(), 'w');
    /// assert_eq!(Color::Orange.code(), 'o');
    /// ```
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Color::White => 'w',
            Color::Red => 'r',
            Color::Green => 'g',
            Color::Yellow => 'y',
            Color::Orange => 'o',
            Color::Blue => 'b',
        }
    }

    /// Parse a color code. Returns `None` for anything outside the alphabet.
    #[must_use]
    pub const fn from_code(code: char) -> Option<Color> {
        match code {
            'w' => Some(Color::White),
            'r' => Some(Color::Red),
            'g' => Some(Color::Green),
            'y' => Some(Color::Yellow),
            'o' => Some(Color::Orange),
            'b' => Some(Color::Blue),
            _ => None,
        }
    }

    /// The face whose center carries this color.
    #[must_use]
    pub const fn home_face(self) -> Face {
        Face::ALL[self.index()]
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

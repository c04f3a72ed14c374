//! Sticker colors and the assignment of colors to faces.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};
use thiserror::Error;

use crate::{Face, Vector};

/// Sticker color.
#[derive(
    Serialize, Deserialize, Debug, Display, EnumIter, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "lowercase")]
#[allow(missing_docs)]
pub enum Color {
    White,
    Yellow,
    Blue,
    Green,
    Orange,
    Red,
}

impl Color {
    /// Returns the one-character symbol used in nets.
    pub fn symbol(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Blue => 'B',
            Color::Green => 'G',
            Color::Orange => 'O',
            Color::Red => 'R',
        }
    }

    /// Returns the color with the symbol `c`, if there is one.
    pub fn from_symbol(c: char) -> Option<Self> {
        Self::iter().find(|color| color.symbol() == c.to_ascii_uppercase())
    }

    /// Returns the color as an RGB triple, for terminals that support it.
    pub fn rgb(self) -> [u8; 3] {
        match self {
            Color::White => [255, 255, 255],
            Color::Yellow => [255, 213, 0],
            Color::Blue => [0, 70, 173],
            Color::Green => [0, 155, 72],
            Color::Orange => [255, 88, 0],
            Color::Red => [183, 18, 52],
        }
    }
}

/// Error produced when a color scheme cannot be used for a cube.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColorSchemeError {
    /// Two faces share a color
    #[error("faces {0} and {1} are both {2}")]
    DuplicateColor(Face, Face, Color),
}

/// Color of each face of a solved cube.
///
/// This is the only place where colors are assigned to pieces. After
/// construction, colors move only with the vectors they are bound to.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(deny_unknown_fields)]
#[allow(missing_docs)]
pub struct ColorScheme {
    pub up: Color,
    pub down: Color,
    pub left: Color,
    pub right: Color,
    pub front: Color,
    pub back: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            up: Color::White,
            down: Color::Yellow,
            left: Color::Orange,
            right: Color::Red,
            front: Color::Green,
            back: Color::Blue,
        }
    }
}

impl ColorScheme {
    /// Returns the color of `face`.
    pub fn get(&self, face: Face) -> Color {
        match face {
            Face::U => self.up,
            Face::D => self.down,
            Face::L => self.left,
            Face::R => self.right,
            Face::F => self.front,
            Face::B => self.back,
        }
    }

    /// Returns the color bound to the face-normal `vector` in a solved cube.
    pub fn color_of_vector(&self, vector: Vector) -> Option<Color> {
        Face::from_vector(vector).map(|face| self.get(face))
    }

    /// Returns an error if two faces share a color.
    pub fn validate(&self) -> Result<(), ColorSchemeError> {
        for (i, a) in Face::iter().enumerate() {
            for b in Face::iter().skip(i + 1) {
                if self.get(a) == self.get(b) {
                    return Err(ColorSchemeError::DuplicateColor(a, b, self.get(a)));
                }
            }
        }
        Ok(())
    }
}

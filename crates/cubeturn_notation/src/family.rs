//! Move families: the letter of a move, which names the layers that turn.

use strum::{Display, EnumIter, EnumString};

/// Letter naming which layers of the cube a move turns.
///
/// Directions follow standard notation: a slice turns the same way as the face
/// it is named after (`M` like `L`, `E` like `D`, `S` like `F`) and a rotation
/// turns the same way as a face move on its axis (`x` like `R`, `y` like `U`,
/// `z` like `F`).
#[derive(
    Debug, Display, EnumString, EnumIter, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Family {
    /// Up face.
    U,
    /// Down face.
    D,
    /// Left face.
    L,
    /// Right face.
    R,
    /// Front face.
    F,
    /// Back face.
    B,

    /// Middle slice between `L` and `R`.
    M,
    /// Equatorial slice between `U` and `D`.
    E,
    /// Standing slice between `F` and `B`.
    S,

    /// Up face and the `E` slice.
    #[strum(to_string = "u")]
    WideU,
    /// Down face and the `E` slice.
    #[strum(to_string = "d")]
    WideD,
    /// Left face and the `M` slice.
    #[strum(to_string = "l")]
    WideL,
    /// Right face and the `M` slice.
    #[strum(to_string = "r")]
    WideR,
    /// Front face and the `S` slice.
    #[strum(to_string = "f")]
    WideF,
    /// Back face and the `S` slice.
    #[strum(to_string = "b")]
    WideB,

    /// Whole cube on the `R` axis.
    #[strum(to_string = "x")]
    X,
    /// Whole cube on the `U` axis.
    #[strum(to_string = "y")]
    Y,
    /// Whole cube on the `F` axis.
    #[strum(to_string = "z")]
    Z,
}

/// Broad category of a [`Family`].
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FamilyKind {
    /// Single outer layer.
    #[strum(to_string = "face turn")]
    Face,
    /// Single inner layer.
    #[strum(to_string = "slice turn")]
    Slice,
    /// Outer layer plus the adjacent inner layer.
    #[strum(to_string = "wide turn")]
    Wide,
    /// All three layers.
    #[strum(to_string = "rotation")]
    Rotation,
}

impl Family {
    /// Returns the family written as the character `c`, if there is one.
    pub fn from_char(c: char) -> Option<Self> {
        c.encode_utf8(&mut [0; 4]).parse().ok()
    }

    /// Returns the category of the family.
    pub fn kind(self) -> FamilyKind {
        use Family::*;

        match self {
            U | D | L | R | F | B => FamilyKind::Face,
            M | E | S => FamilyKind::Slice,
            WideU | WideD | WideL | WideR | WideF | WideB => FamilyKind::Wide,
            X | Y | Z => FamilyKind::Rotation,
        }
    }
}

//! Faces of the cube and their position in the net.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::{Axis, Pos, Vector};

/// Face of the cube.
#[derive(
    Serialize, Deserialize, Debug, Display, EnumIter, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub enum Face {
    /// Up face, `+x`.
    U,
    /// Down face, `-x`.
    D,
    /// Left face, `+z`.
    L,
    /// Right face, `-z`.
    R,
    /// Front face, `-y`.
    F,
    /// Back face, `+y`.
    B,
}

impl Face {
    /// Returns the outward normal of the face.
    pub const fn vector(self) -> Vector {
        match self {
            Face::U => Vector::unit(Axis::X, true),
            Face::D => Vector::unit(Axis::X, false),
            Face::L => Vector::unit(Axis::Z, true),
            Face::R => Vector::unit(Axis::Z, false),
            Face::F => Vector::unit(Axis::Y, false),
            Face::B => Vector::unit(Axis::Y, true),
        }
    }

    /// Returns the face whose outward normal is `vector`, if there is one.
    pub fn from_vector(vector: Vector) -> Option<Self> {
        Self::iter().find(|face| face.vector() == vector)
    }

    /// Returns the grid position of the facelet at `row` and `col` (each
    /// 0..3) when the face is drawn in the net.
    ///
    /// The side faces are drawn upright in the order L F R B, with U above F
    /// and D below F, so that neighboring facelets in the net are neighbors on
    /// the cube.
    pub fn facelet_position(self, row: usize, col: usize) -> Pos {
        debug_assert!(row < 3 && col < 3, "facelet out of range");
        match self {
            Face::U => Pos([0, row, col]),
            Face::D => Pos([2, 2 - row, col]),
            Face::L => Pos([row, col, 0]),
            Face::R => Pos([row, 2 - col, 2]),
            Face::F => Pos([row, 2, col]),
            Face::B => Pos([row, 0, 2 - col]),
        }
    }
}

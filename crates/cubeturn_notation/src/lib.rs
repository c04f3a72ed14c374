//! Move notation for the 3x3x3 Rubik's Cube.
//!
//! A move string such as `"R U R' U'"` is first split into tokens by
//! [`tokenize()`], and each token is then parsed into a [`Move`]: a [`Family`]
//! letter followed by an optional [`Turn`] suffix.

mod common;
mod errors;
pub mod family;
mod moves;
mod tokenize;

pub use common::*;
pub use errors::ParseMoveError;
pub use family::{Family, FamilyKind};
pub use moves::{Algorithm, Move, invert_moves};
pub use tokenize::tokenize;

#[cfg(test)]
mod tests;

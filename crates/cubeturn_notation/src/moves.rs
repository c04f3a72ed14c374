//! Single moves and sequences of moves.

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use itertools::Itertools;
use strum::IntoEnumIterator;

use crate::common::write_separated_list;
use crate::{Family, ParseMoveError, Turn, tokenize};

/// Single move, such as `R`, `M2`, or `y'`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Move {
    /// Which layers turn.
    pub family: Family,
    /// How far and in which direction they turn.
    pub turn: Turn,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.family, self.turn)
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let first = chars.next().ok_or(ParseMoveError::Empty)?;
        let family =
            Family::from_char(first).ok_or_else(|| ParseMoveError::UnknownFamily(s.to_owned()))?;
        let turn = chars
            .as_str()
            .parse()
            .map_err(|()| ParseMoveError::BadSuffix(s.to_owned()))?;
        Ok(Self { family, turn })
    }
}

impl Move {
    /// Constructs a move.
    pub const fn new(family: Family, turn: Turn) -> Self {
        Self { family, turn }
    }

    /// Returns every move that can be written, grouped by family.
    pub fn all() -> impl Iterator<Item = Self> {
        Family::iter()
            .cartesian_product(Turn::iter().collect_vec())
            .map(|(family, turn)| Self { family, turn })
    }

    /// Returns the move that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        Self {
            family: self.family,
            turn: self.turn.inverse(),
        }
    }
}

/// Sequence of moves, applied left to right.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Algorithm(pub Vec<Move>);

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_separated_list(f, &self.0, " ")
    }
}

impl Deref for Algorithm {
    type Target = Vec<Move>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Algorithm {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl FromIterator<Move> for Algorithm {
    fn from_iter<T: IntoIterator<Item = Move>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromStr for Algorithm {
    type Err = ParseMoveError;

    /// Parses every token before returning, so a bad token anywhere rejects the
    /// whole string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        tokenize(s).iter().map(|token| token.parse()).collect()
    }
}

impl Algorithm {
    /// Constructs a new empty algorithm.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Returns the algorithm that undoes this one: every move inverted, in
    /// reverse order.
    #[must_use]
    pub fn inv(&self) -> Self {
        invert_moves(&self.0).into()
    }
}

impl From<Vec<Move>> for Algorithm {
    fn from(value: Vec<Move>) -> Self {
        Self(value)
    }
}

/// Returns the moves that undo `moves`: every move inverted, in reverse order.
pub fn invert_moves(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().map(|m| m.inverse()).collect()
}

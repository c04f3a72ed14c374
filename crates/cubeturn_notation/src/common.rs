//! Structures shared by every move family.

use std::fmt;
use std::str::FromStr;

use strum::EnumIter;

/// Amount and direction of a move, written as a suffix after the family.
///
/// The default turn is [`Turn::Normal`], which has no suffix.
#[derive(Debug, Default, EnumIter, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Turn {
    /// Clockwise quarter turn, looking at the named face.
    ///
    /// Example: `R`
    #[default]
    Normal,
    /// Half turn.
    ///
    /// Example: `R2`
    Double,
    /// Counterclockwise quarter turn.
    ///
    /// Example: `R'`
    Prime,
}

impl Turn {
    /// Returns the suffix written after the family.
    pub fn suffix(self) -> &'static str {
        match self {
            Turn::Normal => "",
            Turn::Double => "2",
            Turn::Prime => "'",
        }
    }

    /// Returns the number of quarter turns, which is always 1 or 2.
    pub fn quarter_turns(self) -> u8 {
        match self {
            Turn::Normal | Turn::Prime => 1,
            Turn::Double => 2,
        }
    }

    /// Returns the turn that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Turn::Normal => Turn::Prime,
            Turn::Double => Turn::Double,
            Turn::Prime => Turn::Normal,
        }
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.suffix())
    }
}

impl FromStr for Turn {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(Turn::Normal),
            "2" => Ok(Turn::Double),
            "'" => Ok(Turn::Prime),
            _ => Err(()),
        }
    }
}

/// Returns whether `c` may follow a family letter in the same token.
pub fn is_turn_suffix(c: char) -> bool {
    matches!(c, '2' | '\'')
}

pub(crate) fn write_separated_list<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    elements: &[T],
    separator: &str,
) -> fmt::Result {
    let mut is_first = true;
    for elem in elements {
        if is_first {
            is_first = false;
        } else {
            write!(f, "{separator}")?;
        }
        write!(f, "{elem}")?;
    }
    Ok(())
}

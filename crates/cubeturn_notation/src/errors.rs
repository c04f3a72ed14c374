use thiserror::Error;

/// Error produced when parsing a single move token.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParseMoveError {
    /// Empty token
    #[error("empty move")]
    Empty,
    /// The first character does not name a move family
    #[error("unknown move family in {0:?}")]
    UnknownFamily(String),
    /// The text after the family is not a turn suffix
    #[error("invalid turn suffix in {0:?}")]
    BadSuffix(String),
}

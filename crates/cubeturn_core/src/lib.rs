//! Model of the 3x3x3 Rubik's Cube and the engine that turns it.
//!
//! Each of the 26 visible pieces is a set of stickers, and each sticker is a
//! slot binding an outward-facing [`Vector`] to a [`Color`]. A move turns a
//! slice of the [`Grid`]: the pieces in the slice trade places, and every
//! vector on those pieces rotates with them so that the colors stay attached.
//!
//! ```
//! use cubeturn_core::Cube;
//!
//! let mut cube = Cube::new();
//! cube.execute("R U R' U'").unwrap();
//! assert!(!cube.is_solved());
//! ```

#[macro_use]
extern crate lazy_static;

mod color;
mod cube;
mod face;
pub mod grid;
mod piece;
pub mod render;
mod scramble;
pub mod table;
mod vector;

/// Re-export of `cubeturn_notation`.
pub use cubeturn_notation as notation;
pub use cubeturn_notation::{Algorithm, Move};

pub use color::{Color, ColorScheme, ColorSchemeError};
pub use cube::{Cube, FaceColors, Facelets, MoveError, parse_algorithm};
pub use face::Face;
pub use grid::{Grid, PieceCounts, PieceId, Pos, SliceSelector};
pub use piece::{MAX_STICKERS, Piece, PieceError, PieceKind};
pub use render::NetStyle;
pub use scramble::{DEFAULT_SCRAMBLE_LENGTH, Scrambler};
pub use table::{Layers, MoveDescriptor};
pub use vector::{Axis, AxisPair, Vector};

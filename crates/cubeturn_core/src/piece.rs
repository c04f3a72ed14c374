//! Pieces and the stickers bound to them.

use smallvec::SmallVec;
use strum::Display;
use thiserror::Error;

use crate::{AxisPair, Color, Vector};

/// Maximum number of stickers on a piece.
pub const MAX_STICKERS: usize = 3;

/// Error produced when constructing a malformed [`Piece`].
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PieceError {
    /// Different number of vectors and colors
    #[error("piece has {vectors} vectors but {colors} colors")]
    LengthMismatch {
        /// Number of vectors.
        vectors: usize,
        /// Number of colors.
        colors: usize,
    },
    /// No stickers
    #[error("piece has no stickers")]
    Empty,
    /// More stickers than a cube piece can show
    #[error("piece has {0} stickers; the maximum is {MAX_STICKERS}")]
    TooManyStickers(usize),
    /// Vector that is not a face normal
    #[error("{0} is not a face normal")]
    NotFaceNormal(Vector),
    /// Same vector on two stickers
    #[error("piece has two stickers facing {0}")]
    DuplicateVector(Vector),
}

/// Kind of piece, determined by its number of stickers.
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum PieceKind {
    /// One sticker.
    Center,
    /// Two stickers.
    Edge,
    /// Three stickers.
    Corner,
}

/// One of the 26 visible pieces of the cube.
///
/// Each sticker is a slot holding an outward vector and a color. Rotating the
/// piece changes the vectors; the color in each slot never changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    vectors: SmallVec<[Vector; MAX_STICKERS]>,
    colors: SmallVec<[Color; MAX_STICKERS]>,
}

impl Piece {
    /// Constructs a piece where `colors[i]` is bound to `vectors[i]`.
    pub fn new(vectors: &[Vector], colors: &[Color]) -> Result<Self, PieceError> {
        if vectors.len() != colors.len() {
            return Err(PieceError::LengthMismatch {
                vectors: vectors.len(),
                colors: colors.len(),
            });
        }
        if vectors.is_empty() {
            return Err(PieceError::Empty);
        }
        if vectors.len() > MAX_STICKERS {
            return Err(PieceError::TooManyStickers(vectors.len()));
        }
        for (i, &v) in vectors.iter().enumerate() {
            if !v.is_face_normal() {
                return Err(PieceError::NotFaceNormal(v));
            }
            if vectors[..i].contains(&v) {
                return Err(PieceError::DuplicateVector(v));
            }
        }

        Ok(Self {
            vectors: SmallVec::from_slice(vectors),
            colors: SmallVec::from_slice(colors),
        })
    }

    /// Returns the kind of piece.
    pub fn kind(&self) -> PieceKind {
        match self.vectors.len() {
            1 => PieceKind::Center,
            2 => PieceKind::Edge,
            _ => PieceKind::Corner,
        }
    }

    /// Returns the current vector of each sticker slot.
    pub fn vectors(&self) -> &[Vector] {
        &self.vectors
    }
    /// Returns the color of each sticker slot.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
    /// Returns an iterator over the stickers as `(vector, color)` pairs.
    pub fn stickers(&self) -> impl Iterator<Item = (Vector, Color)> + '_ {
        std::iter::zip(self.vectors.iter().copied(), self.colors.iter().copied())
    }

    /// Rotates every vector by a quarter turn in the plane `axes`.
    pub fn rotate(&mut self, axes: AxisPair) {
        for v in &mut self.vectors {
            *v = v.rotated(axes);
        }
    }

    /// Returns the color of the sticker currently facing `vector`, or `None` if
    /// the piece has no sticker facing that way.
    pub fn face(&self, vector: Vector) -> Option<Color> {
        let i = self.vectors.iter().position(|&v| v == vector)?;
        Some(self.colors[i])
    }
}

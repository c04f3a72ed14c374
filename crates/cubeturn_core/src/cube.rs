//! Cube state and the rotation engine.

use std::collections::BTreeMap;
use std::fmt;

use cubeturn_notation::{Algorithm, Move, ParseMoveError, tokenize};
use strum::IntoEnumIterator;
use thiserror::Error;

use crate::{
    Color, ColorScheme, ColorSchemeError, Face, Grid, NetStyle, PieceCounts, table,
};

/// Error produced when applying a move.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum MoveError {
    /// Move name with no entry in the rotation table
    #[error("unrecognized move {token:?}")]
    UnrecognizedMove {
        /// Move name as written.
        token: String,
        /// Why the name was not recognized, if it failed to parse.
        #[source]
        reason: Option<ParseMoveError>,
    },
}

impl MoveError {
    /// Returns the move name that was not recognized.
    pub fn token(&self) -> &str {
        match self {
            MoveError::UnrecognizedMove { token, .. } => token,
        }
    }
}

/// Colors of the nine facelets of a face, in net order (row-major).
pub type FaceColors = [[Option<Color>; 3]; 3];

/// Rows of color symbols for every face, as they appear in the net.
pub type Facelets = BTreeMap<Face, [String; 3]>;

/// Tokenizes `algorithm` and parses every token.
///
/// Unlike [`Cube::execute()`], this fails before any move is applied.
pub fn parse_algorithm(algorithm: &str) -> Result<Algorithm, MoveError> {
    tokenize(algorithm)
        .into_iter()
        .map(|token| match token.parse() {
            Ok(m) => Ok(m),
            Err(e) => Err(MoveError::UnrecognizedMove {
                token,
                reason: Some(e),
            }),
        })
        .collect()
}

/// 3x3x3 Rubik's Cube.
///
/// Two cubes compare equal when every face shows the same colors in the same
/// places.
#[derive(Debug, Clone)]
pub struct Cube {
    grid: Grid,
    color_scheme: ColorScheme,
}

impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}

impl Cube {
    /// Constructs a solved cube with the default color scheme.
    pub fn new() -> Self {
        Self::with_color_scheme(ColorScheme::default())
            .expect("default color scheme is valid")
    }

    /// Constructs a solved cube with a custom color scheme.
    pub fn with_color_scheme(color_scheme: ColorScheme) -> Result<Self, ColorSchemeError> {
        color_scheme.validate()?;
        let grid = Grid::new_solved(&color_scheme)
            .expect("solved cube pieces are built from face normals");
        Ok(Self { grid, color_scheme })
    }

    /// Returns the grid of pieces.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
    /// Returns the color scheme the cube was built with.
    pub fn color_scheme(&self) -> &ColorScheme {
        &self.color_scheme
    }

    /// Applies the move named `name`, such as `"R'"` or `"M2"`.
    pub fn rotate(&mut self, name: &str) -> Result<(), MoveError> {
        let m: Move = name.parse().map_err(|e| MoveError::UnrecognizedMove {
            token: name.to_owned(),
            reason: Some(e),
        })?;
        self.apply_move(m)
    }

    /// Applies a single move.
    pub fn apply_move(&mut self, m: Move) -> Result<(), MoveError> {
        let descriptor = table::lookup(m).ok_or_else(|| MoveError::UnrecognizedMove {
            token: m.to_string(),
            reason: None,
        })?;
        log::trace!("applying {m}: {descriptor:?}");
        self.grid.rotate_slice(
            &descriptor.selector(),
            descriptor.rotation,
            descriptor.quarter_turns,
        );
        Ok(())
    }

    /// Applies a sequence of moves, left to right.
    pub fn apply_moves(&mut self, moves: &[Move]) -> Result<(), MoveError> {
        moves.iter().try_for_each(|&m| self.apply_move(m))
    }

    /// Splits `algorithm` into tokens and applies each one, left to right.
    ///
    /// This is not transactional: if a token is not recognized, the moves
    /// before it stay applied and the error is returned immediately.
    pub fn execute(&mut self, algorithm: &str) -> Result<(), MoveError> {
        let tokens = tokenize(algorithm);
        log::debug!("executing {} moves: {algorithm:?}", tokens.len());
        for (i, token) in tokens.iter().enumerate() {
            if let Err(e) = self.rotate(token) {
                log::debug!("stopped after {i} of {} moves: {e}", tokens.len());
                return Err(e);
            }
        }
        Ok(())
    }

    /// Returns the colors shown on `face`, laid out as in the net.
    pub fn face_colors(&self, face: Face) -> FaceColors {
        let vector = face.vector();
        std::array::from_fn(|row| {
            std::array::from_fn(|col| self.grid.sticker(face.facelet_position(row, col), vector))
        })
    }

    /// Returns the color symbols of every face. A facelet with no sticker is
    /// `missing`.
    pub fn facelets(&self, missing: char) -> Facelets {
        Face::iter()
            .map(|face| {
                let rows = self.face_colors(face).map(|row| {
                    row.iter()
                        .map(|c| c.map_or(missing, Color::symbol))
                        .collect()
                });
                (face, rows)
            })
            .collect()
    }

    /// Returns whether each face shows a single color.
    pub fn is_solved(&self) -> bool {
        Face::iter().all(|face| {
            let colors = self.face_colors(face);
            let first = colors[0][0];
            first.is_some() && colors.iter().flatten().all(|&c| c == first)
        })
    }

    /// Returns the number of pieces of each kind.
    pub fn piece_counts(&self) -> PieceCounts {
        self.grid.piece_counts()
    }

    /// Renders the cube as an unfolded net.
    pub fn render(&self, style: &NetStyle) -> String {
        crate::render::render_net(self, style)
    }
}

impl PartialEq for Cube {
    fn eq(&self, other: &Self) -> bool {
        Face::iter().all(|face| self.face_colors(face) == other.face_colors(face))
    }
}

impl Eq for Cube {}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(&NetStyle::default()))
    }
}

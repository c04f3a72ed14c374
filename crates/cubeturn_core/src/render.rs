//! Text rendering of the cube as an unfolded net.
//!
//! ```text
//!        U U U
//!        U U U
//!        U U U
//!
//! L L L  F F F  R R R  B B B
//! L L L  F F F  R R R  B B B
//! L L L  F F F  R R R  B B B
//!
//!        D D D
//!        D D D
//!        D D D
//! ```
//!
//! See [`Face::facelet_position()`] for how each face is oriented.

use itertools::Itertools;
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};

use crate::{Color, Cube, Face};

/// Style for rendering a net.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(default)]
pub struct NetStyle {
    /// Text between cells in the same row of a face.
    pub cell_separator: String,
    /// Text between faces in the strip of side faces.
    pub face_separator: String,
    /// Whether to put a blank line above and below the strip of side faces.
    pub blank_lines: bool,
    /// Symbol for a facelet with no sticker.
    pub missing: char,
    /// Whether to color each cell using ANSI escape codes.
    pub ansi_colors: bool,
}

impl Default for NetStyle {
    fn default() -> Self {
        Self {
            cell_separator: " ".to_string(),
            face_separator: "  ".to_string(),
            blank_lines: true,
            missing: '-',
            ansi_colors: false,
        }
    }
}

/// Side faces in the order they appear in the strip.
const STRIP: [Face; 4] = [Face::L, Face::F, Face::R, Face::B];

/// Renders `cube` as an unfolded net.
pub fn render_net(cube: &Cube, style: &NetStyle) -> String {
    let face_width = 3 + 2 * style.cell_separator.chars().count();
    let indent = " ".repeat(face_width + style.face_separator.chars().count());

    let mut lines = vec![];
    for row in face_rows(cube, Face::U, style) {
        lines.push(format!("{indent}{row}"));
    }
    if style.blank_lines {
        lines.push(String::new());
    }
    let strip = STRIP.map(|face| face_rows(cube, face, style));
    for i in 0..3 {
        lines.push(strip.iter().map(|rows| &rows[i]).join(&style.face_separator));
    }
    if style.blank_lines {
        lines.push(String::new());
    }
    for row in face_rows(cube, Face::D, style) {
        lines.push(format!("{indent}{row}"));
    }

    lines.join("\n")
}

fn face_rows(cube: &Cube, face: Face, style: &NetStyle) -> [String; 3] {
    cube.face_colors(face).map(|row| {
        row.iter()
            .map(|&color| cell_text(color, style))
            .join(&style.cell_separator)
    })
}

fn cell_text(color: Option<Color>, style: &NetStyle) -> String {
    match color {
        Some(color) if style.ansi_colors => {
            let [r, g, b] = color.rgb();
            color.symbol().truecolor(r, g, b).bold().to_string()
        }
        Some(color) => color.symbol().to_string(),
        None => style.missing.to_string(),
    }
}

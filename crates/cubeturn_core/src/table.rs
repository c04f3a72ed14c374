//! Rotation table mapping each move to the geometry of its turn.

use std::collections::HashMap;
use std::ops::Range;

use cubeturn_notation::{Family, Move, Turn};
use strum::IntoEnumIterator;

use crate::{Axis, AxisPair, SliceSelector};

/// Layers turned by a move, along its slice axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Layers {
    /// Layers `start..end`.
    Range {
        /// First layer.
        start: usize,
        /// One past the last layer.
        end: usize,
    },
    /// All three layers.
    WholeCube,
}

impl Layers {
    /// Returns the grid indices of the layers.
    pub fn range(self) -> Range<usize> {
        match self {
            Layers::Range { start, end } => start..end,
            Layers::WholeCube => 0..crate::grid::SIZE,
        }
    }
}

/// Geometry of a move: which cells turn, in which plane, and how far.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MoveDescriptor {
    /// Axis along which the turning layers are selected. This is always the
    /// normal of `rotation`.
    pub slice_axis: Axis,
    /// Layers that turn.
    pub layers: Layers,
    /// Plane of each quarter turn.
    pub rotation: AxisPair,
    /// Number of quarter turns, which is 1 or 2.
    pub quarter_turns: u8,
}

impl MoveDescriptor {
    /// Returns the cells that turn.
    pub fn selector(&self) -> SliceSelector {
        match self.layers {
            Layers::WholeCube => SliceSelector::whole(),
            layers => SliceSelector::layers(self.slice_axis, layers.range()),
        }
    }
}

/// Geometry shared by every turn of a family, for the unprimed direction.
struct FamilyRow {
    slice_axis: Axis,
    layers: Layers,
    rotation: AxisPair,
}

const fn row(slice_axis: Axis, layers: Option<(usize, usize)>, from: Axis, to: Axis) -> FamilyRow {
    FamilyRow {
        slice_axis,
        layers: match layers {
            Some((start, end)) => Layers::Range { start, end },
            None => Layers::WholeCube,
        },
        rotation: AxisPair::new(from, to),
    }
}

fn family_row(family: Family) -> FamilyRow {
    use Axis::{X, Y, Z};

    match family {
        // Turns around the L-R axis
        Family::X => row(Z, None, X, Y),
        Family::R => row(Z, Some((2, 3)), X, Y),
        Family::M => row(Z, Some((1, 2)), Y, X),
        Family::L => row(Z, Some((0, 1)), Y, X),
        Family::WideR => row(Z, Some((1, 3)), X, Y),
        Family::WideL => row(Z, Some((0, 2)), Y, X),

        // Turns around the U-D axis
        Family::Y => row(X, None, Z, Y),
        Family::D => row(X, Some((2, 3)), Y, Z),
        Family::E => row(X, Some((1, 2)), Y, Z),
        Family::U => row(X, Some((0, 1)), Z, Y),
        Family::WideD => row(X, Some((1, 3)), Y, Z),
        Family::WideU => row(X, Some((0, 2)), Z, Y),

        // Turns around the F-B axis
        Family::Z => row(Y, None, Z, X),
        Family::F => row(Y, Some((2, 3)), Z, X),
        Family::S => row(Y, Some((1, 2)), Z, X),
        Family::B => row(Y, Some((0, 1)), X, Z),
        Family::WideF => row(Y, Some((1, 3)), Z, X),
        Family::WideB => row(Y, Some((0, 2)), X, Z),
    }
}

lazy_static! {
    /// Descriptor for every move, built once on first use.
    static ref MOVE_TABLE: HashMap<Move, MoveDescriptor> = build_move_table();
}

fn build_move_table() -> HashMap<Move, MoveDescriptor> {
    let mut table = HashMap::new();
    for family in Family::iter() {
        let FamilyRow {
            slice_axis,
            layers,
            rotation,
        } = family_row(family);
        for turn in Turn::iter() {
            let rotation = match turn {
                Turn::Normal | Turn::Double => rotation,
                Turn::Prime => rotation.reversed(),
            };
            let descriptor = MoveDescriptor {
                slice_axis,
                layers,
                rotation,
                quarter_turns: turn.quarter_turns(),
            };
            table.insert(Move::new(family, turn), descriptor);
        }
    }
    log::trace!("built move table with {} entries", table.len());
    table
}

/// Returns the descriptor for a move, or `None` if the table has no entry for
/// it.
pub fn lookup(m: Move) -> Option<&'static MoveDescriptor> {
    MOVE_TABLE.get(&m)
}

/// Returns every move in the table along with its descriptor, sorted by move.
pub fn entries() -> Vec<(Move, MoveDescriptor)> {
    let mut ret: Vec<_> = MOVE_TABLE.iter().map(|(&m, &d)| (m, d)).collect();
    ret.sort_by_key(|&(m, _)| m);
    ret
}

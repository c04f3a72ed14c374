//! Arena of pieces addressed by grid position.

use std::ops::{Index, IndexMut, Range};

use itertools::iproduct;
use smallvec::SmallVec;
use strum::IntoEnumIterator;

use crate::{Axis, AxisPair, Color, ColorScheme, Piece, PieceError, PieceKind, Vector};

/// Number of cells along each axis.
pub const SIZE: usize = 3;
const CELL_COUNT: usize = SIZE * SIZE * SIZE;

/// Position of a cell in the grid, one index in `0..3` per axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos(pub [usize; 3]);

impl Pos {
    /// Interior cell, which never holds a piece.
    pub const CENTER: Self = Self([1, 1, 1]);

    /// Returns an iterator over all 27 positions.
    pub fn iter_all() -> impl Iterator<Item = Self> {
        iproduct!(0..SIZE, 0..SIZE, 0..SIZE).map(|(x, y, z)| Self([x, y, z]))
    }

    /// Returns the outward normals of the outer layers containing the cell,
    /// in axis order. This is empty only for the interior cell.
    pub fn outward_vectors(self) -> SmallVec<[Vector; 3]> {
        Axis::iter()
            .filter_map(|axis| Vector::outward_at(axis, self[axis]))
            .collect()
    }

    fn cell_index(self) -> usize {
        let [x, y, z] = self.0;
        (x * SIZE + y) * SIZE + z
    }
}

impl Index<Axis> for Pos {
    type Output = usize;

    fn index(&self, axis: Axis) -> &Self::Output {
        &self.0[axis.index()]
    }
}

impl IndexMut<Axis> for Pos {
    fn index_mut(&mut self, axis: Axis) -> &mut Self::Output {
        &mut self.0[axis.index()]
    }
}

/// Index of a piece in the [`Grid`] arena.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(u8);

impl PieceId {
    /// Returns the index into the arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Axis-aligned box of grid cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SliceSelector {
    ranges: [Range<usize>; 3],
}

impl SliceSelector {
    /// Returns a selector covering every cell, including the interior cell.
    pub fn whole() -> Self {
        Self {
            ranges: [0..SIZE, 0..SIZE, 0..SIZE],
        }
    }

    /// Returns a selector restricted to `layers` along `axis` and unrestricted
    /// along the other two axes.
    ///
    /// `layers` must be nonempty and within `0..3`.
    pub fn layers(axis: Axis, layers: Range<usize>) -> Self {
        debug_assert!(
            layers.start < layers.end && layers.end <= SIZE,
            "layer range {layers:?} out of bounds",
        );
        let mut ret = Self::whole();
        ret.ranges[axis.index()] = layers.start.min(SIZE)..layers.end.min(SIZE);
        ret
    }

    /// Returns whether the selector is unrestricted along `axis`.
    pub fn is_full(&self, axis: Axis) -> bool {
        self.ranges[axis.index()] == (0..SIZE)
    }

    /// Returns whether `pos` is inside the selector.
    pub fn contains(&self, pos: Pos) -> bool {
        Axis::iter().all(|axis| self.ranges[axis.index()].contains(&pos[axis]))
    }

    /// Returns an iterator over the positions inside the selector.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + use<> {
        let [x, y, z] = self.ranges.clone();
        iproduct!(x, y, z).map(|(x, y, z)| Pos([x, y, z]))
    }
}

/// Number of pieces of each kind.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub struct PieceCounts {
    pub corners: usize,
    pub edges: usize,
    pub centers: usize,
}

/// 3x3x3 grid of cells, each holding at most one piece.
///
/// The grid owns every [`Piece`]; cells refer to pieces by [`PieceId`]. Pieces
/// are never added or removed after construction, only moved between cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    pieces: Vec<Piece>,
    cells: [Option<PieceId>; CELL_COUNT],
}

impl Grid {
    /// Constructs a solved grid colored according to `scheme`.
    ///
    /// Each outer-layer cell gets one sticker per outer layer it is in: 3 for a
    /// corner, 2 for an edge, and 1 for a center.
    pub fn new_solved(scheme: &ColorScheme) -> Result<Self, PieceError> {
        let mut pieces = vec![];
        let mut cells = [None; CELL_COUNT];

        for pos in Pos::iter_all() {
            let vectors = pos.outward_vectors();
            if vectors.is_empty() {
                continue;
            }
            let colors: SmallVec<[Color; 3]> = vectors
                .iter()
                .filter_map(|&v| scheme.color_of_vector(v))
                .collect();
            let id = PieceId(pieces.len() as u8);
            pieces.push(Piece::new(&vectors, &colors)?);
            cells[pos.cell_index()] = Some(id);
        }

        Ok(Self { pieces, cells })
    }

    /// Returns the piece with ID `id`.
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.index()]
    }
    /// Returns the ID of the piece at `pos`, or `None` if the cell is empty.
    pub fn id_at(&self, pos: Pos) -> Option<PieceId> {
        self.cells[pos.cell_index()]
    }
    /// Returns the piece at `pos`, or `None` if the cell is empty.
    pub fn get(&self, pos: Pos) -> Option<&Piece> {
        Some(self.piece(self.id_at(pos)?))
    }
    /// Returns an iterator over every piece and its position.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, &Piece)> {
        Pos::iter_all().filter_map(|pos| Some((pos, self.get(pos)?)))
    }

    /// Returns the color of the sticker facing `vector` on the piece at `pos`,
    /// or `None` if there is no such sticker.
    pub fn sticker(&self, pos: Pos, vector: Vector) -> Option<Color> {
        self.get(pos)?.face(vector)
    }

    /// Returns the number of pieces of each kind.
    pub fn piece_counts(&self) -> PieceCounts {
        let mut ret = PieceCounts::default();
        for (_pos, piece) in self.iter() {
            match piece.kind() {
                PieceKind::Corner => ret.corners += 1,
                PieceKind::Edge => ret.edges += 1,
                PieceKind::Center => ret.centers += 1,
            }
        }
        ret
    }

    /// Turns the cells inside `selector` by `quarter_turns` quarter turns in
    /// the plane `axes`, then rotates the vectors of every piece inside by the
    /// same amount.
    ///
    /// Writing `(a, b)` for the pair, each quarter turn moves the piece at
    /// `(j, 2 - i)` to `(i, j)` in every layer along the third axis.
    ///
    /// # Panics
    ///
    /// Panics if `selector` is restricted along `a` or `b`, since the turn would
    /// then move pieces in from outside the slice.
    pub fn rotate_slice(&mut self, selector: &SliceSelector, axes: AxisPair, quarter_turns: u8) {
        let (a, b) = (axes.from(), axes.to());
        assert!(
            selector.is_full(a) && selector.is_full(b),
            "slice must span the plane of rotation",
        );

        for _ in 0..quarter_turns {
            let old_cells = self.cells;
            for pos in selector.positions() {
                let mut src = pos;
                src[a] = pos[b];
                src[b] = SIZE - 1 - pos[a];
                self.cells[pos.cell_index()] = old_cells[src.cell_index()];
            }
        }

        for pos in selector.positions() {
            if let Some(id) = self.cells[pos.cell_index()] {
                let piece = &mut self.pieces[id.index()];
                for _ in 0..quarter_turns {
                    piece.rotate(axes);
                }
            }
        }
    }
}

//! Axes and face-normal vectors.

use std::fmt;
use std::ops::{Index, Neg};

use strum::{Display, EnumIter};

/// Axis of the cube's coordinate system.
///
/// Along every axis, grid index 0 is the positive side and grid index 2 is
/// the negative side. `X` is vertical (up is positive), `Y` runs from front to
/// back (back is positive), and `Z` runs from right to left (left is
/// positive).
#[derive(Debug, Display, EnumIter, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[strum(serialize_all = "lowercase")]
pub enum Axis {
    /// Vertical axis; `+x` is the up face.
    X = 0,
    /// Front-back axis; `+y` is the back face.
    Y = 1,
    /// Left-right axis; `+z` is the left face.
    Z = 2,
}

impl Axis {
    /// Returns the index of the axis, which is 0, 1, or 2.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the axis with index `i`, if there is one.
    pub const fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Axis::X),
            1 => Some(Axis::Y),
            2 => Some(Axis::Z),
            _ => None,
        }
    }
}

/// Ordered pair of distinct axes spanning the plane of a quarter turn.
///
/// A quarter turn in the plane `(from, to)` carries `from` onto `to`. Swapping
/// the order turns the other way.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct AxisPair {
    from: Axis,
    to: Axis,
}

impl AxisPair {
    /// Constructs an axis pair.
    ///
    /// # Panics
    ///
    /// Panics if `from` and `to` are the same axis.
    pub const fn new(from: Axis, to: Axis) -> Self {
        assert!(from as u8 != to as u8, "axis pair needs two distinct axes");
        Self { from, to }
    }

    /// Returns the axis carried onto [`AxisPair::to()`].
    pub const fn from(self) -> Axis {
        self.from
    }
    /// Returns the axis that [`AxisPair::from()`] is carried onto.
    pub const fn to(self) -> Axis {
        self.to
    }

    /// Returns the pair in the opposite order, which turns the other way.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }

    /// Returns the axis perpendicular to both axes, which is the axis that a
    /// turn in this plane rotates around.
    pub const fn normal(self) -> Axis {
        match Axis::from_index(3 - self.from.index() - self.to.index()) {
            Some(axis) => axis,
            None => unreachable!(),
        }
    }
}

impl fmt::Display for AxisPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}→{}", self.from, self.to)
    }
}

/// Integer 3D vector with components in {-1, 0, 1}.
///
/// Every vector held by a piece is a face normal: exactly one nonzero
/// component.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Vector(pub [i8; 3]);

impl Vector {
    /// Zero vector.
    pub const ZERO: Self = Self([0; 3]);

    /// Returns the unit vector along `axis`, pointing in the positive direction
    /// if `positive` is true.
    pub const fn unit(axis: Axis, positive: bool) -> Self {
        let mut ret = [0; 3];
        ret[axis.index()] = if positive { 1 } else { -1 };
        Self(ret)
    }

    /// Returns the outward normal of the outer layer at `index` along `axis`,
    /// or `None` for the middle layer.
    pub const fn outward_at(axis: Axis, index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::unit(axis, true)),
            2 => Some(Self::unit(axis, false)),
            _ => None,
        }
    }

    /// Returns whether the vector has exactly one nonzero component.
    pub fn is_face_normal(self) -> bool {
        self.0.iter().filter(|&&x| x != 0).count() == 1
    }

    /// Returns the axis of the first nonzero component, or `None` for the zero
    /// vector.
    pub fn axis(self) -> Option<Axis> {
        Axis::from_index(self.0.iter().position(|&x| x != 0)?)
    }

    /// Returns the vector rotated by a quarter turn in the plane `axes`.
    ///
    /// Writing `(a, b)` for the pair, `(v[a], v[b])` becomes `(-v[b], v[a])`.
    /// The remaining component is unchanged.
    #[must_use]
    pub fn rotated(self, axes: AxisPair) -> Self {
        let (a, b) = (axes.from().index(), axes.to().index());
        let mut ret = self.0;
        ret[a] = -self.0[b];
        ret[b] = self.0[a];
        Self(ret)
    }
}

impl Index<Axis> for Vector {
    type Output = i8;

    fn index(&self, axis: Axis) -> &Self::Output {
        &self.0[axis.index()]
    }
}

impl Neg for Vector {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(self.0.map(|x| -x))
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.axis() {
            Some(axis) if self.is_face_normal() => {
                let sign = if self[axis] > 0 { '+' } else { '-' };
                write!(f, "{sign}{axis}")
            }
            _ => write!(f, "{:?}", self.0),
        }
    }
}

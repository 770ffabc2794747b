//! Geometry primitives: [`PointId`], [`Point`] and [`Bounds`].
//!
//! Points are plain values. Two points may share the same coordinates and
//! still be distinct dots, so equality and hashing go through the id only.

use std::fmt;
use std::hash::{Hash, Hasher};

// ---------------------------------------------------------------------------
// PointId
// ---------------------------------------------------------------------------

/// Stable identifier of a dot within a point set.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PointId(pub u32);

impl PointId {
    /// Raw numeric value of the id.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for PointId {
    #[inline]
    fn from(v: u32) -> Self {
        Self(v)
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// An identified 2D point. X grows right, Y grows down (screen coordinates).
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub id: PointId,
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(id: u32, x: f64, y: f64) -> Self {
        Self {
            id: PointId(id),
            x,
            y,
        }
    }

    /// Coordinates as an `(x, y)` pair.
    #[inline]
    pub const fn xy(self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Whether both coordinates are finite (neither NaN nor infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Whether `self` and `other` occupy the same position, regardless of id.
    #[inline]
    pub fn coincides(self, other: Point) -> bool {
        self.x == other.x && self.y == other.y
    }
}

// --- identity-based trait impls for Point ---

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {})", self.id, self.x, self.y)
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// A closed axis-aligned rectangle \[min, max\] in dot coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Create bounds from two corners, canonicalized so that min ≤ max on
    /// each axis.
    #[inline]
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            min_x: x0.min(x1),
            min_y: y0.min(y1),
            max_x: x0.max(x1),
            max_y: y0.max(y1),
        }
    }

    /// Width of the rectangle.
    #[inline]
    pub fn width(self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the rectangle.
    #[inline]
    pub fn height(self) -> f64 {
        self.max_y - self.min_y
    }

    /// Whether `p` lies inside or on the border.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    /// Smallest bounds enclosing every point, or `None` for an empty slice.
    pub fn enclosing(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut b = Self::new(first.x, first.y, first.x, first.y);
        for p in rest {
            b.min_x = b.min_x.min(p.x);
            b.min_y = b.min_y.min(p.y);
            b.max_x = b.max_x.max(p.x);
            b.max_y = b.max_y.max(p.y);
        }
        Some(b)
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[({}, {})-({}, {})]",
            self.min_x, self.min_y, self.max_x, self.max_y
        )
    }
}

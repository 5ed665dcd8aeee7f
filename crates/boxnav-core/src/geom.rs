//! Geometry primitives: [`Point`] and [`Cell`].
//!
//! Coordinates are real numbers. A [`Cell`] is a closed axis-aligned
//! rectangle; its bounds are always given X axis first, then Y axis.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D point with real coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line (L2) distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Rectilinear (L1) distance to `other`.
    #[inline]
    pub fn manhattan(self, other: Point) -> f64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Whether both coordinates are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A closed axis-aligned rectangle: one traversable region of a mesh.
///
/// Unlike a half-open range, a cell includes all four of its edges, so a
/// point on a shared edge belongs to every cell along that edge.
///
/// Identity is structural: two cells with identical bounds are equal and
/// hash the same, which lets a cell act as a map key.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Cell {
    /// Create a cell from its X bounds followed by its Y bounds.
    ///
    /// Bounds are stored as given. Use [`is_well_formed`](Self::is_well_formed)
    /// to check them; a mesh rejects malformed cells on construction.
    #[inline]
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Whether all bounds are finite and `min <= max` on both axes.
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.bounds().iter().all(|b| b.is_finite())
            && self.x_min <= self.x_max
            && self.y_min <= self.y_max
    }

    /// The four bounds in `(x_min, x_max, y_min, y_max)` order.
    #[inline]
    pub fn bounds(&self) -> [f64; 4] {
        [self.x_min, self.x_max, self.y_min, self.y_max]
    }

    /// Extent along the X axis.
    #[inline]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Extent along the Y axis.
    #[inline]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Center of the rectangle.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(
            (self.x_min + self.x_max) * 0.5,
            (self.y_min + self.y_max) * 0.5,
        )
    }

    /// Whether `p` lies inside the cell, edges included.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x_min && p.x <= self.x_max && p.y >= self.y_min && p.y <= self.y_max
    }

    /// The overlap region of two cells.
    ///
    /// Cells that only share an edge (or a corner) yield a degenerate cell
    /// of zero width and/or height. Returns `None` when the cells are
    /// disjoint.
    #[inline]
    pub fn overlap(&self, other: &Cell) -> Option<Cell> {
        let r = Cell {
            x_min: self.x_min.max(other.x_min),
            x_max: self.x_max.min(other.x_max),
            y_min: self.y_min.max(other.y_min),
            y_max: self.y_max.min(other.y_max),
        };
        (r.x_min <= r.x_max && r.y_min <= r.y_max).then_some(r)
    }

    /// Whether the two cells share at least one point.
    #[inline]
    pub fn touches(&self, other: &Cell) -> bool {
        self.overlap(other).is_some()
    }

    /// Clip `p` into the cell, clamping each axis independently.
    ///
    /// A point already inside is returned unchanged. The cell must be
    /// well formed.
    #[inline]
    pub fn clamp(&self, p: Point) -> Point {
        Point::new(
            p.x.max(self.x_min).min(self.x_max),
            p.y.max(self.y_min).min(self.y_max),
        )
    }

    /// Bit patterns of the bounds with `-0.0` folded into `0.0`, so that
    /// equality and hashing agree.
    #[inline]
    fn key(&self) -> [u64; 4] {
        self.bounds().map(|b| if b == 0.0 { 0u64 } else { b.to_bits() })
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl From<(f64, f64, f64, f64)> for Cell {
    #[inline]
    fn from((x_min, x_max, y_min, y_max): (f64, f64, f64, f64)) -> Self {
        Self::new(x_min, x_max, y_min, y_max)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}]x[{}, {}]",
            self.x_min, self.x_max, self.y_min, self.y_max
        )
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn cell_round_trip() {
        let c = Cell::new(0.5, 1.5, -2.0, 4.0);
        let json = serde_json::to_string(&c).unwrap();
        let back: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}

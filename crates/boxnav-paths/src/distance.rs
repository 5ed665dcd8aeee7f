use boxnav_core::Point;

use crate::traits::{CostModel, Heuristic};

/// Euclidean (L2) distance between two points.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    a.distance(b)
}

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> f64 {
    a.manhattan(b)
}

/// Straight-line travel. Edge cost and heuristic are both the Euclidean
/// distance, which never overestimates the length of a route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euclidean;

impl CostModel for Euclidean {
    #[inline]
    fn cost(&self, from: Point, to: Point) -> f64 {
        euclidean(from, to)
    }
}

impl Heuristic for Euclidean {
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> f64 {
        euclidean(from, to)
    }
}

/// Rectilinear travel: moves are measured along the axes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Manhattan;

impl CostModel for Manhattan {
    #[inline]
    fn cost(&self, from: Point, to: Point) -> f64 {
        manhattan(from, to)
    }
}

impl Heuristic for Manhattan {
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> f64 {
        manhattan(from, to)
    }
}

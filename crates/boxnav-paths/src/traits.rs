use boxnav_core::Point;

/// Cost of travelling between two waypoints.
pub trait CostModel {
    /// Cost of moving in a straight line from `from` to `to`. Must be >= 0.
    fn cost(&self, from: Point, to: Point) -> f64;
}

/// Cost model with an admissible heuristic, required for A*.
pub trait Heuristic: CostModel {
    /// Estimate of the remaining cost from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Point, to: Point) -> f64;
}

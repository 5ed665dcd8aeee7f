use boxnav_core::{Cell, Mesh, Point};

use crate::config::{SearchConfig, Strategy};
use crate::distance::{Euclidean, euclidean};
use crate::error::SearchError;
use crate::refine::refine;
use crate::traits::Heuristic;

/// A settled cell and the accumulated cost at which it was settled.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    /// Index of the cell in the mesh.
    pub index: usize,
    pub cell: Cell,
    pub cost: f64,
}

/// Sentinel cost of a cell no search has reached.
pub const UNREACHABLE: f64 = f64::INFINITY;

/// Sentinel predecessor of a search origin.
pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Internal per-direction search state
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: f64,
    pub(crate) parent: usize,
    /// Where the best known chain enters this cell.
    pub(crate) waypoint: Point,
    pub(crate) open: bool,
    pub(crate) settled: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            parent: NO_PARENT,
            waypoint: Point::ZERO,
            open: false,
            settled: false,
        }
    }
}

/// Cost map, backpointer map and waypoint map of one search direction,
/// plus its settlement record.
pub(crate) struct SearchState {
    pub(crate) nodes: Vec<Node>,
    pub(crate) explored: Vec<PathNode>,
}

impl SearchState {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            nodes: vec![Node::default(); len],
            explored: Vec::new(),
        }
    }

    /// Make `idx` a search origin whose waypoint is the literal endpoint.
    pub(crate) fn seed(&mut self, idx: usize, waypoint: Point) {
        let n = &mut self.nodes[idx];
        n.g = 0.0;
        n.parent = NO_PARENT;
        n.waypoint = waypoint;
        n.open = true;
    }

    /// Record a cheaper chain reaching `idx` through `parent`.
    ///
    /// Returns `false` and leaves the node untouched unless `g` is strictly
    /// better than the known cost. Settled cells are reopened on
    /// improvement.
    pub(crate) fn relax(&mut self, idx: usize, parent: usize, waypoint: Point, g: f64) -> bool {
        let n = &mut self.nodes[idx];
        if g >= n.g {
            return false;
        }
        n.g = g;
        n.parent = parent;
        n.waypoint = waypoint;
        n.open = true;
        true
    }

    /// Close `idx`. The first settlement of each cell is recorded.
    pub(crate) fn settle(&mut self, mesh: &Mesh, idx: usize) {
        let n = &mut self.nodes[idx];
        n.open = false;
        if !n.settled {
            n.settled = true;
            self.explored.push(PathNode {
                index: idx,
                cell: mesh.cell(idx),
                cost: n.g,
            });
        }
    }

    /// Walk backpointers from `idx` to the origin: `[idx, parent, ..]`.
    pub(crate) fn chain(&self, idx: usize) -> Vec<usize> {
        let mut chain = Vec::new();
        let mut ci = idx;
        // Bounded in case the parent links ever form a cycle.
        while ci != NO_PARENT && chain.len() <= self.nodes.len() {
            chain.push(ci);
            ci = self.nodes[ci].parent;
        }
        chain
    }
}

/// Search direction of a frontier entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Forward,
    Backward,
}

/// Frontier entry, ordered by `f` then by insertion sequence for use in
/// `BinaryHeap`.
#[derive(Clone, Copy)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) g: f64,
    pub(crate) f: f64,
    pub(crate) seq: u64,
    pub(crate) dir: Direction,
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for NodeRef {}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first, and the
        // earliest pushed entry among equal f.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Located endpoints of one query.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Query {
    pub(crate) source: Point,
    pub(crate) destination: Point,
    pub(crate) start: usize,
    pub(crate) goal: usize,
}

/// How a cell-level search ended.
pub(crate) enum Outcome {
    /// Cells from start to goal, inclusive.
    Found {
        corridor: Vec<usize>,
        explored: Vec<PathNode>,
    },
    Exhausted {
        explored: Vec<PathNode>,
    },
    OverBudget {
        limit: usize,
        explored: Vec<PathNode>,
    },
}

// ---------------------------------------------------------------------------
// Route
// ---------------------------------------------------------------------------

/// A successful search result.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Polyline from the source point to the destination point.
    pub path: Vec<Point>,
    /// Indices of the cells the path passes through, start cell first.
    pub corridor: Vec<usize>,
    /// Cells settled by the search, in settlement order.
    pub explored: Vec<PathNode>,
}

impl Route {
    /// Euclidean length of the polyline.
    pub fn length(&self) -> f64 {
        self.path.windows(2).map(|w| euclidean(w[0], w[1])).sum()
    }

    /// The explored cells, in settlement order.
    pub fn explored_cells(&self) -> Vec<Cell> {
        self.explored.iter().map(|n| n.cell).collect()
    }
}

// ---------------------------------------------------------------------------
// Pathfinder
// ---------------------------------------------------------------------------

/// Point-to-point path search over a [`Mesh`].
///
/// A `Pathfinder` borrows the mesh read-only and holds no per-query state:
/// every call builds its cost, backpointer and waypoint maps from scratch,
/// so one pathfinder (or many) can serve queries from several threads.
#[derive(Debug, Clone)]
pub struct Pathfinder<'m, C = Euclidean> {
    pub(crate) mesh: &'m Mesh,
    pub(crate) config: SearchConfig,
    pub(crate) model: C,
}

impl<'m> Pathfinder<'m> {
    /// Create a pathfinder with the default configuration (A*, Euclidean
    /// costs, no expansion limit).
    pub fn new(mesh: &'m Mesh) -> Self {
        Self {
            mesh,
            config: SearchConfig::default(),
            model: Euclidean,
        }
    }
}

impl<'m, C: Heuristic> Pathfinder<'m, C> {
    /// Replace the search configuration.
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the cost model.
    pub fn with_cost_model<D: Heuristic>(self, model: D) -> Pathfinder<'m, D> {
        Pathfinder {
            mesh: self.mesh,
            config: self.config,
            model,
        }
    }

    /// The mesh being searched.
    #[inline]
    pub fn mesh(&self) -> &'m Mesh {
        self.mesh
    }

    /// The active configuration.
    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search for a route from `source` to `destination`.
    ///
    /// Fails with [`SearchError::SourceOutsideMesh`] or
    /// [`SearchError::DestinationOutsideMesh`] before any search runs, and
    /// with [`SearchError::Disconnected`] or
    /// [`SearchError::BudgetExhausted`] carrying the cells explored so far.
    pub fn search(&self, source: Point, destination: Point) -> Result<Route, SearchError> {
        let Some(start) = self.mesh.locate(source) else {
            log::debug!("source {source} is outside the mesh");
            return Err(SearchError::SourceOutsideMesh(source));
        };
        let Some(goal) = self.mesh.locate(destination) else {
            log::debug!("destination {destination} is outside the mesh");
            return Err(SearchError::DestinationOutsideMesh(destination));
        };
        let q = Query {
            source,
            destination,
            start,
            goal,
        };

        let outcome = match self.config.strategy {
            Strategy::BreadthFirst => self.breadth_first(&q),
            Strategy::Dijkstra | Strategy::AStar => self.best_first(&q),
            Strategy::BidirectionalAStar => self.bidirectional(&q),
        };

        match outcome {
            Outcome::Found { corridor, explored } => {
                let path = refine(self.mesh, &corridor, source, destination);
                log::debug!(
                    "{:?}: route through {} cells, {} explored",
                    self.config.strategy,
                    corridor.len(),
                    explored.len()
                );
                Ok(Route {
                    path,
                    corridor,
                    explored,
                })
            }
            Outcome::Exhausted { explored } => {
                log::debug!(
                    "{:?}: no route, frontier exhausted after {} cells",
                    self.config.strategy,
                    explored.len()
                );
                Err(SearchError::Disconnected { explored })
            }
            Outcome::OverBudget { limit, explored } => {
                log::debug!(
                    "{:?}: no route, expansion limit {limit} reached",
                    self.config.strategy
                );
                Err(SearchError::BudgetExhausted { limit, explored })
            }
        }
    }

    /// Find a path from `source` to `destination`.
    ///
    /// Returns the polyline and the explored cells. The path is empty when
    /// there is no route; the explored cells are then empty if an endpoint
    /// lies outside the mesh, and hold the exhausted search space otherwise.
    pub fn find_path(&self, source: Point, destination: Point) -> (Vec<Point>, Vec<Cell>) {
        match self.search(source, destination) {
            Ok(route) => {
                let explored = route.explored_cells();
                (route.path, explored)
            }
            Err(err) => {
                let explored = err.explored().iter().map(|n| n.cell).collect();
                (Vec::new(), explored)
            }
        }
    }

    /// Where a chain holding `waypoint` in cell `from` crosses into `to`.
    ///
    /// Clips the waypoint into the overlap of the two cells, one axis at a
    /// time. `None` when the cells do not touch.
    #[inline]
    pub(crate) fn project(&self, from: usize, to: usize, waypoint: Point) -> Option<Point> {
        let portal = self.mesh.cell(from).overlap(&self.mesh.cell(to))?;
        Some(portal.clamp(waypoint))
    }

    /// Whether the expansion limit forbids settling another cell.
    #[inline]
    pub(crate) fn over_budget(&self, expansions: usize) -> Option<usize> {
        self.config
            .max_expansions
            .filter(|&limit| expansions >= limit)
    }
}

/// Find a path from `source` to `destination` through `mesh` using A* with
/// Euclidean costs.
///
/// Returns `(path, explored_cells)`; see [`Pathfinder::find_path`].
pub fn find_path(source: Point, destination: Point, mesh: &Mesh) -> (Vec<Point>, Vec<Cell>) {
    Pathfinder::new(mesh).find_path(source, destination)
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn pathnode_round_trip() {
        let node = PathNode {
            index: 3,
            cell: Cell::new(0.0, 1.0, 2.0, 3.0),
            cost: 1.5,
        };
        let json = serde_json::to_string(&node).unwrap();
        let back: PathNode = serde_json::from_str(&json).unwrap();
        assert_eq!(node, back);
    }
}

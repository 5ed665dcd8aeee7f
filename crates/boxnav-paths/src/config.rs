//! Search configuration.

/// Graph-search strategy used to walk the cell adjacency graph.
///
/// All strategies share the same waypoint projection and refinement; they
/// differ only in frontier ordering and seeding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Unweighted first-discovery search with a FIFO frontier. A cell keeps
    /// the first predecessor that reached it.
    BreadthFirst,
    /// Uniform-cost search: A* with a zero heuristic.
    Dijkstra,
    /// Informed search ordered by `g + h`.
    #[default]
    AStar,
    /// Two A* frontiers, one from each endpoint, sharing a single queue.
    BidirectionalAStar,
}

impl Strategy {
    /// Whether the frontier is ordered using the heuristic.
    #[inline]
    pub fn is_informed(self) -> bool {
        matches!(self, Self::AStar | Self::BidirectionalAStar)
    }
}

/// Configuration for a [`Pathfinder`](crate::Pathfinder).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Frontier strategy.
    pub strategy: Strategy,
    /// Maximum number of cells a search may settle before giving up.
    /// Checked between frontier pops; `None` means unbounded.
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    /// Configuration using `strategy` and no expansion limit.
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            max_expansions: None,
        }
    }

    /// Set the expansion limit.
    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }
}

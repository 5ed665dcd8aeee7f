use std::fmt;

use boxnav_core::Point;

use crate::pathfinder::PathNode;

/// Reasons a search produced no route.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchError {
    /// No cell contains the source point.
    SourceOutsideMesh(Point),
    /// No cell contains the destination point.
    DestinationOutsideMesh(Point),
    /// The goal cell cannot be reached from the start cell.
    Disconnected { explored: Vec<PathNode> },
    /// The search settled `limit` cells without reaching the goal.
    BudgetExhausted {
        limit: usize,
        explored: Vec<PathNode>,
    },
}

impl SearchError {
    /// Cells settled before the search gave up. Empty when an endpoint
    /// could not be located.
    pub fn explored(&self) -> &[PathNode] {
        match self {
            Self::SourceOutsideMesh(_) | Self::DestinationOutsideMesh(_) => &[],
            Self::Disconnected { explored } | Self::BudgetExhausted { explored, .. } => explored,
        }
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceOutsideMesh(p) => write!(f, "source {p} is outside the mesh"),
            Self::DestinationOutsideMesh(p) => write!(f, "destination {p} is outside the mesh"),
            Self::Disconnected { explored } => write!(
                f,
                "destination unreachable: explored {} cells without reaching it",
                explored.len()
            ),
            Self::BudgetExhausted { limit, .. } => {
                write!(f, "expansion limit of {limit} cells reached")
            }
        }
    }
}

impl std::error::Error for SearchError {}

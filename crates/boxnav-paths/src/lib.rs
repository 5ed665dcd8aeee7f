//! Path search over box-decomposed navigation meshes.
//!
//! Given a [`Mesh`](boxnav_core::Mesh) of axis-aligned cells and their
//! adjacency, this crate finds a route between two points:
//!
//! 1. both points are located in a cell ([`Mesh::locate`](boxnav_core::Mesh::locate));
//! 2. a graph search walks the cell adjacency graph, projecting a waypoint
//!    into each cell it reaches and paying the [`CostModel`] for each move;
//! 3. the resulting cell corridor is refined, from the goal back to the
//!    start, into a polyline whose inner points sit in the overlap of
//!    consecutive cells.
//!
//! The search strategy is chosen through [`SearchConfig`]:
//!
//! | [`Strategy`] | Frontier |
//! |---|---|
//! | `BreadthFirst` | FIFO, first discovery wins |
//! | `Dijkstra` | lowest accumulated cost |
//! | `AStar` (default) | lowest cost + [`Heuristic`] estimate |
//! | `BidirectionalAStar` | two A* frontiers meeting in the middle |
//!
//! Every query builds its own state, so a [`Pathfinder`] can be shared
//! freely between threads. Search progress is reported through the `log`
//! facade at `trace` level, outcomes at `debug` level.
//!
//! ```
//! use boxnav_core::{Cell, Mesh, Point};
//!
//! let a = Cell::new(0.0, 1.0, 0.0, 1.0);
//! let b = Cell::new(1.0, 2.0, 0.0, 1.0);
//! let mesh = Mesh::new(vec![a, b], vec![(a, vec![b]), (b, vec![a])]).unwrap();
//!
//! let (src, dst) = (Point::new(0.2, 0.5), Point::new(1.8, 0.5));
//! let (path, explored) = boxnav_paths::find_path(src, dst, &mesh);
//! assert_eq!(path, vec![src, Point::new(1.0, 0.5), dst]);
//! assert!(explored.contains(&a) && explored.contains(&b));
//! ```

mod astar;
mod bfs;
mod bidir;
mod config;
mod distance;
mod error;
mod pathfinder;
mod reach;
mod refine;
mod traits;

#[cfg(test)]
mod testutil;

pub use config::{SearchConfig, Strategy};
pub use distance::{Euclidean, Manhattan, euclidean, manhattan};
pub use error::SearchError;
pub use pathfinder::{PathNode, Pathfinder, Route, UNREACHABLE, find_path};
pub use reach::{is_reachable, reachable};
pub use traits::{CostModel, Heuristic};

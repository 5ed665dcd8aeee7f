use std::collections::BinaryHeap;

use crate::pathfinder::{Direction, NodeRef, Outcome, Pathfinder, Query, SearchState};
use crate::traits::Heuristic;

impl<C: Heuristic> Pathfinder<'_, C> {
    /// Unidirectional best-first search from the start cell to the goal
    /// cell: A* when the configured strategy is informed, Dijkstra
    /// otherwise.
    ///
    /// Each cell carries the waypoint where its best known chain enters it;
    /// relaxing an edge clips that waypoint into the overlap of the two
    /// cells and charges the cost model for the move. Stored costs are pure
    /// accumulated cost; the heuristic only orders the queue.
    pub(crate) fn best_first(&self, q: &Query) -> Outcome {
        let mesh = self.mesh;
        let informed = self.config.strategy.is_informed();
        let estimate = |from, to| {
            if informed {
                self.model.estimate(from, to)
            } else {
                0.0
            }
        };

        let mut st = SearchState::new(mesh.len());
        st.seed(q.start, q.source);

        let mut seq = 0u64;
        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: q.start,
            g: 0.0,
            f: estimate(q.source, q.destination),
            seq,
            dir: Direction::Forward,
        });

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip stale entries.
            let node = &st.nodes[ci];
            if !node.open || current.g > node.g {
                continue;
            }

            if let Some(limit) = self.over_budget(st.explored.len()) {
                return Outcome::OverBudget {
                    limit,
                    explored: st.explored,
                };
            }

            st.settle(mesh, ci);
            let current_g = st.nodes[ci].g;
            let current_wp = st.nodes[ci].waypoint;
            log::trace!("settle #{ci} {} g={current_g:.3} at {current_wp}", mesh.cell(ci));

            if ci == q.goal {
                break 'search true;
            }

            for &ni in mesh.neighbors(ci) {
                let Some(wp) = self.project(ci, ni, current_wp) else {
                    continue;
                };
                let tentative_g = current_g + self.model.cost(current_wp, wp);
                if !st.relax(ni, ci, wp, tentative_g) {
                    continue;
                }
                log::trace!("relax #{ni} via #{ci}: g={tentative_g:.3} at {wp}");

                seq += 1;
                open.push(NodeRef {
                    idx: ni,
                    g: tentative_g,
                    f: tentative_g + estimate(wp, q.destination),
                    seq,
                    dir: Direction::Forward,
                });
            }
        };

        if !found {
            return Outcome::Exhausted {
                explored: st.explored,
            };
        }

        let mut corridor = st.chain(q.goal);
        corridor.reverse();
        Outcome::Found {
            corridor,
            explored: st.explored,
        }
    }
}

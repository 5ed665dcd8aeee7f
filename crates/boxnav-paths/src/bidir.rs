//! Bidirectional A*.

use std::collections::BinaryHeap;

use crate::pathfinder::{Direction, NodeRef, Outcome, PathNode, Pathfinder, Query, SearchState};
use crate::traits::Heuristic;

impl<C: Heuristic> Pathfinder<'_, C> {
    /// Two A* frontiers sharing one queue: a forward one seeded at the
    /// start cell heading for the destination point, and a backward one
    /// seeded at the goal cell heading for the source point.
    ///
    /// The backward frontier walks edges against their direction (through
    /// [`Mesh::incoming`](boxnav_core::Mesh::incoming)), so the joined
    /// corridor only uses edges the mesh declares. The search stops as
    /// soon as one cell is settled by both frontiers.
    ///
    /// Found and over-budget outcomes report the union of both frontiers'
    /// settlements. A disconnected outcome reports only the forward
    /// frontier, which by then has settled the whole start component.
    pub(crate) fn bidirectional(&self, q: &Query) -> Outcome {
        let mesh = self.mesh;
        let mut fwd = SearchState::new(mesh.len());
        let mut bwd = SearchState::new(mesh.len());
        fwd.seed(q.start, q.source);
        bwd.seed(q.goal, q.destination);

        // Union of both frontiers' settlements, in order.
        let mut explored: Vec<PathNode> = Vec::new();
        let mut seen = vec![false; mesh.len()];

        let mut seq = 0u64;
        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: q.start,
            g: 0.0,
            f: self.model.estimate(q.source, q.destination),
            seq,
            dir: Direction::Forward,
        });
        seq += 1;
        open.push(NodeRef {
            idx: q.goal,
            g: 0.0,
            f: self.model.estimate(q.destination, q.source),
            seq,
            dir: Direction::Backward,
        });

        let meeting = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search None;
            };

            let ci = current.idx;
            let (st, other, target) = match current.dir {
                Direction::Forward => (&mut fwd, &bwd, q.destination),
                Direction::Backward => (&mut bwd, &fwd, q.source),
            };

            // Skip stale entries.
            let node = &st.nodes[ci];
            if !node.open || current.g > node.g {
                continue;
            }

            if let Some(limit) = self.over_budget(explored.len()) {
                return Outcome::OverBudget { limit, explored };
            }

            st.settle(mesh, ci);
            let current_g = st.nodes[ci].g;
            let current_wp = st.nodes[ci].waypoint;
            log::trace!(
                "{:?} settle #{ci} {} g={current_g:.3} at {current_wp}",
                current.dir,
                mesh.cell(ci)
            );
            if !seen[ci] {
                seen[ci] = true;
                explored.push(PathNode {
                    index: ci,
                    cell: mesh.cell(ci),
                    cost: current_g,
                });
            }

            if other.nodes[ci].settled {
                break 'search Some(ci);
            }

            let neighbors = match current.dir {
                Direction::Forward => mesh.neighbors(ci),
                Direction::Backward => mesh.incoming(ci),
            };
            for &ni in neighbors {
                let Some(wp) = self.project(ci, ni, current_wp) else {
                    continue;
                };
                let tentative_g = current_g + self.model.cost(current_wp, wp);
                if !st.relax(ni, ci, wp, tentative_g) {
                    continue;
                }
                log::trace!(
                    "{:?} relax #{ni} via #{ci}: g={tentative_g:.3} at {wp}",
                    current.dir
                );

                seq += 1;
                open.push(NodeRef {
                    idx: ni,
                    g: tentative_g,
                    f: tentative_g + self.model.estimate(wp, target),
                    seq,
                    dir: current.dir,
                });
            }
        };

        let Some(meet) = meeting else {
            return Outcome::Exhausted {
                explored: fwd.explored,
            };
        };
        log::trace!("frontiers meet at #{meet}");

        // Forward chain: meet .. start, reversed. Backward chain: meet ..
        // goal, minus the shared meeting cell.
        let mut corridor = fwd.chain(meet);
        corridor.reverse();
        corridor.extend(bwd.chain(meet).into_iter().skip(1));
        Outcome::Found { corridor, explored }
    }
}

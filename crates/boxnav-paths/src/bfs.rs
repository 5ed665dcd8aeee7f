use std::collections::VecDeque;

use crate::pathfinder::{Outcome, Pathfinder, Query, SearchState, UNREACHABLE};
use crate::traits::Heuristic;

impl<C: Heuristic> Pathfinder<'_, C> {
    /// Breadth-first search over the adjacency graph.
    ///
    /// Every edge counts the same for ordering. A cell keeps the first
    /// predecessor that discovers it and is never relaxed again, so the
    /// corridor has the fewest cells rather than the lowest cost. Costs
    /// are still accumulated for the settlement record.
    pub(crate) fn breadth_first(&self, q: &Query) -> Outcome {
        let mesh = self.mesh;
        let mut st = SearchState::new(mesh.len());
        st.seed(q.start, q.source);

        let mut queue: VecDeque<usize> = VecDeque::new();
        queue.push_back(q.start);

        while let Some(ci) = queue.pop_front() {
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
                let mut corridor = st.chain(q.goal);
                corridor.reverse();
                return Outcome::Found {
                    corridor,
                    explored: st.explored,
                };
            }

            for &ni in mesh.neighbors(ci) {
                if st.nodes[ni].g != UNREACHABLE {
                    continue;
                }
                let Some(wp) = self.project(ci, ni, current_wp) else {
                    continue;
                };
                let g = current_g + self.model.cost(current_wp, wp);
                let discovered = st.relax(ni, ci, wp, g);
                debug_assert!(discovered, "#{ni} was already discovered");
                log::trace!("discover #{ni} via #{ci} at {wp}");
                queue.push_back(ni);
            }
        }

        Outcome::Exhausted {
            explored: st.explored,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::testutil::{grid_mesh, two_squares};
    use crate::{Pathfinder, SearchConfig, SearchError, Strategy};
    use boxnav_core::{Mesh, Point};

    fn bfs(mesh: &Mesh) -> Pathfinder<'_> {
        Pathfinder::new(mesh).with_config(SearchConfig::new(Strategy::BreadthFirst))
    }

    #[test]
    fn crosses_shared_edge() {
        let mesh = two_squares(true);
        let src = Point::new(0.2, 0.5);
        let dst = Point::new(1.8, 0.5);
        let (path, explored) = bfs(&mesh).find_path(src, dst);
        assert_eq!(path, vec![src, Point::new(1.0, 0.5), dst]);
        assert_eq!(explored.len(), 2);
    }

    #[test]
    fn settles_in_layers() {
        let mesh = grid_mesh(4, 4, |_, _| false);
        let route = bfs(&mesh)
            .search(Point::new(0.5, 0.5), Point::new(3.5, 3.5))
            .unwrap();
        // Fewest cells: 7 for a 4x4 grid corner to corner.
        assert_eq!(route.corridor.len(), 7);
        // The whole grid is seen before the far corner.
        assert_eq!(route.explored.len(), 16);
        assert_eq!(route.explored[0].index, route.corridor[0]);
    }

    #[test]
    fn keeps_first_predecessor() {
        let mesh = grid_mesh(2, 2, |_, _| false);
        let route = bfs(&mesh)
            .search(Point::new(0.5, 0.5), Point::new(1.5, 1.5))
            .unwrap();
        // Neighbors are listed right before up, so the corridor goes right
        // first.
        let right = mesh.locate(Point::new(1.5, 0.5)).unwrap();
        assert_eq!(route.corridor[1], right);
    }

    #[test]
    fn disconnected() {
        let mesh = grid_mesh(5, 1, |x, _| x == 2);
        let err = bfs(&mesh)
            .search(Point::new(0.5, 0.5), Point::new(4.5, 0.5))
            .unwrap_err();
        assert!(matches!(err, SearchError::Disconnected { .. }));
        assert_eq!(err.explored().len(), 2);
    }
}

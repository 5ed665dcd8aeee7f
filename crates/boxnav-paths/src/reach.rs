//! Reachability over the cell adjacency graph.

use boxnav_core::Mesh;

/// Every cell reachable from `start` along outgoing edges, `start` first.
///
/// This is the set a uniform search from `start` settles when the goal
/// is unreachable. Returns an empty list if `start` is not a cell index.
pub fn reachable(mesh: &Mesh, start: usize) -> Vec<usize> {
    let mut result = Vec::new();
    if start >= mesh.len() {
        return result;
    }

    let mut seen = vec![false; mesh.len()];
    // Iterative DFS from `start`.
    let mut stack = vec![start];
    seen[start] = true;
    result.push(start);

    while let Some(ci) = stack.pop() {
        for &ni in mesh.neighbors(ci) {
            if !seen[ni] {
                seen[ni] = true;
                stack.push(ni);
                result.push(ni);
            }
        }
    }

    result
}

/// Whether `to` can be reached from `from` along outgoing edges.
pub fn is_reachable(mesh: &Mesh, from: usize, to: usize) -> bool {
    reachable(mesh, from).contains(&to)
}

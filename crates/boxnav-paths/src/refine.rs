//! Turning a cell corridor into a polyline.

use boxnav_core::{Mesh, Point};

/// Build the polyline for `corridor` (cell indices, start cell first).
///
/// Walks the corridor from the goal back to the start, clipping a running
/// point into the overlap of each consecutive pair of cells. The first
/// point is `source` and the last is `destination`, both unchanged; each
/// point in between lies in both cells of its pair. A clip that does not
/// need to move the running point repeats it, so consecutive duplicates
/// are expected.
///
/// This follows the corridor cheaply but is not a taut-string path.
pub(crate) fn refine(
    mesh: &Mesh,
    corridor: &[usize],
    source: Point,
    destination: Point,
) -> Vec<Point> {
    let mut points = Vec::with_capacity(corridor.len() + 1);
    points.push(destination);

    let mut current = destination;
    for pair in corridor.windows(2).rev() {
        let (prev, cell) = (pair[0], pair[1]);
        if let Some(portal) = mesh.cell(cell).overlap(&mesh.cell(prev)) {
            current = portal.clamp(current);
        }
        points.push(current);
    }

    points.push(source);
    points.reverse();
    points
}

//! Mesh fixtures shared by the unit tests.

use std::collections::HashMap;

use boxnav_core::{Cell, Mesh, Point};
use rand::Rng;

/// Unit square at the origin.
pub(crate) const A: Cell = Cell::new(0.0, 1.0, 0.0, 1.0);
/// Unit square right of [`A`], sharing the edge x = 1.
pub(crate) const B: Cell = Cell::new(1.0, 2.0, 0.0, 1.0);
/// Unit square above [`B`], sharing the edge y = 1.
pub(crate) const C: Cell = Cell::new(1.0, 2.0, 1.0, 2.0);

/// `A` and `B`, linked both ways or not at all.
pub(crate) fn two_squares(linked: bool) -> Mesh {
    let adj: HashMap<Cell, Vec<Cell>> = if linked {
        [(A, vec![B]), (B, vec![A])].into_iter().collect()
    } else {
        [(A, vec![]), (B, vec![])].into_iter().collect()
    };
    Mesh::new(vec![A, B], adj).unwrap()
}

/// `A` - `B` - `C`, linked both ways. `A` and `C` only share a corner and
/// are not linked.
pub(crate) fn l_shape() -> Mesh {
    Mesh::new(
        vec![A, B, C],
        vec![(A, vec![B]), (B, vec![A, C]), (C, vec![B])],
    )
    .unwrap()
}

/// A `w` x `h` grid of unit cells with 4-way links, skipping cells for
/// which `blocked(x, y)` holds. Cells are numbered row by row; neighbors
/// are listed +x, +y, -x, -y.
pub(crate) fn grid_mesh(w: usize, h: usize, blocked: impl Fn(usize, usize) -> bool) -> Mesh {
    let mut ids = vec![None; w * h];
    let mut cells = Vec::new();
    for y in 0..h {
        for x in 0..w {
            if !blocked(x, y) {
                ids[y * w + x] = Some(cells.len());
                cells.push(Cell::new(x as f64, x as f64 + 1.0, y as f64, y as f64 + 1.0));
            }
        }
    }

    let id = |x: isize, y: isize| -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= w || y as usize >= h {
            return None;
        }
        ids[y as usize * w + x as usize]
    };

    let mut adjacency = vec![Vec::new(); cells.len()];
    for y in 0..h as isize {
        for x in 0..w as isize {
            let Some(ci) = id(x, y) else {
                continue;
            };
            for (dx, dy) in [(1, 0), (0, 1), (-1, 0), (0, -1)] {
                if let Some(ni) = id(x + dx, y + dy) {
                    adjacency[ci].push(ni);
                }
            }
        }
    }
    Mesh::from_indices(cells, adjacency).unwrap()
}

/// A grid where each cell is blocked with probability `density`.
pub(crate) fn random_grid(rng: &mut impl Rng, w: usize, h: usize, density: f64) -> Mesh {
    let blocked: Vec<bool> = (0..w * h).map(|_| rng.random_bool(density)).collect();
    grid_mesh(w, h, |x, y| blocked[y * w + x])
}

/// A uniformly random point inside a random cell of `mesh`.
pub(crate) fn random_point(rng: &mut impl Rng, mesh: &Mesh) -> Point {
    let cell = mesh.cell(rng.random_range(0..mesh.len()));
    Point::new(
        cell.x_min + rng.random::<f64>() * cell.width(),
        cell.y_min + rng.random::<f64>() * cell.height(),
    )
}

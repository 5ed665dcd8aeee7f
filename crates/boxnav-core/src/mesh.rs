//! The navigation mesh: an ordered set of [`Cell`]s and the adjacency
//! relation between them.
//!
//! A [`Mesh`] is validated once on construction and is read-only
//! afterwards, so any number of queries may share it.

use std::collections::HashMap;
use std::fmt;

use crate::geom::{Cell, Point};

/// Errors reported when a mesh description is malformed.
#[derive(Debug, Clone, PartialEq)]
pub enum MeshError {
    /// A cell has `min > max` on some axis.
    InvertedBounds { index: usize, cell: Cell },
    /// A cell has a NaN or infinite bound.
    NonFiniteBounds { index: usize, cell: Cell },
    /// The same cell appears twice in the cell list.
    DuplicateCell { index: usize, cell: Cell },
    /// An adjacency entry names a cell that is not in the mesh.
    UnknownCell(Cell),
    /// An index-based adjacency entry points outside the cell list.
    IndexOutOfRange { from: usize, to: usize },
    /// Two cells are declared adjacent but share no boundary.
    DisjointNeighbors { from: Cell, to: Cell },
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvertedBounds { index, cell } => {
                write!(f, "mesh: cell #{index} {cell} has inverted bounds")
            }
            Self::NonFiniteBounds { index, cell } => {
                write!(f, "mesh: cell #{index} {cell} has non-finite bounds")
            }
            Self::DuplicateCell { index, cell } => {
                write!(f, "mesh: cell #{index} {cell} appears more than once")
            }
            Self::UnknownCell(cell) => {
                write!(f, "mesh: adjacency references unknown cell {cell}")
            }
            Self::IndexOutOfRange { from, to } => {
                write!(
                    f,
                    "mesh: adjacency of cell #{from} references missing cell #{to}"
                )
            }
            Self::DisjointNeighbors { from, to } => {
                write!(f, "mesh: cells {from} and {to} are adjacent but do not touch")
            }
        }
    }
}

impl std::error::Error for MeshError {}

/// A validated navigation mesh.
///
/// Cells are addressed by their index in the order they were supplied.
/// Outgoing neighbor lists keep the caller's order, which fixes the
/// order in which a search relaxes edges.
#[derive(Debug, Clone)]
pub struct Mesh {
    cells: Vec<Cell>,
    index: HashMap<Cell, usize>,
    outgoing: Vec<Vec<usize>>,
    incoming: Vec<Vec<usize>>,
}

impl Mesh {
    /// Build a mesh from its cells and a cell-keyed adjacency relation.
    ///
    /// `adjacency` may be a `HashMap<Cell, Vec<Cell>>` or any other
    /// sequence of `(cell, neighbors)` pairs. Cells without an entry have
    /// no outgoing edges. Repeated entries for the same cell are appended.
    pub fn new<I>(cells: Vec<Cell>, adjacency: I) -> Result<Self, MeshError>
    where
        I: IntoIterator<Item = (Cell, Vec<Cell>)>,
    {
        let index = index_cells(&cells)?;
        let mut outgoing = vec![Vec::new(); cells.len()];
        for (cell, neighbors) in adjacency {
            let from = *index.get(&cell).ok_or(MeshError::UnknownCell(cell))?;
            for n in neighbors {
                let to = *index.get(&n).ok_or(MeshError::UnknownCell(n))?;
                outgoing[from].push(to);
            }
        }
        Self::assemble(cells, index, outgoing)
    }

    /// Build a mesh from its cells and index-based neighbor lists.
    ///
    /// `adjacency[i]` lists the neighbors of `cells[i]`; missing trailing
    /// lists mean no outgoing edges.
    pub fn from_indices(
        cells: Vec<Cell>,
        mut adjacency: Vec<Vec<usize>>,
    ) -> Result<Self, MeshError> {
        let index = index_cells(&cells)?;
        if adjacency.len() > cells.len() {
            let from = cells.len();
            let to = adjacency[from].first().copied().unwrap_or(from);
            return Err(MeshError::IndexOutOfRange { from, to });
        }
        adjacency.resize(cells.len(), Vec::new());
        for (from, neighbors) in adjacency.iter().enumerate() {
            if let Some(&to) = neighbors.iter().find(|&&to| to >= cells.len()) {
                return Err(MeshError::IndexOutOfRange { from, to });
            }
        }
        Self::assemble(cells, index, adjacency)
    }

    fn assemble(
        cells: Vec<Cell>,
        index: HashMap<Cell, usize>,
        outgoing: Vec<Vec<usize>>,
    ) -> Result<Self, MeshError> {
        let mut incoming = vec![Vec::new(); cells.len()];
        for (from, neighbors) in outgoing.iter().enumerate() {
            for &to in neighbors {
                if !cells[from].touches(&cells[to]) {
                    return Err(MeshError::DisjointNeighbors {
                        from: cells[from],
                        to: cells[to],
                    });
                }
                incoming[to].push(from);
            }
        }
        Ok(Self {
            cells,
            index,
            outgoing,
            incoming,
        })
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the mesh has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells, in mesh order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The cell at index `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    #[inline]
    pub fn cell(&self, i: usize) -> Cell {
        self.cells[i]
    }

    /// Index of `cell` in the mesh, if present.
    #[inline]
    pub fn index_of(&self, cell: &Cell) -> Option<usize> {
        self.index.get(cell).copied()
    }

    /// Outgoing neighbors of cell `i`, in the order they were supplied.
    #[inline]
    pub fn neighbors(&self, i: usize) -> &[usize] {
        &self.outgoing[i]
    }

    /// Cells that list `i` as a neighbor, in mesh order.
    #[inline]
    pub fn incoming(&self, i: usize) -> &[usize] {
        &self.incoming[i]
    }

    /// Locate the cell containing `p`.
    ///
    /// When several cells contain the point (it lies on a shared edge or in
    /// an overlap) the first one in mesh order wins. Returns `None` when no
    /// cell contains it.
    pub fn locate(&self, p: Point) -> Option<usize> {
        self.cells.iter().position(|c| c.contains(p))
    }

    /// Every cell containing `p`, in mesh order.
    pub fn locate_all(&self, p: Point) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.contains(p))
            .map(|(i, _)| i)
            .collect()
    }

    /// The adjacency relation as index lists, one per cell.
    pub fn adjacency(&self) -> &[Vec<usize>] {
        &self.outgoing
    }
}

fn index_cells(cells: &[Cell]) -> Result<HashMap<Cell, usize>, MeshError> {
    let mut index = HashMap::with_capacity(cells.len());
    for (i, &cell) in cells.iter().enumerate() {
        if !cell.bounds().iter().all(|b| b.is_finite()) {
            return Err(MeshError::NonFiniteBounds { index: i, cell });
        }
        if !cell.is_well_formed() {
            return Err(MeshError::InvertedBounds { index: i, cell });
        }
        if index.insert(cell, i).is_some() {
            return Err(MeshError::DuplicateCell { index: i, cell });
        }
    }
    Ok(index)
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct MeshRepr {
    cells: Vec<Cell>,
    adjacency: Vec<Vec<usize>>,
}

#[cfg(feature = "serde")]
impl serde::Serialize for Mesh {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        MeshRepr {
            cells: self.cells.clone(),
            adjacency: self.outgoing.clone(),
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Mesh {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = MeshRepr::deserialize(deserializer)?;
        Mesh::from_indices(repr.cells, repr.adjacency).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Cell = Cell::new(0.0, 1.0, 0.0, 1.0);
    const B: Cell = Cell::new(1.0, 2.0, 0.0, 1.0);
    const C: Cell = Cell::new(1.0, 2.0, 1.0, 2.0);

    #[test]
    fn new_keeps_neighbor_order() {
        let mesh = Mesh::new(vec![A, B, C], vec![(B, vec![C, A]), (A, vec![B])]).unwrap();
        assert_eq!(mesh.len(), 3);
        assert_eq!(mesh.neighbors(0), &[1]);
        assert_eq!(mesh.neighbors(1), &[2, 0]);
        assert!(mesh.neighbors(2).is_empty());
        assert_eq!(mesh.index_of(&C), Some(2));
    }

    #[test]
    fn incoming_edges_follow_direction() {
        // One-way edge A -> B.
        let mesh = Mesh::new(vec![A, B], vec![(A, vec![B])]).unwrap();
        assert_eq!(mesh.neighbors(0), &[1]);
        assert!(mesh.neighbors(1).is_empty());
        assert_eq!(mesh.incoming(1), &[0]);
        assert!(mesh.incoming(0).is_empty());
    }

    #[test]
    fn accepts_hash_map_adjacency() {
        let adj: HashMap<Cell, Vec<Cell>> = [(A, vec![B]), (B, vec![A])].into_iter().collect();
        let mesh = Mesh::new(vec![A, B], adj).unwrap();
        assert_eq!(mesh.neighbors(0), &[1]);
        assert_eq!(mesh.neighbors(1), &[0]);
    }

    #[test]
    fn rejects_inverted_bounds() {
        let bad = Cell::new(3.0, 2.0, 0.0, 1.0);
        let err = Mesh::new(vec![A, bad], Vec::new()).unwrap_err();
        assert_eq!(err, MeshError::InvertedBounds { index: 1, cell: bad });
    }

    #[test]
    fn rejects_non_finite_bounds() {
        let bad = Cell::new(0.0, f64::NAN, 0.0, 1.0);
        let err = Mesh::from_indices(vec![bad], Vec::new()).unwrap_err();
        assert!(matches!(err, MeshError::NonFiniteBounds { index: 0, .. }));
    }

    #[test]
    fn rejects_duplicate_cells() {
        let err = Mesh::new(vec![A, B, A], Vec::new()).unwrap_err();
        assert_eq!(err, MeshError::DuplicateCell { index: 2, cell: A });
    }

    #[test]
    fn rejects_unknown_cells() {
        let err = Mesh::new(vec![A, B], vec![(A, vec![C])]).unwrap_err();
        assert_eq!(err, MeshError::UnknownCell(C));
        let err = Mesh::new(vec![A, B], vec![(C, vec![A])]).unwrap_err();
        assert_eq!(err, MeshError::UnknownCell(C));
    }

    #[test]
    fn rejects_out_of_range_indices() {
        let err = Mesh::from_indices(vec![A, B], vec![vec![1], vec![5]]).unwrap_err();
        assert_eq!(err, MeshError::IndexOutOfRange { from: 1, to: 5 });
        let err = Mesh::from_indices(vec![A], vec![vec![], vec![0]]).unwrap_err();
        assert!(matches!(err, MeshError::IndexOutOfRange { from: 1, .. }));
    }

    #[test]
    fn rejects_disjoint_neighbors() {
        let far = Cell::new(5.0, 6.0, 5.0, 6.0);
        let err = Mesh::new(vec![A, far], vec![(A, vec![far])]).unwrap_err();
        assert_eq!(err, MeshError::DisjointNeighbors { from: A, to: far });
    }

    #[test]
    fn corner_contact_counts_as_touching() {
        // A and C share only the corner (1, 1).
        assert!(Mesh::new(vec![A, C], vec![(A, vec![C])]).is_ok());
    }

    #[test]
    fn locate_prefers_first_cell_in_mesh_order() {
        let mesh = Mesh::new(vec![A, B, C], Vec::new()).unwrap();
        assert_eq!(mesh.locate(Point::new(0.5, 0.5)), Some(0));
        assert_eq!(mesh.locate(Point::new(1.5, 1.5)), Some(2));
        // On the shared edge x = 1: both A and B contain it.
        let edge = Point::new(1.0, 0.5);
        assert_eq!(mesh.locate(edge), Some(0));
        assert_eq!(mesh.locate_all(edge), vec![0, 1]);
        // Corner shared by all three.
        assert_eq!(mesh.locate_all(Point::new(1.0, 1.0)), vec![0, 1, 2]);
    }

    #[test]
    fn locate_outside_mesh() {
        let mesh = Mesh::new(vec![A, B], Vec::new()).unwrap();
        assert_eq!(mesh.locate(Point::new(-0.1, 0.5)), None);
        assert_eq!(mesh.locate(Point::new(0.5, 1.5)), None);
        assert!(mesh.locate_all(Point::new(3.0, 3.0)).is_empty());
    }

    #[test]
    fn empty_mesh() {
        let mesh = Mesh::new(Vec::new(), Vec::new()).unwrap();
        assert!(mesh.is_empty());
        assert_eq!(mesh.locate(Point::ZERO), None);
    }

    #[test]
    fn error_messages_name_the_cell() {
        let bad = Cell::new(3.0, 2.0, 0.0, 1.0);
        let msg = MeshError::InvertedBounds { index: 4, cell: bad }.to_string();
        assert!(msg.contains("#4"), "unexpected message: {msg}");
        assert!(msg.contains("[3, 2]x[0, 1]"), "unexpected message: {msg}");
    }
}

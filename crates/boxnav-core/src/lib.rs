//! **boxnav-core** — Core types for box-decomposed navigation meshes.
//!
//! This crate provides the foundational types used across the *boxnav*
//! crates: real-valued geometry primitives and the validated navigation
//! mesh (cells plus their adjacency relation).

pub mod geom;
pub mod mesh;

pub use geom::{Cell, Point};
pub use mesh::{Mesh, MeshError};

//! Spatial data structures for the walker lattice
//!
//! This module contains:
//! - Cell identity and the clipped lattice domain
//! - Clip polygons with inclusive containment

/// Cells, resolution and the clipped lattice domain
pub mod domain;
/// Clip polygon geometry
pub mod polygon;

pub use domain::{Cell, CellId, Domain, Resolution};
pub use polygon::Polygon;

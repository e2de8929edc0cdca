//! Space-filling random walkers for maze-like line patterns
//!
//! Walkers perform self-avoiding random walks over a (possibly clipped)
//! lattice until every cell is taken. Each walker prefers long straight runs
//! along one axis or wanders freely, and new walkers are backfilled into the
//! remaining gaps, so a finished run partitions the lattice into continuous
//! paths ready to be drawn as strokes.

#![forbid(unsafe_code)]

/// Walker movement, spawning and the simulation loop
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Lattice domain and clip geometry
pub mod spatial;

pub use algorithm::executor::{Clip, RunConfig, Simulation, generate};
pub use algorithm::paths::Sketch;
pub use io::error::{FillError, Result};

//! Input/output around the walker engine

/// Command-line parsing and batch rendering
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Raster surface and PNG export
pub mod image;
/// Prefill masks for pre-occupied cells
pub mod prefill;
/// Progress bars for batch rendering
pub mod progress;
/// Drawing surface abstraction
pub mod surface;

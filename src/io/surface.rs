//! Drawing surface consumed by the sketch draw callback

use crate::algorithm::walker::{Color, WalkerStyle};

/// Target the finished sketch is drawn onto
///
/// Coordinates are world-space positions as produced by the domain transform.
pub trait Surface {
    /// Draw a connected polyline using the walker's stroke styling
    fn stroke_polyline(&mut self, points: &[[f64; 2]], style: &WalkerStyle);

    /// Fill an axis-aligned square centred on `centre`
    fn fill_square(&mut self, centre: [f64; 2], side: f64, color: Color);
}

/// Surface that records draw calls instead of rasterising them
///
/// Useful for exporting geometry and for checking what a sketch would draw.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    /// Stroked polylines with their color
    pub polylines: Vec<(Vec<[f64; 2]>, Color)>,
    /// Filled squares as `(centre, side, color)`
    pub squares: Vec<([f64; 2], f64, Color)>,
}

impl Surface for RecordingSurface {
    fn stroke_polyline(&mut self, points: &[[f64; 2]], style: &WalkerStyle) {
        self.polylines.push((points.to_vec(), style.color));
    }

    fn fill_square(&mut self, centre: [f64; 2], side: f64, color: Color) {
        self.squares.push((centre, side, color));
    }
}

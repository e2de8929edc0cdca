//! Raster drawing surface with PNG export

use crate::algorithm::walker::{Color, WalkerStyle};
use crate::io::error::{FillError, Result};
use crate::io::surface::Surface;
use crate::spatial::Resolution;
use image::{Rgba, RgbaImage};
use std::path::Path;

// Brush stamps per pixel of segment length
const STAMPS_PER_PIXEL: f64 = 2.0;

// Highlight core width relative to the stroke
const HIGHLIGHT_FRACTION: f64 = 0.3;

/// Pixel canvas that sketches are drawn onto
pub struct RasterSurface {
    image: RgbaImage,
}

impl RasterSurface {
    /// Blank canvas filled with `background`
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, Rgba(background)),
        }
    }

    /// Canvas sized for a lattice drawn `step_size` apart with a margin
    pub fn for_resolution(
        resolution: Resolution,
        step_size: f64,
        margin: f64,
        background: Color,
    ) -> Self {
        let width = (resolution.x as f64).mul_add(step_size, 2.0 * margin).ceil() as u32 + 1;
        let height = (resolution.y as f64).mul_add(step_size, 2.0 * margin).ceil() as u32 + 1;
        Self::new(width, height, background)
    }

    /// Rendered pixels
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Write the canvas as PNG, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The parent directory cannot be created
    /// - The image cannot be encoded or written
    pub fn save(&self, output_path: &Path) -> Result<()> {
        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| FillError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        self.image
            .save(output_path)
            .map_err(|e| FillError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })
    }

    // Square brush clipped to the canvas
    fn stamp(&mut self, centre: [f64; 2], side: f64, color: Color) {
        let half = (side * 0.5).max(0.5);
        let x_start = (centre[0] - half).round().max(0.0) as u32;
        let y_start = (centre[1] - half).round().max(0.0) as u32;
        let x_end = (centre[0] + half).round().max(0.0) as u32;
        let y_end = (centre[1] + half).round().max(0.0) as u32;

        for y in y_start..y_end.max(y_start + 1) {
            for x in x_start..x_end.max(x_start + 1) {
                if let Some(pixel) = self.image.get_pixel_mut_checked(x, y) {
                    *pixel = Rgba(color);
                }
            }
        }
    }

    fn sweep(&mut self, points: &[[f64; 2]], side: f64, color: Color) {
        if let [single] = points {
            self.stamp(*single, side, color);
            return;
        }

        for pair in points.windows(2) {
            let [from, to] = pair else { continue };
            let length = (to[0] - from[0]).hypot(to[1] - from[1]);
            let stamps = (length * STAMPS_PER_PIXEL).ceil().max(1.0) as usize;
            for step in 0..=stamps {
                let t = step as f64 / stamps as f64;
                let point = [
                    (to[0] - from[0]).mul_add(t, from[0]),
                    (to[1] - from[1]).mul_add(t, from[1]),
                ];
                self.stamp(point, side, color);
            }
        }
    }
}

impl Surface for RasterSurface {
    fn stroke_polyline(&mut self, points: &[[f64; 2]], style: &WalkerStyle) {
        self.sweep(points, style.size, style.color);
        self.sweep(points, style.size * HIGHLIGHT_FRACTION, style.highlight_color);
    }

    fn fill_square(&mut self, centre: [f64; 2], side: f64, color: Color) {
        self.stamp(centre, side, color);
    }
}

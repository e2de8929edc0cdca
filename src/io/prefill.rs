//! Prefill mask parsing for cells that start out occupied

use crate::io::error::{FillError, Result};
use crate::spatial::{CellId, Domain};
use std::path::Path;

/// Cells to mark as taken before the first walker is placed
#[derive(Debug, Clone, Default)]
pub struct PrefillData {
    /// Lattice coordinates read from the mask
    pub cells: Vec<CellId>,
}

impl PrefillData {
    /// Parse a PNG mask where pixel `(x, y)` maps to cell `(x, y)`
    ///
    /// Any pixel with non-zero alpha marks its cell. Fully transparent
    /// pixels are left free.
    ///
    /// # Errors
    ///
    /// Returns an error if the PNG file cannot be loaded
    pub fn from_png(path: &Path) -> Result<Self> {
        let img = image::open(path).map_err(|e| FillError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?;

        let cells = img
            .to_rgba8()
            .enumerate_pixels()
            .filter(|(_, _, pixel)| pixel.0[3] > 0)
            .map(|(x, y, _)| CellId::new(x as i32, y as i32))
            .collect();

        Ok(Self { cells })
    }

    /// Mark every listed cell on `domain`
    ///
    /// Returns how many cells were part of the domain.
    pub fn apply(&self, domain: &mut Domain) -> usize {
        self.cells
            .iter()
            .filter(|&&id| domain.preoccupy(id))
            .count()
    }
}

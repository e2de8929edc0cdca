//! Tests for prefill mask loading and application

#[cfg(test)]
mod tests {
    use fillwalk::io::error::FillError;
    use fillwalk::io::prefill::PrefillData;
    use fillwalk::spatial::{CellId, Domain, Resolution};
    use image::{Rgba, RgbaImage};
    use std::path::Path;
    use tempfile::TempDir;

    fn write_mask(path: &Path) {
        let mut mask = RgbaImage::from_pixel(3, 2, Rgba([0, 0, 0, 0]));
        mask.put_pixel(1, 0, Rgba([0, 0, 0, 255]));
        mask.put_pixel(2, 1, Rgba([255, 255, 255, 10]));
        mask.save(path).unwrap();
    }

    // Tests only pixels with alpha become prefilled cells
    #[test]
    fn test_from_png_reads_opaque_pixels() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mask.png");
        write_mask(&path);

        let prefill = PrefillData::from_png(&path).unwrap();

        assert_eq!(prefill.cells, vec![CellId::new(1, 0), CellId::new(2, 1)]);
    }

    #[test]
    fn test_from_png_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = PrefillData::from_png(&temp_dir.path().join("absent.png"));

        assert!(matches!(result, Err(FillError::ImageLoad { .. })));
    }

    // Tests cells outside the domain are ignored
    // Verified by counting every listed cell
    #[test]
    fn test_apply_counts_cells_in_domain() {
        let mut domain = Domain::new(Resolution::square(1), |x, y| [f64::from(x), f64::from(y)]);
        let prefill = PrefillData {
            cells: vec![CellId::new(1, 0), CellId::new(2, 1)],
        };

        assert_eq!(prefill.apply(&mut domain), 1);
        assert_eq!(domain.get(CellId::new(1, 0)).map(|cell| cell.occupied), Some(true));
        assert_eq!(domain.get(CellId::new(0, 0)).map(|cell| cell.occupied), Some(false));
    }

    #[test]
    fn test_empty_prefill_changes_nothing() {
        let mut domain = Domain::new(Resolution::square(2), |x, y| [f64::from(x), f64::from(y)]);

        assert_eq!(PrefillData::default().apply(&mut domain), 0);
        assert!(domain.cells().iter().all(|cell| !cell.occupied));
    }
}

//! Tests for configuration constants and defaults

#[cfg(test)]
mod tests {
    use fillwalk::io::configuration::{
        BACKGROUND_COLOR, DEFAULT_PALETTE, DEFAULT_RESOLUTION, DEFAULT_SEED, DEFAULT_SIZE,
        DEFAULT_STEP_SIZE, MAX_INDIVIDUAL_PROGRESS_BARS, MAX_RESOLUTION, OUTPUT_PREFIX,
        OUTPUT_SUFFIX,
    };

    // Tests default seed is fixed
    // Verified by changing seed value
    #[test]
    fn test_default_seed_is_reproducible() {
        assert_eq!(DEFAULT_SEED, 42);
    }

    #[test]
    fn test_default_resolution_within_limit() {
        assert!(DEFAULT_RESOLUTION > 0);
        assert!(DEFAULT_RESOLUTION <= MAX_RESOLUTION);
    }

    // Tests strokes fit between neighbouring cells
    #[test]
    fn test_default_stroke_narrower_than_step() {
        assert!(DEFAULT_SIZE > 0.0);
        assert!(DEFAULT_SIZE < DEFAULT_STEP_SIZE);
    }

    #[test]
    fn test_palette_is_opaque_and_distinct_from_background() {
        assert!(!DEFAULT_PALETTE.is_empty());
        for color in DEFAULT_PALETTE {
            assert_eq!(color[3], 255);
            assert_ne!(color, BACKGROUND_COLOR);
        }
    }

    #[test]
    fn test_max_progress_bars_value() {
        assert_eq!(MAX_INDIVIDUAL_PROGRESS_BARS, 5);
    }

    // Tests filesystem safety of output name parts
    // Verified by adding special character
    #[test]
    fn test_output_name_parts_are_filesystem_safe() {
        assert!(OUTPUT_SUFFIX.starts_with('_'));
        for ch in OUTPUT_PREFIX.chars().chain(OUTPUT_SUFFIX.chars()) {
            assert!(
                ch.is_alphanumeric() || ch == '_' || ch == '-',
                "Output name contains invalid character: {ch}"
            );
        }
    }
}

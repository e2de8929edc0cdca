//! Tests for error formatting and source chaining

#[cfg(test)]
mod tests {
    use fillwalk::io::error::{FillError, invalid_parameter};
    use std::error::Error;
    use std::path::PathBuf;

    #[test]
    fn test_invalid_parameter_message() {
        let err = invalid_parameter("resolution", &5000, &"extent must not exceed 4096");

        assert_eq!(
            err.to_string(),
            "Invalid parameter 'resolution' = '5000': extent must not exceed 4096"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn test_empty_domain_message() {
        let err = FillError::EmptyDomain {
            resolution: "10x10".to_string(),
        };

        assert!(err.to_string().contains("10x10"));
        assert!(err.source().is_none());
    }

    // Tests I/O errors keep their source for chaining
    // Verified by returning None from source for FileSystem
    #[test]
    fn test_io_error_conversion_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = FillError::from(io);

        match &err {
            FillError::FileSystem { path, operation, .. } => {
                assert_eq!(path, &PathBuf::from("<unknown>"));
                assert_eq!(*operation, "unknown");
            }
            _ => unreachable!("Expected FileSystem error type"),
        }
        assert!(err.source().is_some());
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_image_errors_display_path() {
        let source = image::ImageError::IoError(std::io::Error::other("missing"));
        let err = FillError::ImageLoad {
            path: PathBuf::from("mask.png"),
            source,
        };

        assert!(err.to_string().contains("mask.png"));
        assert!(err.source().is_some());
    }
}

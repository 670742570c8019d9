use crate::color::Rgba;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ColorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Component '{param}' out of range: {reason}")]
    ComponentOutOfRange { param: String, reason: String },

    #[error("Invalid {encoding} color: expected {expected} components, found {found}")]
    ComponentCount {
        encoding: &'static str,
        expected: String,
        found: usize,
    },

    #[error("Invalid color name '{0}': name is reserved")]
    ReservedName(String),

    #[error("Color '{name}' was not added with value {rejected} because it already exists with value {existing}")]
    NameConflict {
        name: String,
        rejected: Rgba,
        existing: Rgba,
    },

    #[error("Unknown color name: {0}")]
    UnknownName(String),

    #[error("Unknown palette: {0}")]
    UnknownPalette(String),

    #[error("Color '{name}' is not part of palette '{palette}'")]
    NotInPalette { name: String, palette: String },

    #[error("Invalid palette name: '{0}'")]
    InvalidPaletteName(String),

    #[error("Invalid record for '{name}' in palette '{palette}': {reason}")]
    InvalidRecord {
        palette: String,
        name: String,
        #[source]
        reason: RecordError,
    },

    #[error("Gradient requires at least one color")]
    EmptyGradient,
}

/// Why a stored color tuple could not be decoded.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("expected 3 or 4 values, found {found}")]
    Length { found: usize },

    #[error("{value} is outside 0..=255")]
    Channel { value: f64 },
}

impl ColorError {
    pub(crate) fn out_of_range(param: &str, value: f64, norm: f64) -> Self {
        let reason = if value < 0.0 {
            format!("{value} is negative")
        } else {
            format!("{value} exceeds its normalization base {norm}")
        };
        ColorError::ComponentOutOfRange {
            param: param.to_string(),
            reason,
        }
    }
}

pub type Result<T> = std::result::Result<T, ColorError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error as IoError, ErrorKind};

    #[test]
    fn test_out_of_range_display() {
        let error = ColorError::out_of_range("r", 300.0, 255.0);
        assert_eq!(
            error.to_string(),
            "Component 'r' out of range: 300 exceeds its normalization base 255"
        );

        let error = ColorError::out_of_range("h", -1.0, 360.0);
        assert!(error.to_string().contains("negative"));
    }

    #[test]
    fn test_name_conflict_shows_both_values() {
        let error = ColorError::NameConflict {
            name: "red".to_string(),
            rejected: Rgba::new(0.0, 1.0, 0.0, 1.0),
            existing: Rgba::new(1.0, 0.0, 0.0, 1.0),
        };
        let msg = error.to_string();
        assert!(msg.contains("red"));
        assert!(msg.contains("(0, 1, 0, 1)"));
        assert!(msg.contains("(1, 0, 0, 1)"));
    }

    #[test]
    fn test_error_from_io_error() {
        let io_error = IoError::new(ErrorKind::NotFound, "file not found");
        let error = ColorError::from(io_error);

        match error {
            ColorError::Io(ref err) => assert_eq!(err.kind(), ErrorKind::NotFound),
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_error_from_json_error() {
        let json_error = serde_json::from_str::<Vec<f64>>("[1, 2").unwrap_err();
        let error = ColorError::from(json_error);
        assert!(matches!(error, ColorError::Json(_)));
        assert!(error.to_string().starts_with("JSON error"));
    }

    #[test]
    fn test_invalid_record_keeps_source() {
        use std::error::Error as _;

        let error = ColorError::InvalidRecord {
            palette: "basic".to_string(),
            name: "red".to_string(),
            reason: RecordError::Channel { value: 510.0 },
        };
        assert_eq!(
            error.to_string(),
            "Invalid record for 'red' in palette 'basic': 510 is outside 0..=255"
        );
        assert_eq!(
            error.source().map(|e| e.to_string()),
            Some("510 is outside 0..=255".to_string())
        );
    }

    #[test]
    fn test_all_variants_display() {
        let errors = vec![
            ColorError::ComponentCount {
                encoding: "sRGB",
                expected: "3 or 4".to_string(),
                found: 2,
            },
            ColorError::ReservedName("palettes".to_string()),
            ColorError::UnknownName("nope".to_string()),
            ColorError::UnknownPalette("nope".to_string()),
            ColorError::NotInPalette {
                name: "red".to_string(),
                palette: "basic".to_string(),
            },
            ColorError::InvalidPaletteName("../x".to_string()),
            ColorError::InvalidRecord {
                palette: "basic".to_string(),
                name: "red".to_string(),
                reason: RecordError::Length { found: 2 },
            },
            ColorError::EmptyGradient,
        ];

        for error in errors {
            assert!(!error.to_string().is_empty());
        }
    }

    #[test]
    fn test_error_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ColorError>();
    }
}

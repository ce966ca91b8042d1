//! # Application Error Type
//!
//! Unified error type for the storefront app layer.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  catalogue file ── io::Error ─────────┐                                │
//! │  catalogue JSON ── serde_json::Error ─┤                                │
//! │  lookups        ── CoreError ─────────┼──► AppError ──► CLI exit code  │
//! │  raw quantities ── ValidationError ───┘                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Derivations and cart additions never produce errors; only loading data
//! and parsing user input can fail.

use std::path::PathBuf;

use storefront_core::{CoreError, ValidationError};
use thiserror::Error;

/// Errors surfaced by the storefront app.
#[derive(Debug, Error)]
pub enum AppError {
    /// Domain error from storefront-core.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The catalogue file could not be read.
    #[error("Failed to read catalogue {path}: {source}")]
    CatalogueRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalogue file is not valid catalogue JSON.
    #[error("Invalid catalogue JSON: {0}")]
    CatalogueFormat(#[from] serde_json::Error),

    /// Writing rendered output failed.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    /// Configuration is unusable.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Core(CoreError::Validation(err))
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_is_transparent() {
        let err: AppError = CoreError::ProductNotFound(9).into();
        assert_eq!(err.to_string(), "Product not found: 9");
    }

    #[test]
    fn test_validation_error_wraps_through_core() {
        let err: AppError = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        }
        .into();
        assert!(matches!(err, AppError::Core(CoreError::Validation(_))));
        assert_eq!(
            err.to_string(),
            "Validation error: quantity must be positive"
        );
    }

    #[test]
    fn test_read_error_names_path() {
        let err = AppError::CatalogueRead {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to read catalogue missing.json: no such file"
        );
    }
}

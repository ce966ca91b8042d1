//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Catalogue record validation failures           │
//! │                                                                         │
//! │  app errors (apps/storefront)                                          │
//! │  └── AppError         - Config, I/O, JSON, wraps CoreError             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → CLI / frontend         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The display derivations themselves never fail; these errors exist for the
//! data layer that decides whether a record is fit to be shown at all.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product cannot be found in the catalogue.
    #[error("Product not found: {0}")]
    ProductNotFound(u64),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by [`crate::validation`] when a catalogue record falls outside the
/// domain the derivations are defined for.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// Numeric value must stay strictly below a bound.
    #[error("{field} must be below {max}")]
    TooLarge { field: String, max: f64 },

    /// Invalid format (e.g., NaN where a number is expected).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

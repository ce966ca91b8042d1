//! # Validation Module
//!
//! Checks a catalogue record against the domain the display derivations are
//! defined for.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Catalogue loading (apps/storefront)                          │
//! │  ├── JSON shape (serde deserialization)                                │
//! │  └── THIS MODULE: value ranges, logged and skipped on failure          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Derivations (pricing, rating, stock)                         │
//! │  └── Total over any input; out-of-domain values degrade to a safe      │
//! │      display and emit a warning                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::validation::{validate_discount_percentage, validate_quantity};
//!
//! assert!(validate_discount_percentage(25.0).is_ok());
//! assert!(validate_discount_percentage(100.0).is_err());
//! assert_eq!(validate_quantity(3).unwrap().get(), 3);
//! ```

use std::num::NonZeroU32;

use crate::error::ValidationError;
use crate::pricing::MAX_DISCOUNT_PERCENTAGE;
use crate::rating::MAX_STARS;
use crate::types::Product;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

fn require_finite(field: &str, value: f64) -> ValidationResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must be a finite number".to_string(),
        })
    }
}

/// Validates a current price.
///
/// ## Rules
/// - Must be finite
/// - Must not be negative (zero is a valid giveaway price)
pub fn validate_price(price: f64) -> ValidationResult<()> {
    require_finite("price", price)?;

    if price < 0.0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0.0,
            max: f64::MAX,
        });
    }

    Ok(())
}

/// Validates a discount percentage.
///
/// ## Rules
/// - Must be finite
/// - Must be at least 0
/// - Must be below 100 (a 100% discount has no original price)
pub fn validate_discount_percentage(pct: f64) -> ValidationResult<()> {
    require_finite("discountPercentage", pct)?;

    if pct < 0.0 {
        return Err(ValidationError::OutOfRange {
            field: "discountPercentage".to_string(),
            min: 0.0,
            max: MAX_DISCOUNT_PERCENTAGE,
        });
    }

    if pct >= MAX_DISCOUNT_PERCENTAGE {
        return Err(ValidationError::TooLarge {
            field: "discountPercentage".to_string(),
            max: MAX_DISCOUNT_PERCENTAGE,
        });
    }

    Ok(())
}

/// Validates a review score (0 to 5 inclusive).
pub fn validate_rating(rating: f64) -> ValidationResult<()> {
    require_finite("rating", rating)?;

    if !(0.0..=MAX_STARS as f64).contains(&rating) {
        return Err(ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: 0.0,
            max: MAX_STARS as f64,
        });
    }

    Ok(())
}

/// Validates a stock count (zero allowed, negative rejected).
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::OutOfRange {
            field: "stock".to_string(),
            min: 0.0,
            max: i64::MAX as f64,
        });
    }
    Ok(())
}

/// Validates a raw cart quantity and converts it to the type the cart
/// accepts.
///
/// ## Example
/// ```rust
/// use storefront_core::validation::validate_quantity;
///
/// assert!(validate_quantity(0).is_err());
/// assert!(validate_quantity(-2).is_err());
/// assert_eq!(validate_quantity(1).unwrap().get(), 1);
/// ```
pub fn validate_quantity(quantity: i64) -> ValidationResult<NonZeroU32> {
    if quantity <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    u32::try_from(quantity)
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or_else(|| ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1.0,
            max: u32::MAX as f64,
        })
}

// =============================================================================
// Record Validator
// =============================================================================

/// Validates every computed-upon field of a product.
///
/// Descriptive fields are not checked beyond the title; a missing brand is
/// not an error.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    if product.title.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        });
    }

    validate_price(product.price)?;
    validate_discount_percentage(product.discount_percentage)?;
    validate_rating(product.rating)?;
    validate_stock(product.stock)?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

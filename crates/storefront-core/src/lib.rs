//! # storefront-core: Pure Display Derivations for the Storefront
//!
//! Every value a product card or detail page shows that is *computed* rather
//! than copied lives here, as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/storefront                              │   │
//! │  │   ProductCard ── ProductDetailView ── CartStore ── Router      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ storefront-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌──────────┐      │   │
//! │  │   │  types   │  │ pricing  │  │  rating  │  │  stock   │      │   │
//! │  │   │ Product  │  │ PriceDis │  │ RatingDi │  │ StockSta │      │   │
//! │  │   └──────────┘  └──────────┘  └──────────┘  └──────────┘      │   │
//! │  │          money (integer cents) · validation · error            │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO ROUTING • NO FETCHING • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - The catalogue `Product` record
//! - [`money`] - Cents-based money with fixed `$0.00` formatting
//! - [`pricing`] - Current price, original price, savings, discount badge
//! - [`rating`] - Star count and one-decimal label
//! - [`stock`] - Low-stock / in-stock classification
//! - [`validation`] - Range checks for catalogue records
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::Product;
//!
//! let product: Product = serde_json::from_str(
//!     r#"{"id": 1, "title": "Desk Lamp", "price": 80, "discountPercentage": 20,
//!         "rating": 4.5, "stock": 9}"#,
//! ).unwrap();
//!
//! let price = product.price_display();
//! assert_eq!(price.display_price(), "$80.00");
//! assert_eq!(price.badge_label().as_deref(), Some("20% OFF"));
//!
//! assert_eq!(product.rating_display().label(), "(4.5)");
//! assert_eq!(product.stock_status().label(), "Only 9 left!");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pricing;
pub mod rating;
pub mod stock;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{Discount, PriceDisplay};
pub use rating::RatingDisplay;
pub use stock::StockStatus;
pub use types::Product;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Shown in place of an optional descriptive field the product lacks.
pub const MISSING_FIELD_PLACEHOLDER: &str = "N/A";

//! # Domain Types
//!
//! The catalogue record every storefront view is derived from.
//!
//! ## Wire Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Catalogue JSON (camelCase)            Product (Rust)                   │
//! │  ──────────────────────────            ──────────────                   │
//! │  "id": 1                          ──►  id: u64                          │
//! │  "title": "Essence Mascara"       ──►  title: String                    │
//! │  "price": 9.99                    ──►  price: f64   (current price)     │
//! │  "discountPercentage": 7.17       ──►  discount_percentage: f64         │
//! │  "rating": 4.94                   ──►  rating: f64                      │
//! │  "stock": 5                       ──►  stock: i64                       │
//! │  "brand": "Essence" | absent      ──►  brand: Option<String>            │
//! │  "thumbnail", "images": [...]     ──►  thumbnail, images                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Fields the catalogue may carry but no view uses are ignored on
//! deserialization.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::pricing::PriceDisplay;
use crate::rating::RatingDisplay;
use crate::stock::StockStatus;

// =============================================================================
// Product
// =============================================================================

/// A product as served by the catalogue API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique identifier.
    pub id: u64,

    /// Display name.
    pub title: String,

    /// Current (already discounted) price.
    pub price: f64,

    /// Discount in percent; 0 means no discount.
    #[serde(default)]
    pub discount_percentage: f64,

    /// Average review score, 0 to 5.
    #[serde(default)]
    pub rating: f64,

    /// Units on hand.
    #[serde(default)]
    pub stock: i64,

    /// Brand, absent for unbranded goods.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub category: String,

    /// Primary image, used on cards and as the gallery fallback.
    #[serde(default)]
    pub thumbnail: String,

    /// Gallery images for the detail page. May be empty.
    #[serde(default)]
    pub images: Vec<String>,
}

impl Product {
    /// Derives the price block for this product.
    #[inline]
    pub fn price_display(&self) -> PriceDisplay {
        PriceDisplay::derive(self.price, self.discount_percentage)
    }

    /// Derives the star row and numeric label.
    #[inline]
    pub fn rating_display(&self) -> RatingDisplay {
        RatingDisplay::derive(self.rating)
    }

    /// Classifies the stock level.
    #[inline]
    pub fn stock_status(&self) -> StockStatus {
        StockStatus::classify(self.stock)
    }

    /// Returns the gallery, falling back to the thumbnail when the product
    /// has no gallery images.
    pub fn gallery(&self) -> Vec<String> {
        if self.images.is_empty() {
            vec![self.thumbnail.clone()]
        } else {
            self.images.clone()
        }
    }
}

// =============================================================================
// Test Fixtures
// =============================================================================

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn product(id: u64, price: f64, discount_percentage: f64) -> Product {
        Product {
            id,
            title: format!("Product {}", id),
            price,
            discount_percentage,
            rating: 4.5,
            stock: 25,
            brand: Some("Acme".to_string()),
            description: "A product".to_string(),
            category: "misc".to_string(),
            thumbnail: format!("https://cdn.example.com/{}/thumb.png", id),
            images: vec![],
        }
    }
}

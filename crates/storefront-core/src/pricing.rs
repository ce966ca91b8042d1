//! # Pricing Module
//!
//! Derives everything a view shows about a product's price.
//!
//! ## Price Block
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  price = 80.00, discountPercentage = 20                                │
//! │                                                                         │
//! │   ┌──────────┐                                                          │
//! │   │ 20% OFF  │  ◄── badge_label: round-half-up(pct) + "% OFF"          │
//! │   └──────────┘                                                          │
//! │   $80.00        ◄── display_price: the current price                   │
//! │   $100.00       ◄── original_price: price / (1 - pct/100)              │
//! │   Save $20.00   ◄── savings_label: original - price (unrounded)        │
//! │                                                                         │
//! │  discountPercentage = 0  →  only "$80.00" is shown                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Out-of-Domain Discounts
//! A discount of 100% or more has no finite original price, and a negative
//! or NaN discount is meaningless. All of these derive as *not discounted*
//! and emit a warning; [`crate::validation::validate_discount_percentage`]
//! lets the data layer reject such records before they reach a view.

use serde::{Deserialize, Serialize};
use tracing::warn;
use ts_rs::TS;

use crate::money::Money;

/// Discounts at or above this percentage are treated as invalid.
pub const MAX_DISCOUNT_PERCENTAGE: f64 = 100.0;

// =============================================================================
// Discount
// =============================================================================

/// The strike-through half of a discounted price block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Discount {
    /// Whole-number percentage shown on the badge.
    pub badge_percent: i64,
    /// Price before the discount, rounded to cents.
    pub original_price: Money,
    /// Amount saved, rounded to cents from the unrounded original price.
    pub savings: Money,
}

impl Discount {
    /// Badge text, e.g. `"20% OFF"`.
    pub fn badge_label(&self) -> String {
        format!("{}% OFF", self.badge_percent)
    }

    /// Savings line, e.g. `"Save $20.00"`.
    pub fn savings_label(&self) -> String {
        format!("Save {}", self.savings)
    }
}

// =============================================================================
// Price Display
// =============================================================================

/// Derived price values for one product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PriceDisplay {
    /// The current price, rounded to cents.
    pub price: Money,
    /// Present only when the product is discounted.
    pub discount: Option<Discount>,
}

impl PriceDisplay {
    /// Derives the price block from the current price and its discount.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::pricing::PriceDisplay;
    ///
    /// let display = PriceDisplay::derive(75.50, 25.0);
    /// let discount = display.discount.unwrap();
    ///
    /// assert_eq!(display.display_price(), "$75.50");
    /// assert_eq!(discount.original_price.to_string(), "$100.67");
    /// assert_eq!(discount.savings_label(), "Save $25.17");
    /// assert_eq!(discount.badge_label(), "25% OFF");
    /// ```
    pub fn derive(price: f64, discount_percentage: f64) -> Self {
        PriceDisplay {
            price: Money::from_decimal(price),
            discount: derive_discount(price, discount_percentage),
        }
    }

    /// Whether a badge, original price and savings line are shown.
    #[inline]
    pub fn is_discounted(&self) -> bool {
        self.discount.is_some()
    }

    /// The current price as shown, e.g. `"$99.90"`.
    pub fn display_price(&self) -> String {
        self.price.to_string()
    }

    pub fn badge_label(&self) -> Option<String> {
        self.discount.as_ref().map(Discount::badge_label)
    }

    pub fn original_price_label(&self) -> Option<String> {
        self.discount.as_ref().map(|d| d.original_price.to_string())
    }

    pub fn savings_label(&self) -> Option<String> {
        self.discount.as_ref().map(Discount::savings_label)
    }
}

fn derive_discount(price: f64, discount_percentage: f64) -> Option<Discount> {
    if discount_percentage == 0.0 {
        return None;
    }

    if !discount_percentage.is_finite()
        || discount_percentage < 0.0
        || discount_percentage >= MAX_DISCOUNT_PERCENTAGE
    {
        warn!(
            discount_percentage,
            "Discount outside [0, 100), showing undiscounted price"
        );
        return None;
    }

    let original = price / (1.0 - discount_percentage / 100.0);
    let savings = original - price;

    Some(Discount {
        badge_percent: discount_percentage.round() as i64,
        original_price: Money::from_decimal(original),
        savings: Money::from_decimal(savings),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_discount_shows_price_only() {
        let display = PriceDisplay::derive(80.0, 0.0);
        assert!(!display.is_discounted());
        assert_eq!(display.display_price(), "$80.00");
        assert!(display.badge_label().is_none());
        assert!(display.original_price_label().is_none());
        assert!(display.savings_label().is_none());
    }

    #[test]
    fn test_twenty_percent_off_eighty() {
        let display = PriceDisplay::derive(80.0, 20.0);
        assert!(display.is_discounted());
        assert_eq!(display.display_price(), "$80.00");
        assert_eq!(display.original_price_label().as_deref(), Some("$100.00"));
        assert_eq!(display.savings_label().as_deref(), Some("Save $20.00"));
        assert_eq!(display.badge_label().as_deref(), Some("20% OFF"));
    }

    #[test]
    fn test_savings_rounded_from_unrounded_original() {
        let display = PriceDisplay::derive(75.50, 25.0);
        assert_eq!(display.original_price_label().as_deref(), Some("$100.67"));
        assert_eq!(display.savings_label().as_deref(), Some("Save $25.17"));
    }

    #[test]
    fn test_savings_not_derived_from_rounded_strings() {
        // original = 10.0 / 0.97 = 10.30927..  → $10.31
        // savings  = 0.30927..                → $0.31
        let display = PriceDisplay::derive(10.0, 3.0);
        let discount = display.discount.unwrap();
        assert_eq!(discount.original_price.to_string(), "$10.31");
        assert_eq!(discount.savings.to_string(), "$0.31");

        // original = 1.004 / 0.5 = 2.008 → $2.01, price → $1.00
        // savings  = 1.004               → $1.00, not $1.01
        let display = PriceDisplay::derive(1.004, 50.0);
        let discount = display.discount.unwrap();
        assert_eq!(display.display_price(), "$1.00");
        assert_eq!(discount.original_price.to_string(), "$2.01");
        assert_eq!(discount.savings.to_string(), "$1.00");
    }

    #[test]
    fn test_badge_rounds_half_up() {
        assert_eq!(
            PriceDisplay::derive(10.0, 12.5).badge_label().as_deref(),
            Some("13% OFF")
        );
        assert_eq!(
            PriceDisplay::derive(10.0, 12.49).badge_label().as_deref(),
            Some("12% OFF")
        );
        assert_eq!(
            PriceDisplay::derive(10.0, 0.4).badge_label().as_deref(),
            Some("0% OFF")
        );
    }

    #[test]
    fn test_original_price_round_trips_to_current_price() {
        for (price, pct) in [(80.0, 20.0), (75.5, 25.0), (19.99, 12.96), (1234.5, 3.3)] {
            let display = PriceDisplay::derive(price, pct);
            let original = display.discount.unwrap().original_price.cents() as f64 / 100.0;
            let back = original * (1.0 - pct / 100.0);
            assert!((back - price).abs() < 0.01, "{} at {}%", price, pct);
        }
    }

    #[test]
    fn test_displayed_savings_match_displayed_difference() {
        let display = PriceDisplay::derive(80.0, 20.0);
        let discount = display.discount.unwrap();
        assert_eq!(discount.original_price - display.price, discount.savings);
    }

    #[test]
    fn test_out_of_domain_discounts_are_not_discounted() {
        for pct in [100.0, 150.0, -5.0, f64::NAN, f64::INFINITY] {
            let display = PriceDisplay::derive(25.0, pct);
            assert!(!display.is_discounted(), "{}", pct);
            assert_eq!(display.display_price(), "$25.00");
        }
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(PriceDisplay::derive(80.0, 20.0)).unwrap();
        assert_eq!(value["price"], 8000);
        assert_eq!(value["discount"]["originalPrice"], 10000);
        assert_eq!(value["discount"]["badgePercent"], 20);
    }
}

//! # Stock Module
//!
//! Classifies a stock count into the label shown under the price.
//!
//! ```text
//!   stock < 10   ──►  LowStock  "Only {stock} left!"
//!   stock >= 10  ──►  InStock   "In Stock"
//! ```
//!
//! There is no separate out-of-stock state: zero renders as
//! `"Only 0 left!"`. A negative count is clamped to zero with a warning.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;
use ts_rs::TS;

/// Counts below this are shown as low stock.
pub const LOW_STOCK_THRESHOLD: u64 = 10;

/// Stock level as shown to shoppers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "state", rename_all = "snake_case")]
#[ts(export)]
pub enum StockStatus {
    /// Fewer than [`LOW_STOCK_THRESHOLD`] units left.
    LowStock { remaining: u64 },
    /// Plenty on hand; the exact count is not shown.
    InStock,
}

impl StockStatus {
    /// Classifies a raw stock count.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::stock::StockStatus;
    ///
    /// assert_eq!(StockStatus::classify(9).label(), "Only 9 left!");
    /// assert_eq!(StockStatus::classify(10).label(), "In Stock");
    /// ```
    pub fn classify(stock: i64) -> Self {
        let remaining = u64::try_from(stock).unwrap_or_else(|_| {
            warn!(stock, "Negative stock count, showing as zero");
            0
        });

        if remaining < LOW_STOCK_THRESHOLD {
            StockStatus::LowStock { remaining }
        } else {
            StockStatus::InStock
        }
    }

    #[inline]
    pub fn is_low(&self) -> bool {
        matches!(self, StockStatus::LowStock { .. })
    }

    /// The label shown to shoppers.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockStatus::LowStock { remaining } => write!(f, "Only {} left!", remaining),
            StockStatus::InStock => write!(f, "In Stock"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundary() {
        assert_eq!(
            StockStatus::classify(9),
            StockStatus::LowStock { remaining: 9 }
        );
        assert_eq!(StockStatus::classify(10), StockStatus::InStock);
    }

    #[test]
    fn test_labels() {
        assert_eq!(StockStatus::classify(0).label(), "Only 0 left!");
        assert_eq!(StockStatus::classify(3).label(), "Only 3 left!");
        assert_eq!(StockStatus::classify(10).label(), "In Stock");
        assert_eq!(StockStatus::classify(1_000_000).label(), "In Stock");
    }

    #[test]
    fn test_every_low_count_shows_remaining() {
        for stock in 0..10 {
            let status = StockStatus::classify(stock);
            assert!(status.is_low());
            assert_eq!(status.label(), format!("Only {} left!", stock));
        }
    }

    #[test]
    fn test_negative_stock_clamps_to_zero() {
        assert_eq!(
            StockStatus::classify(-4),
            StockStatus::LowStock { remaining: 0 }
        );
        assert_eq!(StockStatus::classify(i64::MIN).label(), "Only 0 left!");
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(StockStatus::classify(2)).unwrap();
        assert_eq!(value["state"], "low_stock");
        assert_eq!(value["remaining"], 2);
    }
}

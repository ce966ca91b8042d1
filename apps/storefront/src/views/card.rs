//! # Product Card
//!
//! The summary tile shown on the product list.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ [20% OFF]                    │
//! │ Desk Lamp                    │
//! │ Brand: Lumen                 │
//! │ ★★★★★ (4.5)                  │
//! │ $80.00  was $100.00  Save .. │
//! │ Only 9 left!                 │
//! │ → /product/1                 │
//! └──────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;

use super::ProductSummary;
use crate::routes::Router;
use crate::state::CartStore;
use storefront_core::Product;

/// List-page tile for one product.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub summary: ProductSummary,
    /// Link target of the card's title and image.
    pub detail_path: String,
}

impl ProductCard {
    pub fn new(product: &Product, router: &impl Router) -> Self {
        ProductCard {
            summary: ProductSummary::new(product),
            detail_path: router.product_detail_path(product.id),
        }
    }

    /// "Add to Cart" button.
    pub fn add_to_cart(&self, cart: &CartStore) {
        debug!(product_id = self.summary.product.id, "Card add to cart");
        cart.add_item(&self.summary.product);
    }

    /// Plain-text rendering of the card.
    pub fn render(&self) -> String {
        let summary = &self.summary;
        let mut lines = Vec::with_capacity(7);

        if let Some(badge) = summary.price.badge_label() {
            lines.push(format!("[{}]", badge));
        }
        lines.push(summary.product.title.clone());
        lines.push(format!("Brand: {}", summary.brand_label()));
        lines.push(summary.rating_line());
        lines.push(summary.price_line());
        lines.push(summary.stock.label());
        lines.push(format!("→ {}", self.detail_path));

        lines.join("\n")
    }
}

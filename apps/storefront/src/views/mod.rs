//! # Views
//!
//! Presentation models for the product list and the product detail page.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         View Composition                                │
//! │                                                                         │
//! │   Product ──► ProductSummary ──┬──► ProductCard       (list page)      │
//! │               price, rating,   │      + detail_path                    │
//! │               stock, brand     │                                        │
//! │                                └──► ProductDetailView (detail page)    │
//! │                                       + description, gallery,          │
//! │                                         back_path                       │
//! │                                                                         │
//! │   "Add to Cart" on either view ──► CartStore::add_item                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Views never hold the cart; the action methods take the scope's
//! [`CartStore`](crate::state::CartStore) handle.

mod card;
mod detail;

pub use card::ProductCard;
pub use detail::{ProductDetail, ProductDetailView};

use serde::Serialize;
use storefront_core::{PriceDisplay, Product, RatingDisplay, StockStatus, MISSING_FIELD_PLACEHOLDER};

/// Values both views derive from a product.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub product: Product,
    pub price: PriceDisplay,
    pub rating: RatingDisplay,
    pub stock: StockStatus,
}

impl ProductSummary {
    pub fn new(product: &Product) -> Self {
        ProductSummary {
            product: product.clone(),
            price: product.price_display(),
            rating: product.rating_display(),
            stock: product.stock_status(),
        }
    }

    /// Brand, or the placeholder when the product has none.
    pub fn brand_label(&self) -> &str {
        self.product
            .brand
            .as_deref()
            .unwrap_or(MISSING_FIELD_PLACEHOLDER)
    }

    /// `"★★★★ (4.2)"`
    pub fn rating_line(&self) -> String {
        let stars = self.rating.star_glyphs();
        if stars.is_empty() {
            self.rating.label()
        } else {
            format!("{} {}", stars, self.rating.label())
        }
    }

    /// Current price, then original price and savings when discounted.
    pub fn price_line(&self) -> String {
        match &self.price.discount {
            Some(discount) => format!(
                "{}  was {}  {}",
                self.price.display_price(),
                discount.original_price,
                discount.savings_label()
            ),
            None => self.price.display_price(),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use storefront_core::Product;

    pub fn product(id: u64) -> Product {
        Product {
            id,
            title: "Desk Lamp".to_string(),
            price: 80.0,
            discount_percentage: 20.0,
            rating: 4.5,
            stock: 9,
            brand: Some("Lumen".to_string()),
            description: "Adjustable LED desk lamp".to_string(),
            category: "home-decoration".to_string(),
            thumbnail: "https://cdn.example.com/lamp/thumb.png".to_string(),
            images: vec![
                "https://cdn.example.com/lamp/1.png".to_string(),
                "https://cdn.example.com/lamp/2.png".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_lines() {
        let summary = ProductSummary::new(&fixtures::product(1));
        assert_eq!(summary.brand_label(), "Lumen");
        assert_eq!(summary.rating_line(), "★★★★★ (4.5)");
        assert_eq!(summary.price_line(), "$80.00  was $100.00  Save $20.00");
    }

    #[test]
    fn test_missing_brand_uses_placeholder() {
        let mut product = fixtures::product(1);
        product.brand = None;
        assert_eq!(ProductSummary::new(&product).brand_label(), "N/A");
    }

    #[test]
    fn test_undiscounted_price_shown_once() {
        let mut product = fixtures::product(1);
        product.discount_percentage = 0.0;

        let line = ProductSummary::new(&product).price_line();
        assert_eq!(line, "$80.00");
        assert_eq!(line.matches("$").count(), 1);
    }

    #[test]
    fn test_zero_rating_line_has_no_stars() {
        let mut product = fixtures::product(1);
        product.rating = 0.0;
        assert_eq!(ProductSummary::new(&product).rating_line(), "(0.0)");
    }
}

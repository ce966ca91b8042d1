//! # Product Detail View
//!
//! The full product page, driven by the fetch state of one product.
//!
//! ```text
//!   FetchState::Loading    ──►  ProductDetailView::Loading
//!   FetchState::Failed(e)  ──►  ProductDetailView::Error { message: e }
//!   FetchState::Ready(p)   ──►  ProductDetailView::Ready(ProductDetail)
//! ```
//!
//! Every state carries the "back to list" link.

use serde::Serialize;
use storefront_core::Product;
use tracing::debug;

use super::ProductSummary;
use crate::catalogue::{FetchState, ProductSource};
use crate::routes::Router;
use crate::state::CartStore;

/// A loaded product page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    pub summary: ProductSummary,
    /// Gallery images; the thumbnail alone when the product has none.
    pub gallery: Vec<String>,
}

/// The detail page in each fetch state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ProductDetailView {
    Loading { back_path: String },
    Error { message: String, back_path: String },
    Ready {
        detail: Box<ProductDetail>,
        back_path: String,
    },
}

impl ProductDetailView {
    /// Builds the view for a fetch result.
    pub fn from_fetch(state: FetchState<Product>, router: &impl Router) -> Self {
        let back_path = router.home_path();

        match state {
            FetchState::Loading => ProductDetailView::Loading { back_path },
            FetchState::Failed(message) => ProductDetailView::Error { message, back_path },
            FetchState::Ready(product) => ProductDetailView::Ready {
                detail: Box::new(ProductDetail {
                    gallery: product.gallery(),
                    summary: ProductSummary::new(&product),
                }),
                back_path,
            },
        }
    }

    /// Fetches a product from `source` and builds its view.
    pub fn load(source: &impl ProductSource, product_id: u64, router: &impl Router) -> Self {
        debug!(product_id, "Loading product detail");
        Self::from_fetch(source.fetch_product(product_id), router)
    }

    pub fn back_path(&self) -> &str {
        match self {
            ProductDetailView::Loading { back_path }
            | ProductDetailView::Error { back_path, .. }
            | ProductDetailView::Ready { back_path, .. } => back_path,
        }
    }

    pub fn detail(&self) -> Option<&ProductDetail> {
        match self {
            ProductDetailView::Ready { detail, .. } => Some(detail.as_ref()),
            _ => None,
        }
    }

    /// "Add to Cart" button. Returns `false` when there is no loaded
    /// product to add.
    pub fn add_to_cart(&self, cart: &CartStore) -> bool {
        match self.detail() {
            Some(detail) => {
                debug!(product_id = detail.summary.product.id, "Detail add to cart");
                cart.add_item(&detail.summary.product);
                true
            }
            None => false,
        }
    }

    /// Plain-text rendering of the page.
    pub fn render(&self) -> String {
        let mut lines = vec![format!("← Back to products ({})", self.back_path())];

        match self {
            ProductDetailView::Loading { .. } => lines.push("Loading...".to_string()),
            ProductDetailView::Error { message, .. } => {
                lines.push(format!("Error: {}", message));
            }
            ProductDetailView::Ready { detail, .. } => {
                let summary = &detail.summary;
                let product = &summary.product;

                lines.push(product.title.clone());
                if let Some(badge) = summary.price.badge_label() {
                    lines.push(format!("[{}]", badge));
                }
                lines.push(format!("Brand: {}", summary.brand_label()));
                lines.push(format!("Category: {}", product.category));
                lines.push(summary.rating_line());
                lines.push(summary.price_line());
                lines.push(summary.stock.label());
                if !product.description.is_empty() {
                    lines.push(String::new());
                    lines.push(product.description.clone());
                }
                lines.push(String::new());
                lines.push("Images:".to_string());
                lines.extend(detail.gallery.iter().map(|url| format!("  {}", url)));
            }
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::Catalogue;
    use crate::routes::StorefrontRoutes;
    use crate::views::fixtures;

    #[test]
    fn test_ready_view_derives_values() {
        let view =
            ProductDetailView::from_fetch(FetchState::Ready(fixtures::product(1)), &StorefrontRoutes);

        let detail = view.detail().unwrap();
        assert_eq!(detail.summary.price.display_price(), "$80.00");
        assert_eq!(detail.summary.stock.label(), "Only 9 left!");
        assert_eq!(detail.gallery.len(), 2);
        assert_eq!(view.back_path(), "/");
    }

    #[test]
    fn test_empty_gallery_falls_back_to_thumbnail() {
        let mut product = fixtures::product(1);
        product.images.clear();

        let view = ProductDetailView::from_fetch(FetchState::Ready(product), &StorefrontRoutes);
        assert_eq!(
            view.detail().unwrap().gallery,
            vec!["https://cdn.example.com/lamp/thumb.png".to_string()]
        );
    }

    #[test]
    fn test_loading_and_error_states() {
        let loading = ProductDetailView::from_fetch(FetchState::Loading, &StorefrontRoutes);
        assert_eq!(loading.render(), "← Back to products (/)\nLoading...");
        assert!(loading.detail().is_none());

        let error = ProductDetailView::from_fetch(
            FetchState::Failed("Product not found: 4".to_string()),
            &StorefrontRoutes,
        );
        assert_eq!(
            error.render(),
            "← Back to products (/)\nError: Product not found: 4"
        );
    }

    #[test]
    fn test_render_ready() {
        let mut product = fixtures::product(1);
        product.brand = None;
        product.discount_percentage = 0.0;
        product.stock = 12;

        let rendered =
            ProductDetailView::from_fetch(FetchState::Ready(product), &StorefrontRoutes).render();

        assert!(rendered.starts_with("← Back to products (/)\nDesk Lamp\n"));
        assert!(rendered.contains("Brand: N/A"));
        assert!(rendered.contains("\n$80.00\n"));
        assert!(rendered.contains("In Stock"));
        assert!(rendered.contains("  https://cdn.example.com/lamp/2.png"));
        assert!(!rendered.contains("OFF"));
    }

    #[test]
    fn test_add_to_cart_only_when_ready() {
        let cart = CartStore::new();

        let loading = ProductDetailView::from_fetch(FetchState::Loading, &StorefrontRoutes);
        assert!(!loading.add_to_cart(&cart));
        assert!(cart.get_items().is_empty());

        let ready =
            ProductDetailView::from_fetch(FetchState::Ready(fixtures::product(8)), &StorefrontRoutes);
        assert!(ready.add_to_cart(&cart));
        assert_eq!(cart.get_items()[0].product_id(), 8);
    }

    #[test]
    fn test_load_from_source() {
        let catalogue = Catalogue::new(vec![fixtures::product(5)]);

        let found = ProductDetailView::load(&catalogue, 5, &StorefrontRoutes);
        assert!(found.detail().is_some());

        let missing = ProductDetailView::load(&catalogue, 6, &StorefrontRoutes);
        assert!(matches!(missing, ProductDetailView::Error { .. }));
    }

    #[test]
    fn test_card_and_detail_share_one_cart() {
        let cart = CartStore::new();
        let product = fixtures::product(2);

        crate::views::ProductCard::new(&product, &StorefrontRoutes).add_to_cart(&cart);
        ProductDetailView::from_fetch(FetchState::Ready(product), &StorefrontRoutes)
            .add_to_cart(&cart);

        let items = cart.get_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 2);
    }
}

//! # Routes
//!
//! Path construction for links between the product list and detail pages.
//!
//! The views only need paths, not navigation; a host router implements
//! [`Router`] to match its own URL scheme.

/// Builds the paths the views link to.
pub trait Router {
    /// Path of a product's detail page.
    fn product_detail_path(&self, product_id: u64) -> String;

    /// Path of the product list ("back to list").
    fn home_path(&self) -> String {
        "/".to_string()
    }
}

/// The storefront's own URL scheme: `/` and `/product/{id}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StorefrontRoutes;

impl Router for StorefrontRoutes {
    fn product_detail_path(&self, product_id: u64) -> String {
        format!("/product/{}", product_id)
    }
}

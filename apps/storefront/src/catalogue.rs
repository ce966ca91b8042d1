//! # Catalogue
//!
//! The data-fetch seam the detail view reads products through, plus an
//! in-memory implementation loaded from a JSON file.
//!
//! ## Accepted File Shapes
//! ```json
//! { "products": [ { "id": 1, "title": "...", "price": 9.99 } ], "total": 1 }
//! ```
//! or a bare array of products. Records that fail
//! [`storefront_core::validation::validate_product`] are skipped with a
//! warning; a single bad record does not hide the rest of the catalogue.

use std::path::Path;

use serde::Deserialize;
use storefront_core::validation::validate_product;
use storefront_core::{CoreError, Product};
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult};

// =============================================================================
// Fetch State
// =============================================================================

/// What a data-fetch layer reports for one request.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    /// Request in flight.
    Loading,
    /// Request finished without a value.
    Failed(String),
    Ready(T),
}

impl<T> FetchState<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, FetchState::Ready(_))
    }
}

/// Supplies products by id.
pub trait ProductSource {
    fn fetch_product(&self, id: u64) -> FetchState<Product>;
}

// =============================================================================
// In-memory Catalogue
// =============================================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogueFile {
    Wrapped { products: Vec<Product> },
    Bare(Vec<Product>),
}

/// Products held in memory, in file order.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    products: Vec<Product>,
}

impl Catalogue {
    /// Builds a catalogue from already-loaded products, skipping invalid
    /// ones.
    pub fn new(products: Vec<Product>) -> Self {
        let total = products.len();
        let products: Vec<Product> = products
            .into_iter()
            .filter(|product| match validate_product(product) {
                Ok(()) => true,
                Err(err) => {
                    warn!(product_id = product.id, error = %err, "Skipping invalid product");
                    false
                }
            })
            .collect();

        debug!(total, kept = products.len(), "Catalogue built");
        Catalogue { products }
    }

    /// Parses catalogue JSON.
    pub fn from_json(json: &str) -> AppResult<Self> {
        let products = match serde_json::from_str::<CatalogueFile>(json)? {
            CatalogueFile::Wrapped { products } => products,
            CatalogueFile::Bare(products) => products,
        };
        Ok(Catalogue::new(products))
    }

    /// Reads and parses a catalogue file.
    pub fn load(path: &Path) -> AppResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| AppError::CatalogueRead {
            path: path.to_path_buf(),
            source,
        })?;

        let catalogue = Catalogue::from_json(&json)?;
        info!(path = %path.display(), products = catalogue.len(), "Catalogue loaded");
        Ok(catalogue)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Looks up a product by id.
    pub fn get(&self, id: u64) -> Result<&Product, CoreError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or(CoreError::ProductNotFound(id))
    }
}

impl ProductSource for Catalogue {
    fn fetch_product(&self, id: u64) -> FetchState<Product> {
        match self.get(id) {
            Ok(product) => FetchState::Ready(product.clone()),
            Err(err) => FetchState::Failed(err.to_string()),
        }
    }
}

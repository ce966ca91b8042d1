//! # State Module
//!
//! Session state for the storefront.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────┐        ┌──────────────────┐                      │
//! │  │   CartStore      │        │   ConfigState    │                      │
//! │  │                  │        │                  │                      │
//! │  │  Arc<Mutex<      │        │  store_name      │                      │
//! │  │    Cart>>        │        │  catalogue_path  │                      │
//! │  │  + broadcast     │        │                  │                      │
//! │  └──────────────────┘        └──────────────────┘                      │
//! │                                                                         │
//! │  • CartStore: one per scope, injected into views, add-only             │
//! │  • ConfigState: read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;

pub use cart::{Cart, CartEvent, CartLineItem, CartStore, CartTotals};
pub use config::{ConfigState, DEFAULT_CATALOGUE_PATH};

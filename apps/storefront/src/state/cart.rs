//! # Cart State
//!
//! The session cart shared by every view mounted in one scope.
//!
//! ## Scope & Sharing
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One CartStore per scope                              │
//! │                                                                         │
//! │  CartStore::new() ──► scope A                                          │
//! │      │ clone()            ProductCard ──┐                              │
//! │      ├──────────────────► ProductCard ──┼──► add_item() ──► same Cart  │
//! │      └──────────────────► DetailView ───┘                              │
//! │                                                                         │
//! │  CartStore::new() ──► scope B   (independent Cart, never interferes)   │
//! │                                                                         │
//! │  Views only hold the store handle. The only mutation is add_item;      │
//! │  reads go through get_items() / totals(), which hand out snapshots.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ordering
//! Each `add_item` runs under the cart mutex and publishes its `CartEvent`
//! before releasing it, so additions are applied and observed strictly in
//! the order they arrive and no reader ever sees half an update.

use std::num::NonZeroU32;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use storefront_core::{Money, Product};
use tokio::sync::broadcast;
use tracing::debug;
use ts_rs::TS;
use uuid::Uuid;

/// Buffered events per subscriber before it starts lagging.
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// One product in the cart with its accumulated quantity.
///
/// The product is a snapshot taken when it was first added, so the cart
/// keeps showing the price the shopper saw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLineItem {
    pub product: Product,

    /// Always at least 1.
    pub quantity: u32,

    /// When the product was first added.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLineItem {
    fn new(product: &Product, quantity: NonZeroU32) -> Self {
        CartLineItem {
            product: product.clone(),
            quantity: quantity.get(),
            added_at: Utc::now(),
        }
    }

    #[inline]
    pub fn product_id(&self) -> u64 {
        self.product.id
    }

    /// Current price of one unit, rounded to cents.
    pub fn unit_price(&self) -> Money {
        Money::from_decimal(self.product.price)
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }
}

/// The cart contents.
///
/// ## Invariants
/// - At most one line item per product id (re-adding increases quantity)
/// - Line items keep the order in which products were first added
/// - Every quantity is at least 1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<CartLineItem>,

    /// When the cart scope was created.
    created_at: DateTime<Utc>,
}

impl Cart {
    fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a product or increases its quantity, returning the line item's
    /// new quantity.
    fn add_item(&mut self, product: &Product, quantity: NonZeroU32) -> u32 {
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id() == product.id) {
            item.quantity = item.quantity.saturating_add(quantity.get());
            return item.quantity;
        }

        self.items.push(CartLineItem::new(product, quantity));
        quantity.get()
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Number of distinct products.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of all quantities (the number on a cart badge).
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    pub fn subtotal(&self) -> Money {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Cart totals summary for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: u64,
    pub subtotal: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            subtotal: cart.subtotal(),
        }
    }
}

/// Change notification published after every cart mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum CartEvent {
    ItemAdded {
        product_id: u64,
        /// Quantity added by this call.
        added: u32,
        /// The line item's quantity afterwards.
        quantity: u32,
    },
}

/// Handle to one scope's cart.
///
/// Cloning the handle shares the cart; [`CartStore::new`] starts a new,
/// independent one.
#[derive(Debug, Clone)]
pub struct CartStore {
    scope_id: Uuid,
    cart: Arc<Mutex<Cart>>,
    events: broadcast::Sender<CartEvent>,
}

impl CartStore {
    /// Creates an empty cart for a new scope.
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        let scope_id = Uuid::new_v4();
        debug!(%scope_id, "Cart scope created");

        CartStore {
            scope_id,
            cart: Arc::new(Mutex::new(Cart::new())),
            events,
        }
    }

    /// Identifies the scope this store belongs to.
    pub fn scope_id(&self) -> Uuid {
        self.scope_id
    }

    /// Adds one unit of a product.
    pub fn add_item(&self, product: &Product) {
        self.add_item_quantity(product, NonZeroU32::MIN);
    }

    /// Adds `quantity` units of a product, accumulating onto an existing
    /// line item for the same product id.
    pub fn add_item_quantity(&self, product: &Product, quantity: NonZeroU32) {
        let mut cart = self.lock();
        let line_quantity = cart.add_item(product, quantity);

        debug!(
            scope_id = %self.scope_id,
            product_id = product.id,
            added = quantity.get(),
            quantity = line_quantity,
            "Added to cart"
        );

        // No subscribers is fine; the send error only means nobody listens.
        let _ = self.events.send(CartEvent::ItemAdded {
            product_id: product.id,
            added: quantity.get(),
            quantity: line_quantity,
        });
    }

    /// Returns a snapshot of the line items in insertion order.
    pub fn get_items(&self) -> Vec<CartLineItem> {
        self.lock().items.clone()
    }

    pub fn totals(&self) -> CartTotals {
        CartTotals::from(&*self.lock())
    }

    /// Subscribes to change notifications from this point on.
    pub fn subscribe(&self) -> broadcast::Receiver<CartEvent> {
        self.events.subscribe()
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust
    /// use storefront::state::CartStore;
    ///
    /// let store = CartStore::new();
    /// assert!(store.with_cart(|cart| cart.is_empty()));
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        f(&self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, Cart> {
        // Cart updates cannot panic midway, so a poisoned cart is still
        // consistent.
        self.cart.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

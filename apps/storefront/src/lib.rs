//! # Storefront Library
//!
//! Session state, view models and the catalogue CLI built on
//! `storefront-core`.
//!
//! ## Module Organization
//! ```text
//! storefront/
//! ├── lib.rs          ◄─── You are here (tracing setup & run)
//! ├── cli.rs          ◄─── Command-line arguments
//! ├── catalogue.rs    ◄─── Data-fetch seam + JSON catalogue
//! ├── routes.rs       ◄─── Detail / home path construction
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── CartStore (scoped, add-only)
//! │   └── config.rs   ◄─── Configuration state
//! ├── views/
//! │   ├── mod.rs      ◄─── ProductSummary shared by both views
//! │   ├── card.rs     ◄─── ProductCard
//! │   └── detail.rs   ◄─── ProductDetailView
//! └── error.rs        ◄─── App error type
//! ```

pub mod catalogue;
pub mod cli;
pub mod error;
pub mod routes;
pub mod state;
pub mod views;

use std::io::Write;

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use catalogue::Catalogue;
use cli::{Cli, Command};
use error::AppResult;
use routes::StorefrontRoutes;
use state::{CartStore, ConfigState};
use storefront_core::validation::validate_quantity;
use views::{ProductCard, ProductDetailView};

/// Runs one CLI invocation, writing the rendered output to `out`.
///
/// ## Flow
/// ```text
/// ConfigState::from_env() ─► CLI overrides ─► Catalogue::load()
///        │
///        ├── list        ─► ProductCard per product
///        ├── show <id>   ─► ProductDetailView
///        └── add <id>..  ─► CartStore::add_item_quantity per id, then totals
/// ```
pub fn run(cli: Cli, out: &mut impl Write) -> AppResult<()> {
    let mut config = ConfigState::from_env()?;
    if let Some(path) = cli.catalogue {
        config.catalogue_path = path;
    }
    debug!(?config, "Configuration resolved");

    let catalogue = Catalogue::load(&config.catalogue_path)?;
    execute(&config, &catalogue, cli.command, out)
}

/// Executes a command against an already-loaded catalogue.
pub fn execute(
    config: &ConfigState,
    catalogue: &Catalogue,
    command: Command,
    out: &mut impl Write,
) -> AppResult<()> {
    let router = StorefrontRoutes;

    match command {
        Command::List => {
            writeln!(out, "{} ({} products)", config.store_name, catalogue.len())?;
            for product in catalogue.products() {
                let card = ProductCard::new(product, &router);
                writeln!(out, "\n{}", card.render())?;
            }
        }
        Command::Show { id } => {
            let view = ProductDetailView::load(catalogue, id, &router);
            writeln!(out, "{}", view.render())?;
        }
        Command::Add { ids, quantity } => {
            let quantity = validate_quantity(quantity)?;
            let cart = CartStore::new();

            for id in ids {
                let product = catalogue.get(id)?;
                cart.add_item_quantity(product, quantity);
            }

            for item in cart.get_items() {
                writeln!(
                    out,
                    "{} x{}  {}",
                    item.product.title,
                    item.quantity,
                    item.line_total()
                )?;
            }

            let totals = cart.totals();
            info!(
                scope_id = %cart.scope_id(),
                items = totals.item_count,
                quantity = totals.total_quantity,
                "Cart built"
            );
            writeln!(
                out,
                "{} items, subtotal {}",
                totals.total_quantity, totals.subtotal
            )?;
        }
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront=trace` - Show trace for storefront crates only
/// - Default: INFO level, written to stderr so rendered output stays clean
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

//! # Command-Line Interface
//!
//! Arguments for the `storefront` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Render storefront product views from a catalogue file
#[derive(Debug, Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Catalogue JSON file (overrides STOREFRONT_CATALOGUE)
    #[arg(long, global = true)]
    pub catalogue: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render a card for every product
    List,

    /// Render the detail page of one product
    Show {
        /// Product id
        id: u64,
    },

    /// Add products to a fresh cart and print its contents
    Add {
        /// Product ids, in the order they are added
        #[arg(required = true)]
        ids: Vec<u64>,

        /// Units added per id
        #[arg(long, short, default_value_t = 1, allow_negative_numbers = true)]
        quantity: i64,
    },
}

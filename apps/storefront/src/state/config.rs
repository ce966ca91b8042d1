//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (applied by the binary)
//! 2. Environment variables (`STOREFRONT_*`)
//! 3. Defaults (this file)
//!
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Default catalogue location, relative to the working directory.
pub const DEFAULT_CATALOGUE_PATH: &str = "catalogue.json";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Heading printed above the product list.
    pub store_name: String,

    /// Catalogue JSON file the products are read from.
    pub catalogue_path: PathBuf,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            store_name: "Storefront".to_string(),
            catalogue_path: PathBuf::from(DEFAULT_CATALOGUE_PATH),
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `STOREFRONT_STORE_NAME`: Override store name
    /// - `STOREFRONT_CATALOGUE`: Override catalogue path
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("STOREFRONT_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(path) = lookup("STOREFRONT_CATALOGUE") {
            if path.trim().is_empty() {
                return Err(AppError::Config(
                    "STOREFRONT_CATALOGUE must not be empty".to_string(),
                ));
            }
            config.catalogue_path = PathBuf::from(path);
        }

        Ok(config)
    }
}

//! Server configuration module

use clap::Parser;
use storefront_app::{context::AppSettings, storage::StorageError};

use crate::config::{
    db::DatabaseConfig, observability::LoggingConfig, server::ServerRuntimeConfig,
    storage::StorageArgs, store::StoreConfig,
};

pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod server;
pub(crate) mod storage;
pub(crate) mod store;

pub(crate) use observability::LogFormat;

/// Storefront JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "storefront-json", about = "Storefront JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Object storage settings.
    #[command(flatten)]
    pub storage: StorageArgs,

    /// Store-wide settings.
    #[command(flatten)]
    pub store: StoreConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }

    /// Settings used to assemble the application services.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage base URL is invalid.
    pub fn app_settings(&self) -> Result<AppSettings, StorageError> {
        Ok(AppSettings {
            database_url: self.database.database_url.clone(),
            currency_code: self.store.currency.clone(),
            storage: self.storage.to_storage_config()?,
            carts: self.store.cart_limits(),
        })
    }
}

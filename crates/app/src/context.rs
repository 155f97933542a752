//! App Context

use std::sync::Arc;

use rusty_money::{Findable, iso::Currency};
use thiserror::Error;
use tracing::info;

use crate::{
    auth::{AuthService, PgAuthService},
    database::{self, Db},
    domain::{
        carts::{CartsService, InMemoryCartsService, data::CartLimits},
        categories::{CategoriesService, PgCategoriesService},
        orders::{OrdersService, PgOrdersService},
        pages::{PagesService, PgPagesService},
        products::{PgProductsService, ProductsService},
    },
    storage::{HttpStorageService, StorageConfig, StorageService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),
}

/// Settings needed to assemble the application services.
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub database_url: String,
    pub currency_code: String,
    pub storage: Option<StorageConfig>,
    pub carts: CartLimits,
}

/// Every service the storefront and admin surfaces depend on, shared behind trait objects.
#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub categories: Arc<dyn CategoriesService>,
    pub pages: Arc<dyn PagesService>,
    pub orders: Arc<dyn OrdersService>,
    pub carts: Arc<dyn CartsService>,
    pub auth: Arc<dyn AuthService>,
    pub storage: Arc<dyn StorageService>,
    pub currency: &'static Currency,
}

impl AppContext {
    /// Build application context from settings.
    ///
    /// # Errors
    ///
    /// Returns an error when the currency code is unknown or the database connection fails.
    pub async fn from_settings(settings: AppSettings) -> Result<Self, AppInitError> {
        let currency = find_currency(&settings.currency_code)?;

        let pool = database::connect(&settings.database_url)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool.clone());

        let products: Arc<dyn ProductsService> = Arc::new(PgProductsService::new(db.clone()));

        if settings.storage.is_none() {
            info!("object storage not configured; uploads will be refused");
        }

        Ok(Self {
            carts: Arc::new(InMemoryCartsService::new(
                Arc::clone(&products),
                currency,
                settings.carts,
            )),
            products,
            categories: Arc::new(PgCategoriesService::new(db.clone())),
            pages: Arc::new(PgPagesService::new(db.clone())),
            orders: Arc::new(PgOrdersService::new(db)),
            auth: Arc::new(PgAuthService::new(pool)),
            storage: Arc::new(HttpStorageService::new(settings.storage)),
            currency,
        })
    }
}

/// Resolve an ISO 4217 code such as `"GBP"`, ignoring case.
pub fn find_currency(code: &str) -> Result<&'static Currency, AppInitError> {
    Currency::find(&code.trim().to_ascii_uppercase())
        .ok_or_else(|| AppInitError::UnknownCurrency(code.to_string()))
}

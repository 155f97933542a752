//! Store Config

use clap::Args;
use jiff::SignedDuration;

use storefront_app::domain::carts::data::CartLimits;

/// Store-wide settings.
#[derive(Debug, Args)]
pub struct StoreConfig {
    /// ISO 4217 currency code carts are priced in
    #[arg(long, env = "STORE_CURRENCY", default_value = "USD")]
    pub currency: String,

    /// Seconds a cart may sit untouched before it is discarded
    #[arg(long, env = "CART_IDLE_TTL_SECS", default_value_t = 86_400)]
    pub cart_idle_ttl_secs: u32,

    /// Most carts held in memory at once
    #[arg(long, env = "MAX_CARTS", default_value_t = 100_000)]
    pub max_carts: usize,
}

impl StoreConfig {
    /// Bounds applied to the in-memory carts.
    #[must_use]
    pub fn cart_limits(&self) -> CartLimits {
        CartLimits {
            idle_ttl: SignedDuration::from_secs(i64::from(self.cart_idle_ttl_secs)),
            max_carts: self.max_carts,
        }
    }
}

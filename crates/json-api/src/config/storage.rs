//! Object Storage Config

use clap::Args;
use storefront_app::storage::{StorageConfig, StorageError};

/// Object storage settings. Uploads are refused unless both values are set.
#[derive(Debug, Args)]
pub struct StorageArgs {
    /// Storage API base URL
    #[arg(long, env = "STORAGE_URL")]
    pub storage_url: Option<String>,

    /// Storage service key
    #[arg(long, env = "STORAGE_SERVICE_KEY", hide_env_values = true)]
    pub storage_service_key: Option<String>,
}

impl StorageArgs {
    /// Storage client settings, if storage is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot be parsed.
    pub fn to_storage_config(&self) -> Result<Option<StorageConfig>, StorageError> {
        let (Some(url), Some(key)) = (&self.storage_url, &self.storage_service_key) else {
            return Ok(None);
        };

        StorageConfig::parse(url, key.clone()).map(Some)
    }
}

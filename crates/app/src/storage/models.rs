//! Storage data models.

use reqwest::Url;
use serde::Deserialize;

use crate::storage::StorageError;

/// Connection settings for a Supabase-compatible storage API.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Project base URL, e.g. `"https://project.supabase.co"`.
    pub base_url: Url,

    /// Service key sent as both the bearer token and the `apikey` header.
    pub service_key: String,
}

impl StorageConfig {
    /// Build a config from a base URL string.
    pub fn parse(base_url: &str, service_key: String) -> Result<Self, StorageError> {
        let base_url = Url::parse(base_url)
            .map_err(|error| StorageError::InvalidBaseUrl(error.to_string()))?;

        if base_url.cannot_be_a_base() {
            return Err(StorageError::InvalidBaseUrl(base_url.to_string()));
        }

        Ok(Self {
            base_url,
            service_key,
        })
    }
}

/// A storage bucket.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Bucket {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub public: bool,
}

/// A file to upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub bucket: String,
    pub path: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

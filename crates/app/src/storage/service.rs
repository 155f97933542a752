//! Storage service.

use async_trait::async_trait;
use mockall::automock;
use reqwest::{Client, Response, Url, header::CONTENT_TYPE};
use tracing::{info, warn};

use crate::storage::{Bucket, StorageConfig, StorageError, Upload};

/// Storage client for the Supabase storage REST API.
///
/// A client built without configuration reports [`StorageError::NotConfigured`] for every call.
#[derive(Debug, Clone)]
pub struct HttpStorageService {
    config: Option<StorageConfig>,
    http: Client,
}

impl HttpStorageService {
    #[must_use]
    pub fn new(config: Option<StorageConfig>) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    fn config(&self) -> Result<&StorageConfig, StorageError> {
        self.config.as_ref().ok_or(StorageError::NotConfigured)
    }
}

#[async_trait]
impl StorageService for HttpStorageService {
    async fn list_buckets(&self) -> Result<Vec<Bucket>, StorageError> {
        let config = self.config()?;
        let url = storage_url(&config.base_url, &["bucket"], None)?;

        let response = self
            .http
            .get(url)
            .bearer_auth(&config.service_key)
            .header("apikey", &config.service_key)
            .send()
            .await?;

        let response = ensure_success(response).await?;

        Ok(response.json().await?)
    }

    #[tracing::instrument(
        name = "storage.service.upload",
        skip(self, upload),
        fields(bucket = %upload.bucket, path = %upload.path, size = upload.bytes.len()),
        err
    )]
    async fn upload(&self, upload: Upload) -> Result<String, StorageError> {
        let config = self.config()?;

        validate_path(&upload.path)?;

        let buckets = self.list_buckets().await?;

        if buckets.is_empty() {
            warn!("storage has no buckets");

            return Err(StorageError::NotConfigured);
        }

        if !buckets
            .iter()
            .any(|bucket| bucket.id == upload.bucket || bucket.name == upload.bucket)
        {
            return Err(StorageError::BucketNotFound(upload.bucket));
        }

        let url = storage_url(
            &config.base_url,
            &["object", &upload.bucket],
            Some(&upload.path),
        )?;

        let response = self
            .http
            .post(url)
            .bearer_auth(&config.service_key)
            .header("apikey", &config.service_key)
            .header(CONTENT_TYPE, upload.content_type)
            .body(upload.bytes)
            .send()
            .await?;

        ensure_success(response).await?;

        let public_url = self.public_url(&upload.bucket, &upload.path)?;

        info!(%public_url, "uploaded object");

        Ok(public_url)
    }

    fn public_url(&self, bucket: &str, path: &str) -> Result<String, StorageError> {
        let config = self.config()?;

        validate_path(path)?;

        Ok(storage_url(&config.base_url, &["object", "public", bucket], Some(path))?.to_string())
    }
}

async fn ensure_success(response: Response) -> Result<Response, StorageError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();

    Err(StorageError::Rejected {
        status: status.as_u16(),
        message,
    })
}

/// Object paths are relative, `/`-separated and free of empty, `.` and `..` segments.
fn validate_path(path: &str) -> Result<(), StorageError> {
    let valid = !path.is_empty()
        && path
            .split('/')
            .all(|segment| !segment.is_empty() && segment != "." && segment != "..");

    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidPath)
    }
}

/// Build `{base}/storage/v1/{segments...}/{path...}`, percent-encoding every segment.
fn storage_url(base: &Url, segments: &[&str], path: Option<&str>) -> Result<Url, StorageError> {
    let mut url = base.clone();

    url.path_segments_mut()
        .map_err(|()| StorageError::InvalidBaseUrl(base.to_string()))?
        .pop_if_empty()
        .extend(["storage", "v1"])
        .extend(segments)
        .extend(path.into_iter().flat_map(|path| path.split('/')));

    Ok(url)
}

#[automock]
#[async_trait]
pub trait StorageService: Send + Sync {
    /// Lists the buckets available for uploads.
    async fn list_buckets(&self) -> Result<Vec<Bucket>, StorageError>;

    /// Uploads a file, returning its public URL.
    async fn upload(&self, upload: Upload) -> Result<String, StorageError>;

    /// Public retrieval URL for a stored object.
    fn public_url(&self, bucket: &str, path: &str) -> Result<String, StorageError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn configured() -> TestResult<HttpStorageService> {
        Ok(HttpStorageService::new(Some(StorageConfig {
            base_url: Url::parse("https://project.example.com")?,
            service_key: "service-key".to_string(),
        })))
    }

    #[test]
    fn public_url_points_at_public_object() -> TestResult {
        let url = configured()?.public_url("product-images", "tees/logo tee.png")?;

        assert_eq!(
            url,
            "https://project.example.com/storage/v1/object/public/product-images/tees/logo%20tee.png"
        );

        Ok(())
    }

    #[test]
    fn opaque_base_url_is_rejected() {
        assert!(matches!(
            StorageConfig::parse("mailto:storage@example.com", String::new()),
            Err(StorageError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn storage_url_keeps_base_path_prefix() -> TestResult {
        let base = Url::parse("https://example.com/proxy/")?;

        let url = storage_url(&base, &["bucket"], None)?;

        assert_eq!(url.as_str(), "https://example.com/proxy/storage/v1/bucket");

        Ok(())
    }

    #[test]
    fn traversal_paths_are_rejected() {
        for path in ["", "/abs.png", "a//b.png", "../secret", "a/./b"] {
            assert!(
                matches!(validate_path(path), Err(StorageError::InvalidPath)),
                "{path:?} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn unconfigured_storage_reports_not_configured() {
        let service = HttpStorageService::new(None);

        assert!(matches!(
            service.list_buckets().await,
            Err(StorageError::NotConfigured)
        ));

        let upload = service
            .upload(Upload {
                bucket: "images".to_string(),
                path: "a.png".to_string(),
                content_type: "image/png".to_string(),
                bytes: vec![1, 2, 3],
            })
            .await;

        assert!(matches!(upload, Err(StorageError::NotConfigured)));
    }
}

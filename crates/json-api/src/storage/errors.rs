//! Storage Errors

use salvo::http::StatusError;
use tracing::{error, warn};

use storefront_app::storage::StorageError;

pub(crate) fn into_status_error(error: StorageError) -> StatusError {
    match error {
        StorageError::NotConfigured => {
            warn!("upload refused: no storage buckets configured");

            StatusError::service_unavailable().brief("Storage not configured")
        }
        StorageError::BucketNotFound(bucket) => {
            StatusError::not_found().brief(format!("Storage bucket '{bucket}' not found"))
        }
        StorageError::InvalidPath => StatusError::bad_request().brief("Invalid object path"),
        StorageError::Rejected { status, message } => {
            error!(status, "storage rejected request: {message}");

            StatusError::bad_gateway().brief("Storage rejected the request")
        }
        StorageError::Http(source) => {
            error!("storage request failed: {source}");

            StatusError::bad_gateway().brief("Storage unreachable")
        }
        StorageError::InvalidBaseUrl(url) => {
            error!("storage base URL cannot be used: {url}");

            StatusError::internal_server_error()
        }
    }
}

//! Storage errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    /// No storage endpoint is configured, or it has no buckets.
    #[error("storage not configured")]
    NotConfigured,

    #[error("invalid storage base url: {0}")]
    InvalidBaseUrl(String),

    #[error("bucket not found: {0}")]
    BucketNotFound(String),

    #[error("invalid object path")]
    InvalidPath,

    /// The storage API answered the upload with a non-success status.
    #[error("upload rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

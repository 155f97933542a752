//! Object storage for product and page images.

mod errors;
mod models;
mod service;

pub use errors::StorageError;
pub use models::*;
pub use service::*;

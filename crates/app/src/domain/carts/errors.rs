//! Carts service errors.

use thiserror::Error;

use crate::domain::products::ProductsServiceError;

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("cart already exists")]
    AlreadyExists,

    #[error("too many open carts")]
    TooManyCarts,

    #[error("cart or product not found")]
    NotFound,

    #[error("product is not available")]
    Unavailable,

    #[error("product lookup failed")]
    Products(#[source] ProductsServiceError),
}

impl From<ProductsServiceError> for CartsServiceError {
    fn from(error: ProductsServiceError) -> Self {
        match error {
            ProductsServiceError::NotFound => Self::NotFound,
            other => Self::Products(other),
        }
    }
}

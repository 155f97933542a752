//! Cart Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::AlreadyExists => StatusError::conflict().brief("Cart already exists"),
        CartsServiceError::TooManyCarts => {
            StatusError::service_unavailable().brief("Too many open carts, try again later")
        }
        CartsServiceError::NotFound => StatusError::not_found().brief("Cart or product not found"),
        CartsServiceError::Unavailable => {
            StatusError::conflict().brief("Product is not available for purchase")
        }
        CartsServiceError::Products(source) => {
            error!("product lookup for cart failed: {source}");

            StatusError::internal_server_error()
        }
    }
}

//! Order Errors

use salvo::http::StatusError;
use tracing::{error, warn};

use storefront_app::domain::orders::OrdersServiceError;

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::NotFound => StatusError::not_found().brief("Order not found"),
        OrdersServiceError::InvalidTransition { from, to } => {
            warn!(%from, %to, "rejected order status transition");

            StatusError::conflict().brief(format!("Cannot move a {from} order to {to}"))
        }
        OrdersServiceError::InvalidReference | OrdersServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid order payload")
        }
        OrdersServiceError::Sql(source) => {
            error!("order query failed: {source}");

            StatusError::internal_server_error()
        }
    }
}

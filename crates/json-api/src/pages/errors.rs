//! Page Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::pages::PagesServiceError;

pub(crate) fn into_status_error(error: PagesServiceError) -> StatusError {
    match error {
        PagesServiceError::AlreadyExists => {
            StatusError::conflict().brief("A page with this slug already exists")
        }
        PagesServiceError::InvalidReference
        | PagesServiceError::MissingRequiredData
        | PagesServiceError::InvalidData => StatusError::bad_request().brief("Invalid page payload"),
        PagesServiceError::NotFound => StatusError::not_found().brief("Page not found"),
        PagesServiceError::Sql(source) => {
            error!("page query failed: {source}");

            StatusError::internal_server_error()
        }
    }
}

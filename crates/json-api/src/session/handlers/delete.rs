//! Sign Out Handler

use std::sync::Arc;

use salvo::prelude::*;
use tracing::error;

use storefront_app::auth::AuthServiceError;

use crate::{extensions::*, state::State};

/// Sign Out Handler
///
/// Revokes the session behind the bearer token so it stops authenticating.
#[endpoint(
    tags("session"),
    summary = "Sign Out",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Signed out"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;

    match state.app.auth.sign_out(identity.session_uuid).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(AuthServiceError::NotFound) => {
            Err(StatusError::unauthorized().brief("Session already ended"))
        }
        Err(other) => {
            error!("failed to revoke session: {other}");

            Err(StatusError::internal_server_error())
        }
    }
}

//! Current Session Handler

use salvo::prelude::*;

use crate::{extensions::*, session::models::IdentityResponse};

/// Current Session Handler
///
/// Returns the identity behind the bearer token.
#[endpoint(
    tags("session"),
    summary = "Current Identity",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Signed-in identity"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<IdentityResponse>, StatusError> {
    let identity = depot.identity_or_401()?;

    Ok(Json(identity.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::{TestServices, customer_identity};

    use super::*;

    #[tokio::test]
    async fn test_returns_current_identity() -> TestResult {
        let identity = customer_identity();

        let response: IdentityResponse = TestClient::get("http://example.com/session")
            .send(
                &TestServices::default()
                    .service_as(identity.clone(), Router::with_path("session").get(handler)),
            )
            .await
            .take_json()
            .await?;

        assert_eq!(response.email, identity.email);
        assert_eq!(response.role, "customer");
        assert_eq!(response.session_uuid, identity.session_uuid.into_uuid());

        Ok(())
    }

    #[tokio::test]
    async fn test_anonymous_caller_returns_401() {
        let res = TestClient::get("http://example.com/session")
            .send(&TestServices::default().service(Router::with_path("session").get(handler)))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));
    }
}

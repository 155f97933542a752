//! Update Page Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use uuid::Uuid;

use crate::{
    extensions::*,
    pages::{
        errors::into_status_error,
        models::{PageDetailsRequest, PageResponse},
    },
    state::State,
};

/// Update Page Handler
#[endpoint(
    tags("admin"),
    summary = "Update Page",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Page updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Page not found"),
        (status_code = StatusCode::CONFLICT, description = "Slug already taken"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    page: PathParam<Uuid>,
    json: JsonBody<PageDetailsRequest>,
    depot: &mut Depot,
) -> Result<Json<PageResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let page = state
        .app
        .pages
        .update_page(page.into_inner().into(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(page.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use serde_json::json;

    use storefront_app::domain::pages::{MockPagesService, PagesServiceError, records::PageUuid};

    use crate::test_helpers::{TestServices, admin_identity, make_page};

    use super::*;

    fn make_service(pages: MockPagesService) -> Service {
        TestServices {
            pages,
            ..TestServices::default()
        }
        .service_as(admin_identity(), Router::with_path("admin/pages/{page}").put(handler))
    }

    #[tokio::test]
    async fn test_publish_page() {
        let uuid = PageUuid::new();

        let mut pages = MockPagesService::new();

        pages
            .expect_update_page()
            .once()
            .withf(move |page, details| *page == uuid && details.is_published)
            .return_once(move |_, _| Ok(make_page(uuid)));

        let res = TestClient::put(format!("http://example.com/admin/pages/{uuid}"))
            .json(&json!({ "slug": "about", "title": "About", "is_published": true }))
            .send(&make_service(pages))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
    }

    #[tokio::test]
    async fn test_slug_clash_returns_409() {
        let mut pages = MockPagesService::new();

        pages
            .expect_update_page()
            .once()
            .return_once(|_, _| Err(PagesServiceError::AlreadyExists));

        let res = TestClient::put(format!("http://example.com/admin/pages/{}", PageUuid::new()))
            .json(&json!({ "slug": "faq", "title": "FAQ" }))
            .send(&make_service(pages))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));
    }
}

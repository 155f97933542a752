//! Get Page Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    pages::{errors::into_status_error, models::PageResponse},
    state::State,
};

/// Get Page Handler
///
/// Returns a published page. Drafts are indistinguishable from missing pages.
#[endpoint(
    tags("storefront"),
    summary = "Get Page",
    responses(
        (status_code = StatusCode::OK, description = "Published page"),
        (status_code = StatusCode::NOT_FOUND, description = "Page not found"),
    ),
)]
pub(crate) async fn handler(
    slug: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<PageResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let page = state
        .app
        .pages
        .get_published_page(&slug.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(page.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::domain::pages::{MockPagesService, PagesServiceError, records::PageUuid};

    use crate::test_helpers::{TestServices, make_page};

    use super::*;

    fn make_service(pages: MockPagesService) -> Service {
        TestServices {
            pages,
            ..TestServices::default()
        }
        .service(Router::with_path("pages/{slug}").get(handler))
    }

    #[tokio::test]
    async fn test_get_published_page() -> TestResult {
        let uuid = PageUuid::new();

        let mut pages = MockPagesService::new();

        pages
            .expect_get_published_page()
            .once()
            .withf(|slug| slug == "about")
            .return_once(move |_| Ok(make_page(uuid)));

        let response: PageResponse = TestClient::get("http://example.com/pages/about")
            .send(&make_service(pages))
            .await
            .take_json()
            .await?;

        assert_eq!(response.uuid, uuid.into_uuid());
        assert_eq!(response.title, "About");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_unpublished_page_returns_404() {
        let mut pages = MockPagesService::new();

        pages
            .expect_get_published_page()
            .once()
            .return_once(|_| Err(PagesServiceError::NotFound));

        let res = TestClient::get("http://example.com/pages/draft")
            .send(&make_service(pages))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }
}

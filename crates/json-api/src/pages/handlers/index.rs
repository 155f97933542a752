//! Admin Page Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{extensions::*, pages::models::PagesResponse, state::State};

/// Admin Page Index Handler
///
/// Lists every page, drafts included.
#[endpoint(
    tags("admin"),
    summary = "List Pages",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "All pages"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<PagesResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let pages = state
        .app
        .pages
        .list_pages()
        .await
        .or_500("failed to fetch pages")?;

    Ok(Json(PagesResponse {
        pages: pages.into_iter().map(Into::into).collect(),
    }))
}

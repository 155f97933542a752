//! Category Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{categories::models::CategoriesResponse, extensions::*, state::State};

/// Category Index Handler
///
/// Lists every category ordered by name. Served both to the storefront navigation and the admin.
#[endpoint(
    tags("storefront"),
    summary = "List Categories",
    responses(
        (status_code = StatusCode::OK, description = "All categories"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CategoriesResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let categories = state
        .app
        .categories
        .list_categories()
        .await
        .or_500("failed to fetch categories")?;

    Ok(Json(CategoriesResponse {
        categories: categories.into_iter().map(Into::into).collect(),
    }))
}

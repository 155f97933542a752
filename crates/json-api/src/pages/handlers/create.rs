//! Create Page Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::pages::data::NewPage;

use crate::{
    extensions::*,
    pages::{
        errors::into_status_error,
        models::{PageDetailsRequest, PageResponse},
    },
    state::State,
};

/// Create Page Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreatePageRequest {
    pub uuid: Uuid,

    #[serde(flatten)]
    pub details: PageDetailsRequest,
}

impl From<CreatePageRequest> for NewPage {
    fn from(request: CreatePageRequest) -> Self {
        NewPage {
            uuid: request.uuid.into(),
            details: request.details.into(),
        }
    }
}

/// Create Page Handler
#[endpoint(
    tags("admin"),
    summary = "Create Page",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Page created"),
        (status_code = StatusCode::CONFLICT, description = "Slug already taken"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreatePageRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<PageResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let page = state
        .app
        .pages
        .create_page(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/pages/{}", page.slug), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(page.into()))
}

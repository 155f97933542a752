//! Upload Handler

use std::sync::Arc;

use salvo::{
    http::header::CONTENT_TYPE,
    oapi::{
        ToSchema,
        extract::{PathParam, QueryParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront_app::storage::Upload;

use crate::{extensions::*, state::State, storage::errors::into_status_error};

/// Largest accepted upload body.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Upload Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UploadResponse {
    /// Public URL of the stored object
    pub url: String,
}

/// Upload Handler
///
/// Stores the raw request body at `path` inside `bucket`, forwarding the request's content type.
#[endpoint(
    tags("admin"),
    summary = "Upload File",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Uploaded"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid path or body"),
        (status_code = StatusCode::NOT_FOUND, description = "Bucket not found"),
        (status_code = StatusCode::BAD_GATEWAY, description = "Storage rejected the upload"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Storage not configured"),
    ),
)]
pub(crate) async fn handler(
    bucket: PathParam<String>,
    path: QueryParam<String, true>,
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<UploadResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let content_type = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or(DEFAULT_CONTENT_TYPE)
        .to_string();

    let bytes = req
        .payload_with_max_size(MAX_UPLOAD_BYTES)
        .await
        .or_400("could not read upload body")?
        .to_vec();

    let url = state
        .app
        .storage
        .upload(Upload {
            bucket: bucket.into_inner(),
            path: path.into_inner(),
            content_type,
            bytes,
        })
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(UploadResponse { url }))
}

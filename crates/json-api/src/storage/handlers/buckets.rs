//! Bucket Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use storefront_app::storage::Bucket;

use crate::{extensions::*, state::State, storage::errors::into_status_error};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BucketResponse {
    pub id: String,

    pub name: String,

    /// Whether objects are served without a signed URL
    pub public: bool,
}

impl From<Bucket> for BucketResponse {
    fn from(bucket: Bucket) -> Self {
        BucketResponse {
            id: bucket.id,
            name: bucket.name,
            public: bucket.public,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BucketsResponse {
    pub buckets: Vec<BucketResponse>,
}

/// Bucket Index Handler
///
/// Lists the storage buckets available for uploads.
#[endpoint(
    tags("admin"),
    summary = "List Storage Buckets",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Buckets"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Storage not configured"),
        (status_code = StatusCode::BAD_GATEWAY, description = "Storage unreachable"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<BucketsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let buckets = state
        .app
        .storage
        .list_buckets()
        .await
        .map_err(into_status_error)?;

    Ok(Json(BucketsResponse {
        buckets: buckets.into_iter().map(Into::into).collect(),
    }))
}

//! Product Visibility Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    extensions::*,
    products::{errors::into_status_error, models::ProductResponse},
    state::State,
};

/// Product Visibility Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductActiveRequest {
    /// Whether the product is listed on the storefront
    pub is_active: bool,
}

/// Product Visibility Handler
///
/// Shows or hides a product on the storefront without deleting it.
#[endpoint(
    tags("admin"),
    summary = "Set Product Visibility",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    json: JsonBody<ProductActiveRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .products
        .set_product_active(product.into_inner().into(), json.into_inner().is_active)
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}

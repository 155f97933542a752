//! Storefront Product Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};
use tracing::error;

use storefront_app::domain::products::data::Collection;

use crate::{extensions::*, products::models::ProductsResponse, state::State};

/// Storefront Product Index Handler
///
/// Lists the active products in a collection, `featured` when none is given. A failed fetch is
/// logged and answered with an empty list so the storefront still renders.
#[endpoint(
    tags("storefront"),
    summary = "List Collection Products",
    responses(
        (status_code = StatusCode::OK, description = "Products in the collection"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown collection"),
    ),
)]
pub(crate) async fn handler(
    collection: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let collection = collection
        .into_inner()
        .map(|value| value.parse::<Collection>())
        .transpose()
        .or_400("could not parse \"collection\" query parameter")?
        .unwrap_or_default();

    let products = match state.app.products.list_products(collection.filter()).await {
        Ok(products) => products,
        Err(error) => {
            error!(?collection, "failed to fetch storefront products: {error}");

            Vec::new()
        }
    };

    Ok(Json(ProductsResponse {
        products: products.into_iter().map(Into::into).collect(),
    }))
}

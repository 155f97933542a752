//! Add Cart Item Handler

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
    carts::{errors::into_status_error, models::CartResponse},
    extensions::*,
    state::State,
};

/// Add Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddCartItemRequest {
    pub product_uuid: Uuid,
}

/// Add Cart Item Handler
///
/// Adds one unit of an active product. The product's name and current effective price are
/// captured the first time it enters the cart and kept for later units.
#[endpoint(
    tags("carts"),
    summary = "Add Cart Item",
    responses(
        (status_code = StatusCode::OK, description = "Updated cart"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart or product not found"),
        (status_code = StatusCode::CONFLICT, description = "Product is not available"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    json: JsonBody<AddCartItemRequest>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let cart = state
        .app
        .carts
        .add_item(cart.into_inner().into(), json.into_inner().product_uuid.into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(CartResponse::new(cart)))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use storefront_app::domain::{
        carts::{CartsServiceError, MockCartsService, records::CartUuid},
        products::{ProductsServiceError, records::ProductUuid},
    };

    use crate::test_helpers::{TestServices, make_cart_with};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        TestServices {
            carts,
            ..TestServices::default()
        }
        .service(Router::with_path("carts/{cart}/items").post(handler))
    }

    async fn add(carts: MockCartsService, cart: CartUuid, product: ProductUuid) -> Response {
        TestClient::post(format!("http://example.com/carts/{cart}/items"))
            .json(&json!({ "product_uuid": product.into_uuid() }))
            .send(&make_service(carts))
            .await
    }

    #[tokio::test]
    async fn test_add_item_returns_updated_cart() -> TestResult {
        let cart = CartUuid::new();
        let product = ProductUuid::new();

        let mut carts = MockCartsService::new();

        carts
            .expect_add_item()
            .once()
            .withf(move |c, p| *c == cart && *p == product)
            .return_once(move |_, _| Ok(make_cart_with(cart, product, 2)));

        let mut res = add(carts, cart, product).await;

        let response: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(response.item_count, 2);
        assert_eq!(response.total, 50_00);

        Ok(())
    }

    #[tokio::test]
    async fn test_add_inactive_product_returns_409() {
        let mut carts = MockCartsService::new();

        carts
            .expect_add_item()
            .once()
            .return_once(|_, _| Err(CartsServiceError::Unavailable));

        let res = add(carts, CartUuid::new(), ProductUuid::new()).await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));
    }

    #[tokio::test]
    async fn test_add_to_unknown_cart_returns_404() {
        let mut carts = MockCartsService::new();

        carts
            .expect_add_item()
            .once()
            .return_once(|_, _| Err(CartsServiceError::NotFound));

        let res = add(carts, CartUuid::new(), ProductUuid::new()).await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn test_product_lookup_failure_returns_500() {
        let mut carts = MockCartsService::new();

        carts
            .expect_add_item()
            .once()
            .return_once(|_, _| Err(CartsServiceError::Products(ProductsServiceError::InvalidData)));

        let res = add(carts, CartUuid::new(), ProductUuid::new()).await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
    }
}

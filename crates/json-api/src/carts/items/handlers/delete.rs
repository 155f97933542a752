//! Remove Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    carts::{errors::into_status_error, models::CartResponse},
    extensions::*,
    state::State,
};

/// Remove Cart Item Handler
///
/// Removes one unit of a product. Removing the last unit drops the line item; removing a product
/// the cart does not hold returns the cart unchanged.
#[endpoint(
    tags("carts"),
    summary = "Remove Cart Item",
    responses(
        (status_code = StatusCode::OK, description = "Updated cart"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
    ),
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let cart = state
        .app
        .carts
        .remove_item(cart.into_inner().into(), product.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(CartResponse::new(cart)))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::domain::{
        carts::{CartsServiceError, MockCartsService, records::CartUuid},
        products::records::ProductUuid,
    };

    use crate::test_helpers::{TestServices, make_cart_with};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        TestServices {
            carts,
            ..TestServices::default()
        }
        .service(Router::with_path("carts/{cart}/items/{product}").delete(handler))
    }

    #[tokio::test]
    async fn test_remove_item_returns_updated_cart() -> TestResult {
        let cart = CartUuid::new();
        let product = ProductUuid::new();

        let mut carts = MockCartsService::new();

        carts
            .expect_remove_item()
            .once()
            .withf(move |c, p| *c == cart && *p == product)
            .return_once(move |_, _| Ok(make_cart_with(cart, product, 1)));

        let response: CartResponse =
            TestClient::delete(format!("http://example.com/carts/{cart}/items/{product}"))
                .send(&make_service(carts))
                .await
                .take_json()
                .await?;

        assert_eq!(response.item_count, 1);
        assert_eq!(response.total_display, "$25.00");

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_from_unknown_cart_returns_404() {
        let mut carts = MockCartsService::new();

        carts
            .expect_remove_item()
            .once()
            .return_once(|_, _| Err(CartsServiceError::NotFound));

        let res = TestClient::delete(format!(
            "http://example.com/carts/{}/items/{}",
            CartUuid::new(),
            ProductUuid::new()
        ))
        .send(&make_service(carts))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }
}

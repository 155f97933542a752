//! Order Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{extensions::*, orders::models::OrdersResponse, state::State};

/// Order Index Handler
///
/// Lists every order with its items, newest first.
#[endpoint(
    tags("admin"),
    summary = "List Orders",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "All orders"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<OrdersResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let orders = state
        .app
        .orders
        .list_orders()
        .await
        .or_500("failed to fetch orders")?;

    Ok(Json(OrdersResponse {
        orders: orders.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::domain::orders::{
        MockOrdersService, OrdersServiceError, records::OrderUuid,
    };

    use crate::test_helpers::{TestServices, admin_identity, make_order};

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        TestServices {
            orders,
            ..TestServices::default()
        }
        .service_as(admin_identity(), Router::with_path("admin/orders").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_orders_with_items() -> TestResult {
        let uuid = OrderUuid::new();

        let mut orders = MockOrdersService::new();

        orders
            .expect_list_orders()
            .once()
            .return_once(move || Ok(vec![make_order(uuid)]));

        let response: OrdersResponse = TestClient::get("http://example.com/admin/orders")
            .send(&make_service(orders))
            .await
            .take_json()
            .await?;

        let order = response.orders.first().ok_or("expected an order")?;

        assert_eq!(order.uuid, uuid.into_uuid());
        assert_eq!(order.status, "pending");
        assert_eq!(order.items.len(), 1, "expected one order item");

        Ok(())
    }

    #[tokio::test]
    async fn test_index_failure_returns_500() {
        let mut orders = MockOrdersService::new();

        orders
            .expect_list_orders()
            .once()
            .return_once(|| Err(OrdersServiceError::InvalidData));

        let res = TestClient::get("http://example.com/admin/orders")
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
    }
}

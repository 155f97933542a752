//! Update Order Status Handler

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

use storefront_app::domain::orders::status::OrderStatus;

use crate::{extensions::*, orders::errors::into_status_error, state::State};

/// Order Status Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderStatusRequest {
    /// Target status
    pub status: String,
}

/// Order Status Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderStatusResponse {
    pub uuid: Uuid,

    pub status: String,
}

/// Update Order Status Handler
///
/// Moves an order one step along `pending -> processing -> shipped -> delivered`, or cancels an
/// order that has not been delivered.
#[endpoint(
    tags("admin"),
    summary = "Update Order Status",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Status updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown status"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::CONFLICT, description = "Transition not allowed"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    json: JsonBody<OrderStatusRequest>,
    depot: &mut Depot,
) -> Result<Json<OrderStatusResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let order = order.into_inner();

    let status = json
        .into_inner()
        .status
        .parse::<OrderStatus>()
        .or_400("unknown order status")?;

    let status = state
        .app
        .orders
        .update_order_status(order.into(), status)
        .await
        .map_err(into_status_error)?;

    Ok(Json(OrderStatusResponse {
        uuid: order,
        status: status.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use storefront_app::domain::orders::{
        MockOrdersService, OrdersServiceError, records::OrderUuid,
    };

    use crate::test_helpers::{TestServices, admin_identity};

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        TestServices {
            orders,
            ..TestServices::default()
        }
        .service_as(
            admin_identity(),
            Router::with_path("admin/orders/{order}/status").put(handler),
        )
    }

    #[tokio::test]
    async fn test_advance_order() -> TestResult {
        let uuid = OrderUuid::new();

        let mut orders = MockOrdersService::new();

        orders
            .expect_update_order_status()
            .once()
            .withf(move |order, status| *order == uuid && *status == OrderStatus::Processing)
            .return_once(|_, status| Ok(status));

        let mut res = TestClient::put(format!("http://example.com/admin/orders/{uuid}/status"))
            .json(&json!({ "status": "processing" }))
            .send(&make_service(orders))
            .await;

        let response: OrderStatusResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(response.status, "processing");

        Ok(())
    }

    #[tokio::test]
    async fn test_skipping_a_step_returns_409() {
        let mut orders = MockOrdersService::new();

        orders
            .expect_update_order_status()
            .once()
            .return_once(|_, to| {
                Err(OrdersServiceError::InvalidTransition {
                    from: OrderStatus::Pending,
                    to,
                })
            });

        let res = TestClient::put(format!(
            "http://example.com/admin/orders/{}/status",
            OrderUuid::new()
        ))
        .json(&json!({ "status": "shipped" }))
        .send(&make_service(orders))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));
    }

    #[tokio::test]
    async fn test_unknown_status_returns_400() {
        let mut orders = MockOrdersService::new();

        orders.expect_update_order_status().never();

        let res = TestClient::put(format!(
            "http://example.com/admin/orders/{}/status",
            OrderUuid::new()
        ))
        .json(&json!({ "status": "lost" }))
        .send(&make_service(orders))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_missing_order_returns_404() {
        let mut orders = MockOrdersService::new();

        orders
            .expect_update_order_status()
            .once()
            .return_once(|_, _| Err(OrdersServiceError::NotFound));

        let res = TestClient::put(format!(
            "http://example.com/admin/orders/{}/status",
            OrderUuid::new()
        ))
        .json(&json!({ "status": "cancelled" }))
        .send(&make_service(orders))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }
}

//! Update Order Status Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use uuid::Uuid;

use storefront_app::domain::orders::OrderUuid;

use crate::{
    extensions::DepotExt,
    orders::{
        errors::into_status_error,
        models::{OrderUpdatedResponse, UpdateOrderRequest},
    },
    state::State,
};

/// Update Order Status Handler
#[endpoint(
    tags("orders"),
    summary = "Replace an order's status",
    responses(
        (status_code = StatusCode::OK, description = "Order status updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown status"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    json: JsonBody<UpdateOrderRequest>,
    depot: &mut Depot,
) -> Result<Json<OrderUpdatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .orders
        .set_status(
            OrderUuid::from_uuid(order.into_inner()),
            json.into_inner().status.into(),
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(OrderUpdatedResponse {
        success: true,
        message: "Order status updated successfully".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use storefront_app::domain::orders::{MockOrdersService, OrderStatus, OrdersServiceError};

    use crate::test_helpers::{make_order, orders_service};

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        orders_service(
            orders,
            Router::with_path("api/orders/{order}").patch(handler),
        )
    }

    #[tokio::test]
    async fn test_update_order_status_success() -> TestResult {
        let order = make_order();
        let order_id = order.id;

        let mut orders = MockOrdersService::new();

        orders
            .expect_set_status()
            .once()
            .withf(move |id, status| *id == order_id && *status == OrderStatus::Paid)
            .return_once(move |_, _| Ok(order));

        orders.expect_create_order().never();
        orders.expect_get_order().never();

        let mut res = TestClient::patch(format!("http://example.com/api/orders/{order_id}"))
            .json(&json!({ "status": "paid" }))
            .send(&make_service(orders))
            .await;

        let body: OrderUpdatedResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.success, "the response should report success");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_order_unknown_returns_404() {
        let mut orders = MockOrdersService::new();

        orders
            .expect_set_status()
            .once()
            .return_once(|_, _| Err(OrdersServiceError::NotFound));

        orders.expect_create_order().never();
        orders.expect_get_order().never();

        let res = TestClient::patch(format!(
            "http://example.com/api/orders/{}",
            Uuid::now_v7()
        ))
        .json(&json!({ "status": "paid" }))
        .send(&make_service(orders))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn test_update_order_unknown_status_returns_400() {
        let mut orders = MockOrdersService::new();

        orders.expect_set_status().never();
        orders.expect_create_order().never();
        orders.expect_get_order().never();

        let res = TestClient::patch(format!(
            "http://example.com/api/orders/{}",
            Uuid::now_v7()
        ))
        .json(&json!({ "status": "shipped" }))
        .send(&make_service(orders))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}

//! Create Order Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::extract::JsonBody,
    prelude::*,
};

use crate::{
    extensions::{DepotExt, ResultExt},
    orders::{
        errors::into_status_error,
        models::{CreateOrderRequest, OrderCreatedResponse},
    },
    state::State,
};

/// Create Order Handler
#[endpoint(
    tags("orders"),
    summary = "Create an order",
    responses(
        (status_code = StatusCode::CREATED, description = "Order created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing required fields"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateOrderRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let order = state
        .app
        .orders
        .create_order(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    let order_id = order.id.into_uuid();

    res.add_header(LOCATION, format!("/api/orders/{order_id}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(OrderCreatedResponse {
        success: true,
        order_id,
        message: "Order created successfully".to_string(),
    }))
}

//! Order wire models.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::orders::{
    CustomerDetails, NewOrder, Order, OrderLine, OrderStatus,
};

/// One ordered line on the wire.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderLineView {
    pub name: String,
    pub price: String,
    pub quantity: u32,
}

impl From<OrderLine> for OrderLineView {
    fn from(line: OrderLine) -> Self {
        Self {
            name: line.name,
            price: line.price,
            quantity: line.quantity,
        }
    }
}

impl From<OrderLineView> for OrderLine {
    fn from(view: OrderLineView) -> Self {
        Self {
            name: view.name,
            price: view.price,
            quantity: view.quantity,
        }
    }
}

/// Customer details on the wire.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CustomerView {
    pub name: String,
    pub email: String,
    pub address: String,
}

impl From<CustomerDetails> for CustomerView {
    fn from(customer: CustomerDetails) -> Self {
        Self {
            name: customer.name,
            email: customer.email,
            address: customer.address,
        }
    }
}

impl From<CustomerView> for CustomerDetails {
    fn from(view: CustomerView) -> Self {
        Self {
            name: view.name,
            email: view.email,
            address: view.address,
        }
    }
}

/// An order status on the wire.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub(crate) enum OrderStatusPayload {
    Pending,
    Paid,
    PaymentFailed,
}

impl From<OrderStatusPayload> for OrderStatus {
    fn from(status: OrderStatusPayload) -> Self {
        match status {
            OrderStatusPayload::Pending => Self::Pending,
            OrderStatusPayload::Paid => Self::Paid,
            OrderStatusPayload::PaymentFailed => Self::PaymentFailed,
        }
    }
}

pub(crate) fn status_label(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "pending",
        OrderStatus::Paid => "paid",
        OrderStatus::PaymentFailed => "payment_failed",
    }
}

/// An order as the API serves it.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderView {
    pub id: Uuid,
    pub items: Vec<OrderLineView>,
    pub customer_info: CustomerView,
    pub total_amount: f64,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Order> for OrderView {
    fn from(order: Order) -> Self {
        Self {
            id: order.id.into_uuid(),
            items: order.items.into_iter().map(OrderLineView::from).collect(),
            customer_info: order.customer_info.into(),
            total_amount: order.total_amount.to_f64().unwrap_or_default(),
            status: status_label(order.status).to_string(),
            created_at: order.created_at.to_string(),
            updated_at: order.updated_at.to_string(),
        }
    }
}

/// Create Order Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateOrderRequest {
    pub items: Option<Vec<OrderLineView>>,
    pub customer_info: Option<CustomerView>,
    pub total_amount: Option<f64>,
}

impl From<CreateOrderRequest> for NewOrder {
    fn from(request: CreateOrderRequest) -> Self {
        Self {
            items: request
                .items
                .map(|items| items.into_iter().map(OrderLine::from).collect()),
            customer_info: request.customer_info.map(CustomerDetails::from),
            total_amount: request.total_amount.and_then(Decimal::from_f64_retain),
        }
    }
}

/// Order Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderCreatedResponse {
    pub success: bool,
    /// Created order id
    pub order_id: Uuid,
    pub message: String,
}

/// Update Order Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateOrderRequest {
    pub status: OrderStatusPayload,
}

/// Order Updated Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderUpdatedResponse {
    pub success: bool,
    pub message: String,
}

//! Order models.

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use storefront::uuids::TypedUuid;

/// Order UUID
pub type OrderUuid = TypedUuid<Order>;

/// Where an order stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Created, no payment settled yet.
    Pending,

    /// A payment settled successfully.
    Paid,

    /// A payment settled as failed.
    PaymentFailed,
}

/// One ordered line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub name: String,
    pub price: String,
    pub quantity: u32,
}

/// Who the order is for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    pub name: String,
    pub email: String,
    pub address: String,
}

/// Order Model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderUuid,
    pub items: Vec<OrderLine>,
    pub customer_info: CustomerDetails,
    pub total_amount: Decimal,
    pub status: OrderStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// New Order Model
///
/// Fields arrive optional so the service can name what was missing instead
/// of the deserializer rejecting the whole payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub items: Option<Vec<OrderLine>>,
    pub customer_info: Option<CustomerDetails>,
    pub total_amount: Option<Decimal>,
}

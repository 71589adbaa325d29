//! The client-side contract with the storefront service.
//!
//! Payload types mirror the service's wire format, `camelCase` field names
//! included, so a transport implementation only has to move JSON.

use async_trait::async_trait;
use mockall::automock;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::form::{CardDetails, CustomerInfo};

/// One cart line as the order payload carries it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLinePayload {
    /// The product name.
    pub name: String,

    /// The display price.
    pub price: String,

    /// The quantity ordered.
    pub quantity: u32,
}

/// The payload for creating an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderRequest {
    /// The ordered lines.
    pub items: Vec<OrderLinePayload>,

    /// Who the order is for.
    pub customer_info: CustomerInfo,

    /// The order total.
    pub total_amount: Decimal,
}

/// The payload for submitting a payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    /// The order being paid for.
    pub order_id: Uuid,

    /// The payment method name.
    pub payment_method: String,

    /// The card being charged.
    pub card_info: CardDetails,

    /// The amount to charge.
    pub amount: Decimal,
}

/// A payment as the service reports it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStatusView {
    /// The payment's id.
    pub id: Uuid,

    /// The order the payment is for.
    pub order_id: Uuid,

    /// The settlement status: `processing`, `completed` or `failed`.
    pub status: String,

    /// The amount charged.
    pub amount: Decimal,
}

/// Errors from talking to the storefront service.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The service answered with a rejection.
    #[error("the service rejected the request: {0}")]
    Rejected(String),

    /// The service could not be reached or answered unintelligibly.
    #[error("transport failure: {0}")]
    Transport(String),
}

/// The operations checkout needs from the storefront service.
#[automock]
#[async_trait]
pub trait CheckoutGateway: Send + Sync {
    /// Creates an order and returns its id.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] when the service rejects the order or
    /// cannot be reached.
    async fn create_order(&self, order: NewOrderRequest) -> Result<Uuid, GatewayError>;

    /// Submits a payment for an order and returns the payment's id.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] when the service rejects the payment or
    /// cannot be reached.
    async fn submit_payment(&self, payment: PaymentRequest) -> Result<Uuid, GatewayError>;

    /// Reads a payment's settlement status.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] when the payment is unknown or the service
    /// cannot be reached.
    async fn payment_status(&self, payment_id: Uuid) -> Result<PaymentStatusView, GatewayError>;
}

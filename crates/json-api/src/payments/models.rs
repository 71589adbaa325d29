//! Payment wire models.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::orders::OrderUuid;
use storefront_app::domain::payments::{NewPayment, Payment, PaymentStatus};

/// Card details on the wire. Accepted with a payment and discarded; the
/// simulated processor never stores or logs them.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CardInfoPayload {
    pub number: Option<String>,
    pub expiry: Option<String>,
    pub cvv: Option<String>,
}

/// Create Payment Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreatePaymentRequest {
    pub order_id: Option<Uuid>,
    pub payment_method: Option<String>,
    pub card_info: Option<CardInfoPayload>,
    pub amount: Option<f64>,
}

impl From<CreatePaymentRequest> for NewPayment {
    fn from(request: CreatePaymentRequest) -> Self {
        Self {
            order_id: request.order_id.map(OrderUuid::from_uuid),
            payment_method: request.payment_method,
            amount: request.amount.and_then(Decimal::from_f64_retain),
        }
    }
}

/// Payment Accepted Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PaymentAcceptedResponse {
    pub success: bool,
    /// Accepted payment id
    pub payment_id: Uuid,
    pub message: String,
}

pub(crate) fn status_label(status: PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::Processing => "processing",
        PaymentStatus::Completed => "completed",
        PaymentStatus::Failed => "failed",
    }
}

/// A payment as the API serves it.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PaymentView {
    pub id: Uuid,
    pub order_id: Uuid,
    pub payment_method: String,
    pub amount: f64,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Payment> for PaymentView {
    fn from(payment: Payment) -> Self {
        Self {
            id: payment.id.into_uuid(),
            order_id: payment.order_id.into_uuid(),
            payment_method: payment.payment_method,
            amount: payment.amount.to_f64().unwrap_or_default(),
            status: status_label(payment.status).to_string(),
            created_at: payment.created_at.to_string(),
            updated_at: payment.updated_at.to_string(),
        }
    }
}

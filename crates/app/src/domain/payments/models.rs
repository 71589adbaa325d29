//! Payment models.

use std::time::Duration;

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use storefront::uuids::TypedUuid;

use crate::domain::orders::OrderUuid;

/// Payment UUID
pub type PaymentUuid = TypedUuid<Payment>;

/// Where a payment stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Accepted, settlement pending.
    Processing,

    /// Settled successfully.
    Completed,

    /// Settled as declined.
    Failed,
}

/// Payment Model
///
/// Card details are accepted on submission but never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: PaymentUuid,
    pub order_id: OrderUuid,
    pub payment_method: String,
    pub amount: Decimal,
    pub status: PaymentStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// New Payment Model
///
/// Fields arrive optional so the service can name what was missing instead
/// of the deserializer rejecting the whole payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPayment {
    pub order_id: Option<OrderUuid>,
    pub payment_method: Option<String>,
    pub amount: Option<Decimal>,
}

/// How a submitted payment settles.
#[derive(Debug, Clone, Copy)]
pub enum SettlementOutcome {
    /// Declines a draw below `failure_rate` (0.1 declines roughly one in
    /// ten payments).
    Random { failure_rate: f64 },

    /// Every payment settles successfully.
    AlwaysSucceed,

    /// Every payment is declined.
    AlwaysFail,
}

/// When and how submitted payments settle.
#[derive(Debug, Clone, Copy)]
pub struct SettlementPolicy {
    pub delay: Duration,
    pub outcome: SettlementOutcome,
}

impl Default for SettlementPolicy {
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(2),
            outcome: SettlementOutcome::Random { failure_rate: 0.1 },
        }
    }
}

//! Payments.

pub mod errors;
pub mod models;
pub mod service;

pub use errors::PaymentsServiceError;
pub use models::{NewPayment, Payment, PaymentStatus, PaymentUuid, SettlementOutcome, SettlementPolicy};
pub use service::{InMemoryPaymentsService, MockPaymentsService, PaymentsService};

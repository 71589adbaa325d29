//! Checkout
//!
//! The checkout flow against the storefront service: validate the form,
//! create the order, submit the payment, wait out settlement and confirm the
//! outcome. [`CheckoutOrchestrator`] drives the steps over a
//! [`gateway::CheckoutGateway`] so the flow itself never touches a wire
//! format or a transport.

pub mod form;
pub mod gateway;
mod orchestrator;

use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

pub use orchestrator::CheckoutOrchestrator;

use crate::storage::CartStoreError;
use form::FieldError;
use gateway::GatewayError;

/// Where a checkout attempt currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutPhase {
    /// No attempt is running.
    Idle,

    /// The cart and form are being validated.
    Validating,

    /// The order is being created.
    OrderPending,

    /// The payment is being submitted.
    PaymentPending,

    /// The payment was accepted and is settling.
    Settling,

    /// The attempt finished with a paid order.
    Succeeded,

    /// The attempt finished without a paid order.
    Failed,
}

/// What a successful checkout leaves the caller with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutReceipt {
    /// The created order's id.
    pub order_id: Uuid,

    /// The settled payment's id.
    pub payment_id: Uuid,

    /// The amount charged.
    pub amount: Decimal,
}

/// Errors from a checkout attempt.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Checkout was started with nothing in the cart.
    #[error("the cart is empty")]
    EmptyCart,

    /// The form failed validation.
    #[error("the checkout form is invalid")]
    Validation(Vec<FieldError>),

    /// Another checkout attempt is already running.
    #[error("a checkout attempt is already in flight")]
    AlreadyInFlight,

    /// The order could not be created.
    #[error("failed to create the order")]
    OrderCreation(#[source] GatewayError),

    /// The payment could not be submitted.
    #[error("failed to submit the payment")]
    PaymentSubmission(#[source] GatewayError),

    /// The settlement outcome could not be read.
    #[error("failed to check the payment status")]
    StatusCheck(#[source] GatewayError),

    /// The payment settled as anything other than completed.
    #[error("the payment was declined with status {status:?}")]
    PaymentDeclined {
        /// The status the payment settled with.
        status: String,
    },

    /// The cart snapshot could not be updated after payment.
    #[error(transparent)]
    Persistence(#[from] CartStoreError),
}

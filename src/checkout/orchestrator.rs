//! The checkout flow itself.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::sync::watch;
use tracing::info;

use super::form::CheckoutForm;
use super::gateway::{CheckoutGateway, NewOrderRequest, OrderLinePayload, PaymentRequest};
use super::{CheckoutError, CheckoutPhase, CheckoutReceipt};
use crate::cart::CartManager;
use crate::storage::CartStore;

/// How long to let a payment settle before the status check.
const DEFAULT_SETTLEMENT_WAIT: Duration = Duration::from_secs(3);

/// The status a payment settles with when it went through.
const SETTLED: &str = "completed";

/// Drives a checkout attempt from validation through settlement.
///
/// One attempt runs at a time. A second call while one is in flight fails
/// with [`CheckoutError::AlreadyInFlight`] instead of double-charging.
pub struct CheckoutOrchestrator<G> {
    gateway: G,
    settlement_wait: Duration,
    in_flight: AtomicBool,
    phase: watch::Sender<CheckoutPhase>,
}

impl<G: CheckoutGateway> CheckoutOrchestrator<G> {
    /// Creates an orchestrator over `gateway` with the default settlement
    /// wait.
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            settlement_wait: DEFAULT_SETTLEMENT_WAIT,
            in_flight: AtomicBool::new(false),
            phase: watch::Sender::new(CheckoutPhase::Idle),
        }
    }

    /// Overrides how long settlement is given before the status check.
    #[must_use]
    pub fn with_settlement_wait(mut self, wait: Duration) -> Self {
        self.settlement_wait = wait;

        self
    }

    /// A receiver that follows the attempt's [`CheckoutPhase`].
    pub fn phases(&self) -> watch::Receiver<CheckoutPhase> {
        self.phase.subscribe()
    }

    /// Runs a checkout attempt for the cart's contents.
    ///
    /// On success the cart is emptied and the receipt returned. On any
    /// failure the cart is left untouched so the customer can retry.
    ///
    /// # Errors
    ///
    /// Returns a [`CheckoutError`] naming the step that failed, or
    /// [`CheckoutError::AlreadyInFlight`] when another attempt is running.
    pub async fn checkout<S: CartStore>(
        &self,
        cart: &mut CartManager<S>,
        form: &CheckoutForm,
    ) -> Result<CheckoutReceipt, CheckoutError> {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err(CheckoutError::AlreadyInFlight);
        }

        let result = self.run(cart, form).await;

        self.phase.send_replace(if result.is_ok() {
            CheckoutPhase::Succeeded
        } else {
            CheckoutPhase::Failed
        });
        self.in_flight.store(false, Ordering::SeqCst);

        result
    }

    async fn run<S: CartStore>(
        &self,
        cart: &mut CartManager<S>,
        form: &CheckoutForm,
    ) -> Result<CheckoutReceipt, CheckoutError> {
        self.phase.send_replace(CheckoutPhase::Validating);

        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        form.validate().map_err(CheckoutError::Validation)?;

        let amount = cart.total();
        let order = NewOrderRequest {
            items: cart
                .lines()
                .iter()
                .map(|line| OrderLinePayload {
                    name: line.name.clone(),
                    price: line.price.clone(),
                    quantity: line.quantity,
                })
                .collect(),
            customer_info: form.customer.clone(),
            total_amount: amount,
        };

        self.phase.send_replace(CheckoutPhase::OrderPending);
        let order_id = self
            .gateway
            .create_order(order)
            .await
            .map_err(CheckoutError::OrderCreation)?;

        info!(%order_id, %amount, "order created");

        self.phase.send_replace(CheckoutPhase::PaymentPending);
        let payment_id = self
            .gateway
            .submit_payment(PaymentRequest {
                order_id,
                payment_method: form.payment_method.clone(),
                card_info: form.card.clone(),
                amount,
            })
            .await
            .map_err(CheckoutError::PaymentSubmission)?;

        self.phase.send_replace(CheckoutPhase::Settling);
        tokio::time::sleep(self.settlement_wait).await;

        let view = self
            .gateway
            .payment_status(payment_id)
            .await
            .map_err(CheckoutError::StatusCheck)?;

        if view.status != SETTLED {
            return Err(CheckoutError::PaymentDeclined {
                status: view.status,
            });
        }

        cart.clear()?;

        info!(%order_id, %payment_id, "checkout complete");

        Ok(CheckoutReceipt {
            order_id,
            payment_id,
            amount,
        })
    }
}

impl<G> fmt::Debug for CheckoutOrchestrator<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckoutOrchestrator")
            .field("settlement_wait", &self.settlement_wait)
            .field("in_flight", &self.in_flight)
            .finish_non_exhaustive()
    }
}

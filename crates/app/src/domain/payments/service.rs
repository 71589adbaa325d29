//! Payments service.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use rand::Rng;
use tokio::sync::RwLock;
use tracing::{info, warn};

use super::errors::PaymentsServiceError;
use super::models::{
    NewPayment, Payment, PaymentStatus, PaymentUuid, SettlementOutcome, SettlementPolicy,
};
use crate::domain::orders::{OrderStatus, OrderUuid, OrdersService, OrdersServiceError};

#[automock]
#[async_trait]
pub trait PaymentsService: Send + Sync {
    /// Accepts a payment and schedules its settlement. Returns immediately
    /// with the payment in `processing` status.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentsServiceError::MissingRequiredData`] when a required
    /// field is absent.
    async fn submit_payment(&self, payment: NewPayment) -> Result<Payment, PaymentsServiceError>;

    /// Retrieves a single payment.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentsServiceError::NotFound`] for an unknown id.
    async fn get_payment(&self, payment: PaymentUuid) -> Result<Payment, PaymentsServiceError>;
}

/// Payments held in a process-local map, settled by a spawned task.
pub struct InMemoryPaymentsService {
    payments: Arc<RwLock<HashMap<PaymentUuid, Payment>>>,
    orders: Arc<dyn OrdersService>,
    policy: SettlementPolicy,
}

impl InMemoryPaymentsService {
    #[must_use]
    pub fn new(orders: Arc<dyn OrdersService>, policy: SettlementPolicy) -> Self {
        Self {
            payments: Arc::new(RwLock::new(HashMap::new())),
            orders,
            policy,
        }
    }

    fn draw_success(outcome: SettlementOutcome) -> bool {
        match outcome {
            SettlementOutcome::Random { failure_rate } => {
                rand::thread_rng().gen_range(0.0..1.0) >= failure_rate
            }
            SettlementOutcome::AlwaysSucceed => true,
            SettlementOutcome::AlwaysFail => false,
        }
    }

    async fn settle(
        payments: Arc<RwLock<HashMap<PaymentUuid, Payment>>>,
        orders: Arc<dyn OrdersService>,
        policy: SettlementPolicy,
        payment_id: PaymentUuid,
        order_id: OrderUuid,
    ) {
        tokio::time::sleep(policy.delay).await;

        let succeeded = Self::draw_success(policy.outcome);
        let status = if succeeded {
            PaymentStatus::Completed
        } else {
            PaymentStatus::Failed
        };

        if let Some(payment) = payments.write().await.get_mut(&payment_id) {
            payment.status = status;
            payment.updated_at = Timestamp::now();
        }

        let order_status = if succeeded {
            OrderStatus::Paid
        } else {
            OrderStatus::PaymentFailed
        };

        // An order that disappeared before settlement is logged and skipped.
        match orders.set_status(order_id, order_status).await {
            Ok(_) => info!(payment = %payment_id, order = %order_id, ?status, "payment settled"),
            Err(OrdersServiceError::NotFound) => {
                warn!(payment = %payment_id, order = %order_id, "settled payment for unknown order");
            }
            Err(error) => {
                warn!(payment = %payment_id, order = %order_id, %error, "failed to update order");
            }
        }
    }
}

impl std::fmt::Debug for InMemoryPaymentsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryPaymentsService")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl PaymentsService for InMemoryPaymentsService {
    async fn submit_payment(&self, payment: NewPayment) -> Result<Payment, PaymentsServiceError> {
        let (Some(order_id), Some(payment_method), Some(amount)) =
            (payment.order_id, payment.payment_method, payment.amount)
        else {
            return Err(PaymentsServiceError::MissingRequiredData);
        };

        let now = Timestamp::now();
        let payment = Payment {
            id: PaymentUuid::now_v7(),
            order_id,
            payment_method,
            amount,
            status: PaymentStatus::Processing,
            created_at: now,
            updated_at: now,
        };

        self.payments.write().await.insert(payment.id, payment.clone());

        info!(payment = %payment.id, order = %order_id, %amount, "payment processing started");

        tokio::spawn(Self::settle(
            Arc::clone(&self.payments),
            Arc::clone(&self.orders),
            self.policy,
            payment.id,
            order_id,
        ));

        Ok(payment)
    }

    async fn get_payment(&self, payment: PaymentUuid) -> Result<Payment, PaymentsServiceError> {
        self.payments
            .read()
            .await
            .get(&payment)
            .cloned()
            .ok_or(PaymentsServiceError::NotFound)
    }
}

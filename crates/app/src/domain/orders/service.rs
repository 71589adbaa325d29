//! Orders service.

use std::collections::HashMap;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tokio::sync::RwLock;
use tracing::info;

use super::errors::OrdersServiceError;
use super::models::{NewOrder, Order, OrderStatus, OrderUuid};

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Creates an order in `pending` status.
    ///
    /// # Errors
    ///
    /// Returns [`OrdersServiceError::MissingRequiredData`] when a required
    /// field is absent.
    async fn create_order(&self, order: NewOrder) -> Result<Order, OrdersServiceError>;

    /// Retrieves a single order.
    ///
    /// # Errors
    ///
    /// Returns [`OrdersServiceError::NotFound`] for an unknown id.
    async fn get_order(&self, order: OrderUuid) -> Result<Order, OrdersServiceError>;

    /// Replaces an order's status.
    ///
    /// # Errors
    ///
    /// Returns [`OrdersServiceError::NotFound`] for an unknown id.
    async fn set_status(
        &self,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<Order, OrdersServiceError>;
}

/// Orders held in a process-local map. Everything is gone on restart.
#[derive(Debug, Default)]
pub struct InMemoryOrdersService {
    orders: RwLock<HashMap<OrderUuid, Order>>,
}

impl InMemoryOrdersService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrdersService for InMemoryOrdersService {
    async fn create_order(&self, order: NewOrder) -> Result<Order, OrdersServiceError> {
        let (Some(items), Some(customer_info), Some(total_amount)) =
            (order.items, order.customer_info, order.total_amount)
        else {
            return Err(OrdersServiceError::MissingRequiredData);
        };

        let now = Timestamp::now();
        let order = Order {
            id: OrderUuid::now_v7(),
            items,
            customer_info,
            total_amount,
            status: OrderStatus::Pending,
            created_at: now,
            updated_at: now,
        };

        self.orders.write().await.insert(order.id, order.clone());

        info!(order = %order.id, %total_amount, "order created");

        Ok(order)
    }

    async fn get_order(&self, order: OrderUuid) -> Result<Order, OrdersServiceError> {
        self.orders
            .read()
            .await
            .get(&order)
            .cloned()
            .ok_or(OrdersServiceError::NotFound)
    }

    async fn set_status(
        &self,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<Order, OrdersServiceError> {
        let mut orders = self.orders.write().await;
        let order = orders.get_mut(&order).ok_or(OrdersServiceError::NotFound)?;

        order.status = status;
        order.updated_at = Timestamp::now();

        Ok(order.clone())
    }
}

//! App Context

use std::sync::Arc;

use crate::domain::{
    catalog::{CatalogService, StaticCatalogService},
    orders::{InMemoryOrdersService, OrdersService},
    payments::{InMemoryPaymentsService, PaymentsService, SettlementPolicy},
};

/// The services behind the storefront, shared across handlers.
#[derive(Clone)]
pub struct AppContext {
    /// The immutable product catalog.
    pub catalog: Arc<dyn CatalogService>,

    /// The volatile order collection.
    pub orders: Arc<dyn OrdersService>,

    /// The volatile payment collection with simulated settlement.
    pub payments: Arc<dyn PaymentsService>,
}

impl AppContext {
    /// Builds the in-memory storefront: the embedded catalog, volatile
    /// orders and payments settled under `policy`.
    #[must_use]
    pub fn in_memory(policy: SettlementPolicy) -> Self {
        let orders: Arc<dyn OrdersService> = Arc::new(InMemoryOrdersService::new());

        Self {
            catalog: Arc::new(StaticCatalogService::new()),
            payments: Arc::new(InMemoryPaymentsService::new(Arc::clone(&orders), policy)),
            orders,
        }
    }
}

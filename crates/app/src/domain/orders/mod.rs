//! Orders.

pub mod errors;
pub mod models;
pub mod service;

pub use errors::OrdersServiceError;
pub use models::{CustomerDetails, NewOrder, Order, OrderLine, OrderStatus, OrderUuid};
pub use service::{InMemoryOrdersService, MockOrdersService, OrdersService};

//! Storefront
//!
//! Client-side core for the storefront: the cart model and manager, display
//! price parsing, durable cart snapshots, and the checkout orchestrator that
//! drives the catalog/order service.

pub mod cart;
pub mod checkout;
pub mod prelude;
pub mod prices;
pub mod storage;
pub mod uuids;

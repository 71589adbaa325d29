//! The product catalog.

mod data;
pub mod errors;
pub mod models;
pub mod service;

pub use errors::CatalogServiceError;
pub use models::{Category, Product};
pub use service::{CatalogService, MockCatalogService, StaticCatalogService};

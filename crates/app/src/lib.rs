//! Storefront domain services and application context.

pub mod context;
pub mod domain;

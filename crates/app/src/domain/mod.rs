//! Domain modules.

pub mod catalog;
pub mod orders;
pub mod payments;

//! Product handlers.

pub(crate) mod category;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod search;

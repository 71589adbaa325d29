//! Product routes.

pub(crate) mod errors;
pub(crate) mod models;

mod handlers;

pub(crate) use handlers::{category, get, index, search};

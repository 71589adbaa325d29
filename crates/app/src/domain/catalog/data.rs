//! The embedded catalog fixture.

use serde::Deserialize;
use tracing::error;

use super::models::{Category, Product};

const CATALOG_JSON: &str = include_str!("../../../../../fixtures/catalog.json");

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CatalogData {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
}

/// Parses the embedded fixture.
///
/// An unparsable fixture yields an empty catalog rather than refusing to
/// start; the storefront still serves orders and payments.
pub(crate) fn load() -> CatalogData {
    match serde_json::from_str(CATALOG_JSON) {
        Ok(data) => data,
        Err(parse_error) => {
            error!(%parse_error, "failed to parse the embedded catalog, serving an empty one");

            CatalogData::default()
        }
    }
}

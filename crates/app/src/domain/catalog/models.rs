//! Catalog models.

use serde::{Deserialize, Serialize};

/// A product as the catalog fixture and the wire carry it.
///
/// `price` stays a display string ("$2.99"); clients parse the numeric
/// portion when they need arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: String,
    pub unit: String,
    pub image: String,
    pub description: String,
    pub rating: f32,
    pub reviews: u32,
    /// Units on hand, when the fixture tracks it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    /// Longer marketing copy for a detail view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub category: String,
    pub tags: Vec<String>,
}

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
}

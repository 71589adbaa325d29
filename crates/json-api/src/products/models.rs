//! Product wire models.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use storefront_app::domain::catalog::{Category, Product};

/// A product as the API serves it.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductView {
    pub id: String,
    pub name: String,
    /// Display price, such as "$2.99".
    pub price: String,
    pub unit: String,
    pub image: String,
    pub description: String,
    pub rating: f32,
    pub reviews: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub category: String,
    pub tags: Vec<String>,
}

impl From<Product> for ProductView {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            unit: product.unit,
            image: product.image,
            description: product.description,
            rating: product.rating,
            reviews: product.reviews,
            stock: product.stock,
            details: product.details,
            category: product.category,
            tags: product.tags,
        }
    }
}

/// A category as the API serves it.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CategoryView {
    pub id: String,
    pub name: String,
    pub icon: String,
}

impl From<Category> for CategoryView {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            icon: category.icon,
        }
    }
}

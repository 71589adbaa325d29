//! Catalog service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use super::data::{self, CatalogData};
use super::errors::CatalogServiceError;
use super::models::{Category, Product};

#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Retrieves all products.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogServiceError`] if the catalog cannot be read.
    async fn list_products(&self) -> Result<Vec<Product>, CatalogServiceError>;

    /// Retrieves a single product.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogServiceError::NotFound`] for an unknown id.
    async fn get_product(&self, id: &str) -> Result<Product, CatalogServiceError>;

    /// Retrieves the products in a category. An unknown category is just an
    /// empty list.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogServiceError`] if the catalog cannot be read.
    async fn products_in_category(
        &self,
        category: &str,
    ) -> Result<Vec<Product>, CatalogServiceError>;

    /// Retrieves all categories.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogServiceError`] if the catalog cannot be read.
    async fn list_categories(&self) -> Result<Vec<Category>, CatalogServiceError>;

    /// Case-insensitive substring search over name, description and tags.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogServiceError`] if the catalog cannot be read.
    async fn search_products(&self, query: &str) -> Result<Vec<Product>, CatalogServiceError>;
}

/// The catalog baked into the binary at build time.
#[derive(Debug, Clone)]
pub struct StaticCatalogService {
    data: Arc<CatalogData>,
}

impl StaticCatalogService {
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: Arc::new(data::load()),
        }
    }
}

impl Default for StaticCatalogService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogService for StaticCatalogService {
    async fn list_products(&self) -> Result<Vec<Product>, CatalogServiceError> {
        Ok(self.data.products.clone())
    }

    async fn get_product(&self, id: &str) -> Result<Product, CatalogServiceError> {
        self.data
            .products
            .iter()
            .find(|product| product.id == id)
            .cloned()
            .ok_or(CatalogServiceError::NotFound)
    }

    async fn products_in_category(
        &self,
        category: &str,
    ) -> Result<Vec<Product>, CatalogServiceError> {
        Ok(self
            .data
            .products
            .iter()
            .filter(|product| product.category == category)
            .cloned()
            .collect())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, CatalogServiceError> {
        Ok(self.data.categories.clone())
    }

    async fn search_products(&self, query: &str) -> Result<Vec<Product>, CatalogServiceError> {
        let needle = query.to_lowercase();

        Ok(self
            .data
            .products
            .iter()
            .filter(|product| {
                product.name.to_lowercase().contains(&needle)
                    || product.description.to_lowercase().contains(&needle)
                    || product
                        .tags
                        .iter()
                        .any(|tag| tag.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect())
    }
}

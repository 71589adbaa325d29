//! HTTP client for the storefront JSON API.

use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;

use storefront::checkout::gateway::{
    CheckoutGateway, GatewayError, NewOrderRequest, PaymentRequest, PaymentStatusView,
};

/// A product as the API serves it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductDto {
    pub id: String,
    pub name: String,
    pub price: String,
    pub unit: String,
    pub image: String,
    pub rating: f32,
    pub category: String,
}

/// A category as the API serves it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CategoryDto {
    pub id: String,
    pub name: String,
    pub icon: String,
}

/// Thin wrapper over the storefront REST API.
#[derive(Debug, Clone)]
pub(crate) struct ApiClient {
    base: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub(crate) fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base.trim_end_matches('/'))
    }

    pub(crate) async fn products(&self) -> anyhow::Result<Vec<ProductDto>> {
        Ok(self
            .http
            .get(self.url("/api/products"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?)
    }

    pub(crate) async fn products_in_category(
        &self,
        category: &str,
    ) -> anyhow::Result<Vec<ProductDto>> {
        Ok(self
            .http
            .get(self.url(&format!("/api/products/category/{category}")))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?)
    }

    pub(crate) async fn search(&self, query: &str) -> anyhow::Result<Vec<ProductDto>> {
        Ok(self
            .http
            .get(self.url(&format!("/api/products/search/{query}")))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?)
    }

    pub(crate) async fn product(&self, id: &str) -> anyhow::Result<ProductDto> {
        Ok(self
            .http
            .get(self.url(&format!("/api/products/{id}")))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?)
    }

    pub(crate) async fn categories(&self) -> anyhow::Result<Vec<CategoryDto>> {
        Ok(self
            .http
            .get(self.url("/api/categories"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?)
    }
}

/// The checkout gateway over the REST API.
#[derive(Debug)]
pub(crate) struct HttpCheckoutGateway {
    client: ApiClient,
}

impl HttpCheckoutGateway {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

fn transport(error: reqwest::Error) -> GatewayError {
    GatewayError::Transport(error.to_string())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderCreatedDto {
    order_id: Uuid,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PaymentAcceptedDto {
    payment_id: Uuid,
}

#[async_trait]
impl CheckoutGateway for HttpCheckoutGateway {
    async fn create_order(&self, order: NewOrderRequest) -> Result<Uuid, GatewayError> {
        let response = self
            .client
            .http
            .post(self.client.url("/api/orders"))
            .json(&order)
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            return Err(GatewayError::Rejected(format!(
                "order rejected with status {}",
                response.status()
            )));
        }

        let created: OrderCreatedDto = response.json().await.map_err(transport)?;

        Ok(created.order_id)
    }

    async fn submit_payment(&self, payment: PaymentRequest) -> Result<Uuid, GatewayError> {
        let response = self
            .client
            .http
            .post(self.client.url("/api/payments"))
            .json(&payment)
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            return Err(GatewayError::Rejected(format!(
                "payment rejected with status {}",
                response.status()
            )));
        }

        let accepted: PaymentAcceptedDto = response.json().await.map_err(transport)?;

        Ok(accepted.payment_id)
    }

    async fn payment_status(&self, payment_id: Uuid) -> Result<PaymentStatusView, GatewayError> {
        let response = self
            .client
            .http
            .get(self.client.url(&format!("/api/payments/{payment_id}")))
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            return Err(GatewayError::Rejected(format!(
                "payment status check failed with status {}",
                response.status()
            )));
        }

        response.json().await.map_err(transport)
    }
}

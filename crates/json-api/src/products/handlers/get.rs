//! Get Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::DepotExt,
    products::{errors::into_status_error, models::ProductView},
    state::State,
};

/// Get Product Handler
#[endpoint(
    tags("products"),
    summary = "Get a single product",
    responses(
        (status_code = StatusCode::OK, description = "The product"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductView>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .catalog
        .get_product(&product.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::domain::catalog::{CatalogServiceError, MockCatalogService};

    use crate::test_helpers::{catalog_service, make_product};

    use super::*;

    fn make_service(catalog: MockCatalogService) -> Service {
        catalog_service(
            catalog,
            Router::with_path("api/products/{product}").get(handler),
        )
    }

    #[tokio::test]
    async fn test_get_product_success() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog
            .expect_get_product()
            .once()
            .withf(|id| id == "organic-bananas")
            .return_once(|_| Ok(make_product("organic-bananas")));

        let view: ProductView = TestClient::get("http://example.com/api/products/organic-bananas")
            .send(&make_service(catalog))
            .await
            .take_json()
            .await?;

        assert_eq!(view.id, "organic-bananas");
        assert_eq!(view.price, "$2.99");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_product_unknown_returns_404() {
        let mut catalog = MockCatalogService::new();

        catalog
            .expect_get_product()
            .once()
            .return_once(|_| Err(CatalogServiceError::NotFound));

        let res = TestClient::get("http://example.com/api/products/no-such-product")
            .send(&make_service(catalog))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }
}

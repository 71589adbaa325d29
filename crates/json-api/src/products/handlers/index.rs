//! Product Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::DepotExt,
    products::{errors::into_status_error, models::ProductView},
    state::State,
};

/// List Products Handler
#[endpoint(
    tags("products"),
    summary = "List all products",
    responses(
        (status_code = StatusCode::OK, description = "All products"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<ProductView>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .catalog
        .list_products()
        .await
        .map_err(into_status_error)?;

    Ok(Json(products.into_iter().map(ProductView::from).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::domain::catalog::MockCatalogService;

    use crate::test_helpers::{catalog_service, make_product};

    use super::*;

    fn make_service(catalog: MockCatalogService) -> Service {
        catalog_service(catalog, Router::with_path("api/products").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_all_products() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog.expect_list_products().once().return_once(|| {
            Ok(vec![
                make_product("organic-bananas"),
                make_product("sourdough-loaf"),
            ])
        });

        let views: Vec<ProductView> = TestClient::get("http://example.com/api/products")
            .send(&make_service(catalog))
            .await
            .take_json()
            .await?;

        assert_eq!(views.len(), 2);
        assert_eq!(
            views.first().map(|view| view.id.as_str()),
            Some("organic-bananas")
        );

        Ok(())
    }
}

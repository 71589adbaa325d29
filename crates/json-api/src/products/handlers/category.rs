//! Products By Category Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::DepotExt,
    products::{errors::into_status_error, models::ProductView},
    state::State,
};

/// Products By Category Handler
///
/// An unknown category is an empty list, not a 404.
#[endpoint(
    tags("products"),
    summary = "List products in a category",
    responses(
        (status_code = StatusCode::OK, description = "Products in the category"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    category: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<Vec<ProductView>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .catalog
        .products_in_category(&category.into_inner())
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
        catalog_service(
            catalog,
            Router::with_path("api/products/category/{category}").get(handler),
        )
    }

    #[tokio::test]
    async fn test_category_filters_products() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog
            .expect_products_in_category()
            .once()
            .withf(|category| category == "bakery")
            .return_once(|_| Ok(vec![make_product("sourdough-loaf")]));

        let views: Vec<ProductView> =
            TestClient::get("http://example.com/api/products/category/bakery")
                .send(&make_service(catalog))
                .await
                .take_json()
                .await?;

        assert_eq!(views.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_category_is_empty_list() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog
            .expect_products_in_category()
            .once()
            .return_once(|_| Ok(vec![]));

        let views: Vec<ProductView> =
            TestClient::get("http://example.com/api/products/category/nope")
                .send(&make_service(catalog))
                .await
                .take_json()
                .await?;

        assert!(views.is_empty());

        Ok(())
    }
}

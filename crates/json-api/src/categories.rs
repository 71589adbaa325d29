//! Category Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::DepotExt,
    products::{errors::into_status_error, models::CategoryView},
    state::State,
};

/// List Categories Handler
#[endpoint(
    tags("categories"),
    summary = "List all categories",
    responses(
        (status_code = StatusCode::OK, description = "All categories"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<CategoryView>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let categories = state
        .app
        .catalog
        .list_categories()
        .await
        .map_err(into_status_error)?;

    Ok(Json(
        categories.into_iter().map(CategoryView::from).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::domain::catalog::{Category, MockCatalogService};

    use crate::test_helpers::catalog_service;

    use super::*;

    #[tokio::test]
    async fn test_categories_index() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog.expect_list_categories().once().return_once(|| {
            Ok(vec![Category {
                id: "bakery".to_string(),
                name: "Bakery".to_string(),
                icon: "🥐".to_string(),
            }])
        });

        let views: Vec<CategoryView> = TestClient::get("http://example.com/api/categories")
            .send(&catalog_service(
                catalog,
                Router::with_path("api/categories").get(handler),
            ))
            .await
            .take_json()
            .await?;

        assert_eq!(
            views.first().map(|view| view.id.as_str()),
            Some("bakery")
        );

        Ok(())
    }
}

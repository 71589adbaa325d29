//! Product Search Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::DepotExt,
    products::{errors::into_status_error, models::ProductView},
    state::State,
};

/// Product Search Handler
#[endpoint(
    tags("products"),
    summary = "Search products by name, description or tag",
    responses(
        (status_code = StatusCode::OK, description = "Matching products"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    query: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<Vec<ProductView>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .catalog
        .search_products(&query.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(products.into_iter().map(ProductView::from).collect()))
}

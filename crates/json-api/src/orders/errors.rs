//! Errors

use salvo::http::StatusError;

use storefront_app::domain::orders::OrdersServiceError;

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::NotFound => StatusError::not_found().brief("Order not found"),
        OrdersServiceError::MissingRequiredData => {
            StatusError::bad_request().brief("Missing required fields")
        }
    }
}

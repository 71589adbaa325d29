//! Errors

use salvo::http::StatusError;

use storefront_app::domain::payments::PaymentsServiceError;

pub(crate) fn into_status_error(error: PaymentsServiceError) -> StatusError {
    match error {
        PaymentsServiceError::NotFound => StatusError::not_found().brief("Payment not found"),
        PaymentsServiceError::MissingRequiredData => {
            StatusError::bad_request().brief("Missing required payment information")
        }
    }
}

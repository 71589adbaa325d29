//! Payments service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaymentsServiceError {
    #[error("payment not found")]
    NotFound,

    #[error("missing required payment information")]
    MissingRequiredData,
}

//! Get Payment Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use storefront_app::domain::payments::PaymentUuid;

use crate::{
    extensions::DepotExt,
    payments::{errors::into_status_error, models::PaymentView},
    state::State,
};

/// Get Payment Handler
///
/// Clients poll this for the settlement outcome.
#[endpoint(
    tags("payments"),
    summary = "Get a payment's settlement status",
    responses(
        (status_code = StatusCode::OK, description = "The payment"),
        (status_code = StatusCode::NOT_FOUND, description = "Payment not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    payment: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<PaymentView>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let payment = state
        .app
        .payments
        .get_payment(PaymentUuid::from_uuid(payment.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(payment.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::domain::payments::{MockPaymentsService, PaymentsServiceError};

    use crate::test_helpers::{make_payment, payments_service};

    use super::*;

    fn make_service(payments: MockPaymentsService) -> Service {
        payments_service(
            payments,
            Router::with_path("api/payments/{payment}").get(handler),
        )
    }

    #[tokio::test]
    async fn test_get_payment_success() -> TestResult {
        let payment = make_payment();
        let payment_id = payment.id;

        let mut payments = MockPaymentsService::new();

        payments
            .expect_get_payment()
            .once()
            .withf(move |id| *id == payment_id)
            .return_once(move |_| Ok(payment));

        payments.expect_submit_payment().never();

        let view: PaymentView =
            TestClient::get(format!("http://example.com/api/payments/{payment_id}"))
                .send(&make_service(payments))
                .await
                .take_json()
                .await?;

        assert_eq!(view.id, payment_id.into_uuid());
        assert_eq!(view.status, "processing");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_payment_unknown_returns_404() {
        let mut payments = MockPaymentsService::new();

        payments
            .expect_get_payment()
            .once()
            .return_once(|_| Err(PaymentsServiceError::NotFound));

        payments.expect_submit_payment().never();

        let res = TestClient::get(format!(
            "http://example.com/api/payments/{}",
            Uuid::now_v7()
        ))
        .send(&make_service(payments))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }
}

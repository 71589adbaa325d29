//! Create Payment Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    extensions::DepotExt,
    payments::{
        errors::into_status_error,
        models::{CreatePaymentRequest, PaymentAcceptedResponse},
    },
    state::State,
};

/// Create Payment Handler
///
/// Accepts the payment and answers immediately; settlement happens later in
/// the background.
#[endpoint(
    tags("payments"),
    summary = "Submit a payment for an order",
    responses(
        (status_code = StatusCode::OK, description = "Payment accepted for processing"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing required payment information"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreatePaymentRequest>,
    depot: &mut Depot,
) -> Result<Json<PaymentAcceptedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let payment = state
        .app
        .payments
        .submit_payment(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(PaymentAcceptedResponse {
        success: true,
        payment_id: payment.id.into_uuid(),
        message: "Payment processing started".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;
    use uuid::Uuid;

    use storefront_app::domain::payments::{MockPaymentsService, PaymentsServiceError};

    use crate::test_helpers::{make_payment, payments_service};

    use super::*;

    fn make_service(payments: MockPaymentsService) -> Service {
        payments_service(payments, Router::with_path("api/payments").post(handler))
    }

    #[tokio::test]
    async fn test_create_payment_accepted() -> TestResult {
        let payment = make_payment();
        let payment_id = payment.id.into_uuid();

        let mut payments = MockPaymentsService::new();

        payments
            .expect_submit_payment()
            .once()
            .withf(|new| {
                new.order_id.is_some() && new.payment_method.is_some() && new.amount.is_some()
            })
            .return_once(move |_| Ok(payment));

        payments.expect_get_payment().never();

        let mut res = TestClient::post("http://example.com/api/payments")
            .json(&json!({
                "orderId": Uuid::now_v7(),
                "paymentMethod": "card",
                "cardInfo": { "number": "4242424242424242", "expiry": "12/30", "cvv": "123" },
                "amount": 8.97,
            }))
            .send(&make_service(payments))
            .await;

        let body: PaymentAcceptedResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.success, "the response should report success");
        assert_eq!(body.payment_id, payment_id);
        assert_eq!(body.message, "Payment processing started");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_payment_missing_fields_returns_400() -> TestResult {
        let mut payments = MockPaymentsService::new();

        payments
            .expect_submit_payment()
            .once()
            .return_once(|_| Err(PaymentsServiceError::MissingRequiredData));

        payments.expect_get_payment().never();

        let res = TestClient::post("http://example.com/api/payments")
            .json(&json!({ "paymentMethod": "card" }))
            .send(&make_service(payments))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}

//! The checkout form and its validation rules.

use serde::{Deserialize, Serialize};

/// Who the order is for and where it goes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerInfo {
    /// The customer's full name.
    pub name: String,

    /// The customer's email address.
    pub email: String,

    /// The delivery address.
    pub address: String,
}

/// Card details for a card payment.
///
/// Never serialized into order payloads, only into the payment request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDetails {
    /// The card number, digits only.
    pub number: String,

    /// The expiry in MM/YY form.
    pub expiry: String,

    /// The card verification value.
    pub cvv: String,
}

/// A single validation failure, keyed by the offending field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The field that failed.
    pub field: &'static str,

    /// What was wrong with it.
    pub message: &'static str,
}

/// Everything the customer fills in before paying.
#[derive(Debug, Clone)]
pub struct CheckoutForm {
    /// The customer details.
    pub customer: CustomerInfo,

    /// The payment method name, such as `card`.
    pub payment_method: String,

    /// The card details.
    pub card: CardDetails,
}

impl CheckoutForm {
    /// Validates the whole form, collecting every failure rather than
    /// stopping at the first.
    ///
    /// # Errors
    ///
    /// Returns one [`FieldError`] per failing field.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.customer.name.trim().is_empty() {
            errors.push(FieldError {
                field: "name",
                message: "name is required",
            });
        }

        if self.customer.email.trim().is_empty() {
            errors.push(FieldError {
                field: "email",
                message: "email is required",
            });
        } else if !self.customer.email.contains('@') {
            errors.push(FieldError {
                field: "email",
                message: "email must contain @",
            });
        }

        if self.customer.address.trim().is_empty() {
            errors.push(FieldError {
                field: "address",
                message: "address is required",
            });
        }

        if self.payment_method.trim().is_empty() {
            errors.push(FieldError {
                field: "paymentMethod",
                message: "payment method is required",
            });
        }

        let digits = self.card.number.chars().filter(char::is_ascii_digit).count();
        if !(12..=19).contains(&digits) {
            errors.push(FieldError {
                field: "cardNumber",
                message: "card number must have 12 to 19 digits",
            });
        }

        if self.card.expiry.trim().is_empty() {
            errors.push(FieldError {
                field: "cardExpiry",
                message: "expiry is required",
            });
        }

        let cvv_digits = self.card.cvv.chars().filter(char::is_ascii_digit).count();
        if cvv_digits != self.card.cvv.len() || !(3..=4).contains(&cvv_digits) {
            errors.push(FieldError {
                field: "cardCvv",
                message: "cvv must be 3 or 4 digits",
            });
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> CheckoutForm {
        CheckoutForm {
            customer: CustomerInfo {
                name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                address: "1 Analytical Way".to_string(),
            },
            payment_method: "card".to_string(),
            card: CardDetails {
                number: "4242424242424242".to_string(),
                expiry: "12/30".to_string(),
                cvv: "123".to_string(),
            },
        }
    }

    #[test]
    fn valid_form_passes() -> testresult::TestResult {
        valid_form()
            .validate()
            .map_err(|errors| format!("{errors:?}"))?;

        Ok(())
    }

    #[test]
    fn card_number_with_spaces_passes() -> testresult::TestResult {
        let mut form = valid_form();
        form.card.number = "4242 4242 4242 4242".to_string();

        form.validate().map_err(|errors| format!("{errors:?}"))?;

        Ok(())
    }

    #[test]
    fn collects_every_failing_field() -> testresult::TestResult {
        let form = CheckoutForm {
            customer: CustomerInfo {
                name: String::new(),
                email: "not-an-email".to_string(),
                address: String::new(),
            },
            payment_method: "card".to_string(),
            card: CardDetails {
                number: "1234".to_string(),
                expiry: String::new(),
                cvv: "12".to_string(),
            },
        };

        let Err(errors) = form.validate() else {
            return Err("expected validation to fail".into());
        };
        let fields: Vec<_> = errors.iter().map(|error| error.field).collect();

        assert_eq!(
            fields,
            vec!["name", "email", "address", "cardNumber", "cardExpiry", "cardCvv"]
        );

        Ok(())
    }

    #[test]
    fn whitespace_only_name_fails() -> testresult::TestResult {
        let mut form = valid_form();
        form.customer.name = "   ".to_string();

        let Err(errors) = form.validate() else {
            return Err("expected validation to fail".into());
        };

        assert_eq!(errors.len(), 1, "only the name should fail");
        assert!(errors.iter().any(|error| error.field == "name"));

        Ok(())
    }

    #[test]
    fn non_digit_cvv_fails() -> testresult::TestResult {
        let mut form = valid_form();
        form.card.cvv = "12a".to_string();

        let Err(errors) = form.validate() else {
            return Err("expected validation to fail".into());
        };

        assert!(errors.iter().any(|error| error.field == "cardCvv"));

        Ok(())
    }
}

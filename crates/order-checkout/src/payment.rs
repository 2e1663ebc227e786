// File: src/payment.rs
// Purpose: Payment choices offered on the checkout form

use serde::{Deserialize, Serialize};

/// One radio option: the label shown and the value stored in `paymentOption`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentOption {
    pub label: String,
    pub value: String,
}

impl PaymentOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Cash, debit and credit
pub fn default_payment_options() -> Vec<PaymentOption> {
    vec![
        PaymentOption::new("Dinheiro", "din"),
        PaymentOption::new("Debito", "deb"),
        PaymentOption::new("Credito", "cre"),
    ]
}

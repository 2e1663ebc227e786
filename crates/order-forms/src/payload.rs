// File: src/payload.rs
// Purpose: Structured data handed to the order service once the form is valid

use serde::{Deserialize, Serialize};

use crate::group::FieldValues;
use crate::schema::fields;

/// One ordered line: how many of which menu item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub quantity: u32,
    pub menu_id: String,
}

impl OrderItem {
    pub fn new(quantity: u32, menu_id: impl Into<String>) -> Self {
        Self {
            quantity,
            menu_id: menu_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub name: String,
    pub email: String,
    pub address: String,
    pub number: String,
    pub optional_address: String,
    pub payment_option: String,
    #[serde(rename = "orderItems")]
    pub items: Vec<OrderItem>,
}

impl SubmissionPayload {
    pub(crate) fn from_values(values: &FieldValues, items: Vec<OrderItem>) -> Self {
        Self {
            name: values.value_or_empty(fields::NAME),
            email: values.value_or_empty(fields::EMAIL),
            address: values.value_or_empty(fields::ADDRESS),
            number: values.value_or_empty(fields::NUMBER),
            optional_address: values.value_or_empty(fields::OPTIONAL_ADDRESS),
            payment_option: values.value_or_empty(fields::PAYMENT_OPTION),
            items,
        }
    }
}

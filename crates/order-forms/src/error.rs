// File: src/error.rs
// Purpose: Error types for the form engine

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use crate::group::GroupError;
use crate::rules::FieldError;

/// Programmer or schema-mismatch errors.
///
/// These never describe bad user input; a correctly wired form does not
/// produce them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown form field: {0}")]
    UnknownField(String),
}

/// The form was submitted while invalid.
///
/// Carries every failing field rule and group rule so the caller can
/// show inline messages.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "camelCase")]
#[error(
    "form is invalid: {} field(s) and {} group rule(s) failing",
    .field_errors.len(),
    .group_errors.len()
)]
pub struct ValidationFailure {
    /// Field key to failing rules, only fields with at least one error
    pub field_errors: BTreeMap<String, Vec<FieldError>>,
    pub group_errors: Vec<GroupError>,
}

impl ValidationFailure {
    /// Get all errors for a specific field
    pub fn errors_for(&self, field: &str) -> Option<&Vec<FieldError>> {
        self.field_errors.get(field)
    }
}

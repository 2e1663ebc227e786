// File: src/state.rs
// Purpose: Derived form snapshot (values, errors, validity)

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::ValidationFailure;
use crate::group::{FieldValues, GroupError};
use crate::rules::{self, FieldError, RuleKind};
use crate::schema::{FieldSpec, FormSchema};

/// Current value and validation result of one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldState {
    pub key: String,
    pub value: String,
    /// Failing rules, in rule order
    pub errors: Vec<FieldError>,
    pub touched: bool,
}

impl FieldState {
    pub(crate) fn evaluate(spec: &FieldSpec, value: &str) -> Self {
        Self {
            key: spec.key.clone(),
            value: value.to_string(),
            errors: rules::evaluate(&spec.rules, value),
            touched: false,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_error(&self, kind: RuleKind) -> bool {
        self.errors.iter().any(|e| e.kind() == kind)
    }

    /// The error to display when only one message fits
    pub fn first_error(&self) -> Option<&FieldError> {
        self.errors.first()
    }

    pub fn error_kinds(&self) -> Vec<RuleKind> {
        self.errors.iter().map(FieldError::kind).collect()
    }
}

/// Snapshot of the whole form.
///
/// Fully determined by the schema, the field values and the touched flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    /// One entry per schema field, in declaration order
    pub fields: Vec<FieldState>,
    pub group_errors: Vec<GroupError>,
    pub valid: bool,
}

impl FormState {
    /// Compute the state from scratch. Fields absent from `values` are
    /// evaluated as empty. Every field comes back untouched.
    pub fn evaluate(schema: &FormSchema, values: &FieldValues) -> Self {
        let fields = schema
            .fields()
            .iter()
            .map(|spec| FieldState::evaluate(spec, values.get(&spec.key).unwrap_or_default()))
            .collect();

        let mut state = Self {
            fields,
            group_errors: Vec::new(),
            valid: false,
        };
        state.refresh_groups(schema);
        state
    }

    /// Re-run every group validator and recompute `valid`
    pub(crate) fn refresh_groups(&mut self, schema: &FormSchema) {
        let values = self.values();
        self.group_errors = schema
            .group_validators()
            .iter()
            .filter_map(|validator| validator.validate(&values))
            .collect();
        self.valid = self.fields.iter().all(FieldState::is_valid) && self.group_errors.is_empty();
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn field(&self, key: &str) -> Option<&FieldState> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn has_group_error(&self, error: &GroupError) -> bool {
        self.group_errors.contains(error)
    }

    /// Current values keyed by field key
    pub fn values(&self) -> FieldValues {
        self.fields
            .iter()
            .map(|f| (f.key.as_str(), f.value.as_str()))
            .collect()
    }

    /// Errors of the fields that currently fail, keyed by field key
    pub fn field_errors(&self) -> BTreeMap<String, Vec<FieldError>> {
        self.fields
            .iter()
            .filter(|f| !f.is_valid())
            .map(|f| (f.key.clone(), f.errors.clone()))
            .collect()
    }

    pub(crate) fn to_failure(&self) -> ValidationFailure {
        ValidationFailure {
            field_errors: self.field_errors(),
            group_errors: self.group_errors.clone(),
        }
    }
}

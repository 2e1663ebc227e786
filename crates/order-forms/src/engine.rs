// File: src/engine.rs
// Purpose: Form engine - applies user input and keeps the FormState current

use crate::error::{FormError, ValidationFailure};
use crate::group::FieldValues;
use crate::payload::{OrderItem, SubmissionPayload};
use crate::rules;
use crate::schema::FormSchema;
use crate::state::FormState;

/// Live form bound to a schema.
///
/// The engine expects exclusive, sequential access: one input event is
/// applied completely before the next one arrives.
#[derive(Debug, Clone)]
pub struct FormEngine {
    schema: FormSchema,
    state: FormState,
}

impl FormEngine {
    /// Create the form with every field at its initial value, untouched
    pub fn new(schema: FormSchema) -> Self {
        let state = Self::initial_state(&schema);
        Self { schema, state }
    }

    fn initial_state(schema: &FormSchema) -> FormState {
        let values: FieldValues = schema
            .fields()
            .iter()
            .map(|f| (f.key.as_str(), f.initial_value.as_str()))
            .collect();
        FormState::evaluate(schema, &values)
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn current_state(&self) -> &FormState {
        &self.state
    }

    /// Replace a field's value and revalidate.
    ///
    /// The field's own rules run again, then every group validator.
    pub fn set_value(
        &mut self,
        key: &str,
        value: impl Into<String>,
    ) -> Result<&FormState, FormError> {
        let index = self.index_of(key)?;
        let spec = &self.schema.fields()[index];
        let value = value.into();

        let field = &mut self.state.fields[index];
        field.errors = rules::evaluate(&spec.rules, &value);
        field.value = value;

        self.state.refresh_groups(&self.schema);

        tracing::debug!(
            "Field {} updated: {} error(s), form valid: {}",
            key,
            self.state.fields[index].errors.len(),
            self.state.valid
        );

        Ok(&self.state)
    }

    /// Record a blur on the field. Validation results do not change.
    pub fn mark_touched(&mut self, key: &str) -> Result<&FormState, FormError> {
        let index = self.index_of(key)?;
        self.state.fields[index].touched = true;
        Ok(&self.state)
    }

    /// Return to the initial values, dropping every edit and touched flag
    pub fn reset(&mut self) {
        self.state = Self::initial_state(&self.schema);
    }

    /// Build the submission payload if the form is valid.
    ///
    /// Does not mark fields touched or change any state.
    pub fn try_submit(
        &self,
        items: impl IntoIterator<Item = OrderItem>,
    ) -> Result<SubmissionPayload, ValidationFailure> {
        if !self.state.is_valid() {
            return Err(self.state.to_failure());
        }

        Ok(SubmissionPayload::from_values(
            &self.state.values(),
            items.into_iter().collect(),
        ))
    }

    fn index_of(&self, key: &str) -> Result<usize, FormError> {
        self.schema.position(key).ok_or_else(|| {
            tracing::error!("Form has no field named {}", key);
            FormError::UnknownField(key.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{FieldError, RuleKind};
    use crate::schema::{fields, order_form_schema, FieldSpec};
    use crate::GroupError;
    use pretty_assertions::assert_eq;

    fn filled_form() -> FormEngine {
        let mut form = FormEngine::new(order_form_schema());
        for (key, value) in [
            (fields::NAME, "Maria Silva"),
            (fields::EMAIL, "maria@example.com"),
            (fields::EMAIL_CONFIRMATION, "maria@example.com"),
            (fields::ADDRESS, "Rua das Flores"),
            (fields::NUMBER, "123"),
            (fields::PAYMENT_OPTION, "din"),
        ] {
            form.set_value(key, value).unwrap();
        }
        form
    }

    #[test]
    fn test_new_form_uses_initial_values() {
        let schema = FormSchema::builder()
            .field(FieldSpec::new("city").initial_value("Lisboa").rule(crate::Validator::Required))
            .build();
        let form = FormEngine::new(schema);

        let city = form.current_state().field("city").unwrap();
        assert_eq!(city.value, "Lisboa");
        assert!(!city.touched);
        assert!(form.current_state().is_valid());
    }

    #[test]
    fn test_filled_form_is_valid() {
        let form = filled_form();
        assert!(form.current_state().is_valid());
        assert!(form.current_state().group_errors.is_empty());
    }

    #[test]
    fn test_unknown_field() {
        let mut form = FormEngine::new(order_form_schema());
        assert_eq!(
            form.set_value("phone", "123").unwrap_err(),
            FormError::UnknownField("phone".to_string())
        );
        assert!(form.mark_touched("phone").is_err());
    }

    #[test]
    fn test_changing_either_email_reevaluates_group() {
        let mut form = filled_form();

        form.set_value(fields::EMAIL_CONFIRMATION, "maria@example.org").unwrap();
        assert!(form.current_state().has_group_error(&GroupError::EMAIL_NOT_MATCH));
        assert!(!form.current_state().is_valid());

        form.set_value(fields::EMAIL, "maria@example.org").unwrap();
        assert!(form.current_state().group_errors.is_empty());
        assert!(form.current_state().is_valid());
    }

    #[test]
    fn test_unrelated_field_change_keeps_group_error() {
        let mut form = filled_form();
        form.set_value(fields::EMAIL, "other@example.com").unwrap();
        form.set_value(fields::NAME, "Maria Souza").unwrap();

        assert_eq!(
            form.current_state().group_errors,
            vec![GroupError::EMAIL_NOT_MATCH]
        );
    }

    #[test]
    fn test_mark_touched_keeps_errors() {
        let mut form = FormEngine::new(order_form_schema());
        let before = form.current_state().field(fields::NAME).unwrap().errors.clone();

        let state = form.mark_touched(fields::NAME).unwrap();
        let name = state.field(fields::NAME).unwrap();
        assert!(name.touched);
        assert_eq!(name.errors, before);
    }

    #[test]
    fn test_set_value_matches_full_recomputation() {
        let mut form = filled_form();
        form.set_value(fields::NUMBER, "12a").unwrap();
        form.set_value(fields::EMAIL, "x@y").unwrap();

        let recomputed = FormState::evaluate(form.schema(), &form.current_state().values());
        assert_eq!(form.current_state(), &recomputed);
    }

    #[test]
    fn test_try_submit_invalid_has_no_side_effect() {
        let mut form = filled_form();
        form.set_value(fields::ADDRESS, "").unwrap();
        let before = form.current_state().clone();

        let failure = form.try_submit(Vec::new()).unwrap_err();
        assert_eq!(
            failure.errors_for(fields::ADDRESS),
            Some(&vec![FieldError::Required])
        );
        assert_eq!(failure.field_errors.len(), 1);
        assert_eq!(form.current_state(), &before);
        assert!(form
            .current_state()
            .fields
            .iter()
            .all(|f| !f.touched));
    }

    #[test]
    fn test_reset() {
        let mut form = filled_form();
        form.mark_touched(fields::NAME).unwrap();
        form.reset();

        let state = form.current_state();
        assert!(!state.is_valid());
        assert!(state.fields.iter().all(|f| f.value.is_empty() && !f.touched));
        assert!(state.field(fields::NAME).unwrap().has_error(RuleKind::Required));
    }
}

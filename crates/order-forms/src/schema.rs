// File: src/schema.rs
// Purpose: Form schema declaration and the checkout form definition

use std::collections::HashSet;

use crate::group::{equals_to, GroupValidator};
use crate::rules::Validator;

/// Field keys of the checkout form
pub mod fields {
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const EMAIL_CONFIRMATION: &str = "emailConfirmation";
    pub const ADDRESS: &str = "address";
    pub const NUMBER: &str = "number";
    pub const OPTIONAL_ADDRESS: &str = "optionalAddress";
    pub const PAYMENT_OPTION: &str = "paymentOption";
}

/// One input slot of a form
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub key: String,
    pub initial_value: String,
    /// Evaluated in order; the first failure is the one shown first
    pub rules: Vec<Validator>,
}

impl FieldSpec {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            initial_value: String::new(),
            rules: Vec::new(),
        }
    }

    pub fn initial_value(mut self, value: impl Into<String>) -> Self {
        self.initial_value = value.into();
        self
    }

    pub fn rule(mut self, rule: Validator) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(mut self, rules: impl IntoIterator<Item = Validator>) -> Self {
        self.rules.extend(rules);
        self
    }
}

/// Immutable set of fields plus the group validators that span them
#[derive(Debug, Clone)]
pub struct FormSchema {
    fields: Vec<FieldSpec>,
    group_validators: Vec<GroupValidator>,
}

impl FormSchema {
    pub fn builder() -> FormSchemaBuilder {
        FormSchemaBuilder::default()
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn group_validators(&self) -> &[GroupValidator] {
        &self.group_validators
    }

    pub fn field(&self, key: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub(crate) fn position(&self, key: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.key == key)
    }

    /// Field keys in declaration order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.key.as_str())
    }
}

#[derive(Debug, Default)]
pub struct FormSchemaBuilder {
    fields: Vec<FieldSpec>,
    group_validators: Vec<GroupValidator>,
}

impl FormSchemaBuilder {
    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    pub fn group(mut self, validator: GroupValidator) -> Self {
        self.group_validators.push(validator);
        self
    }

    /// Finish the schema.
    ///
    /// # Panics
    ///
    /// Panics if two fields share a key.
    pub fn build(self) -> FormSchema {
        let mut seen = HashSet::new();
        for field in &self.fields {
            assert!(
                seen.insert(field.key.as_str()),
                "duplicate form field key: {}",
                field.key
            );
        }

        FormSchema {
            fields: self.fields,
            group_validators: self.group_validators,
        }
    }
}

/// The checkout form: seven fields and the email confirmation check
pub fn order_form_schema() -> FormSchema {
    use crate::rules::Validator::{MinLength, Required};

    FormSchema::builder()
        .field(FieldSpec::new(fields::NAME).rules([Required, MinLength(5)]))
        .field(FieldSpec::new(fields::EMAIL).rules([Required, Validator::email()]))
        .field(FieldSpec::new(fields::EMAIL_CONFIRMATION).rules([Required, Validator::email()]))
        .field(FieldSpec::new(fields::ADDRESS).rules([Required, MinLength(5)]))
        .field(FieldSpec::new(fields::NUMBER).rules([Required, Validator::numeric()]))
        .field(FieldSpec::new(fields::OPTIONAL_ADDRESS))
        .field(FieldSpec::new(fields::PAYMENT_OPTION).rule(Required))
        .group(equals_to())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleKind;
    use pretty_assertions::assert_eq;

    fn rule_kinds(schema: &FormSchema, key: &str) -> Vec<RuleKind> {
        schema
            .field(key)
            .map(|f| f.rules.iter().map(Validator::kind).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_order_schema_fields() {
        let schema = order_form_schema();
        let keys: Vec<&str> = schema.keys().collect();
        assert_eq!(
            keys,
            vec![
                "name",
                "email",
                "emailConfirmation",
                "address",
                "number",
                "optionalAddress",
                "paymentOption",
            ]
        );
        assert!(schema.fields().iter().all(|f| f.initial_value.is_empty()));
        assert_eq!(schema.group_validators().len(), 1);
        assert_eq!(schema.group_validators()[0].name(), "equalsTo");
    }

    #[test]
    fn test_order_schema_rules() {
        let schema = order_form_schema();
        assert_eq!(
            rule_kinds(&schema, fields::NAME),
            vec![RuleKind::Required, RuleKind::MinLength]
        );
        assert_eq!(
            rule_kinds(&schema, fields::NUMBER),
            vec![RuleKind::Required, RuleKind::Pattern]
        );
        assert!(rule_kinds(&schema, fields::OPTIONAL_ADDRESS).is_empty());
        assert_eq!(
            rule_kinds(&schema, fields::PAYMENT_OPTION),
            vec![RuleKind::Required]
        );
    }

    #[test]
    #[should_panic(expected = "duplicate form field key: name")]
    fn test_duplicate_keys_panic() {
        FormSchema::builder()
            .field(FieldSpec::new("name"))
            .field(FieldSpec::new("name"))
            .build();
    }

    #[test]
    fn test_field_spec_builder() {
        let field = FieldSpec::new("city")
            .initial_value("Lisboa")
            .rule(Validator::Required);
        assert_eq!(field.key, "city");
        assert_eq!(field.initial_value, "Lisboa");
        assert_eq!(field.rules.len(), 1);
    }
}

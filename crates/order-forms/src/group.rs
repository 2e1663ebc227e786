// File: src/group.rs
// Purpose: Cross-field (group level) validators

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use order_forms_validation as checks;
use serde::Serialize;

use crate::schema::fields;

/// Named error flag raised by a group validator
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct GroupError(Cow<'static, str>);

impl GroupError {
    /// Email and its confirmation differ
    pub const EMAIL_NOT_MATCH: GroupError = GroupError(Cow::Borrowed("emailNotMatch"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Snapshot of every field's current value, keyed by field key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    values: HashMap<String, String>,
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|s| s.as_str())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Value of a field, or `""` when the field is absent
    pub fn value_or_empty(&self, key: &str) -> String {
        self.get(key).unwrap_or_default().to_string()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

type GroupCheck = dyn Fn(&FieldValues) -> Option<GroupError> + Send + Sync;

/// A rule over the whole value map.
///
/// Group validators declare no dependencies; the engine re-runs all of them
/// on every change.
#[derive(Clone)]
pub struct GroupValidator {
    name: &'static str,
    check: Arc<GroupCheck>,
}

impl GroupValidator {
    pub fn new<F>(name: &'static str, check: F) -> Self
    where
        F: Fn(&FieldValues) -> Option<GroupError> + Send + Sync + 'static,
    {
        Self {
            name,
            check: Arc::new(check),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn validate(&self, values: &FieldValues) -> Option<GroupError> {
        (self.check)(values)
    }
}

impl fmt::Debug for GroupValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupValidator")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Raise `error` when the two fields hold different values.
///
/// A missing field is a schema mismatch, not a validation failure: it is
/// logged and reported as "no error".
pub fn fields_equal(
    name: &'static str,
    left: &'static str,
    right: &'static str,
    error: GroupError,
) -> GroupValidator {
    GroupValidator::new(name, move |values| {
        let (Some(a), Some(b)) = (values.get(left), values.get(right)) else {
            tracing::warn!(
                "Group validator {} skipped: field {} or {} missing from form",
                name,
                left,
                right
            );
            return None;
        };
        (!checks::equals(a, b)).then(|| error.clone())
    })
}

/// `email` and `emailConfirmation` must be identical
pub fn equals_to() -> GroupValidator {
    fields_equal(
        "equalsTo",
        fields::EMAIL,
        fields::EMAIL_CONFIRMATION,
        GroupError::EMAIL_NOT_MATCH,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emails(email: &str, confirmation: &str) -> FieldValues {
        [
            (fields::EMAIL, email),
            (fields::EMAIL_CONFIRMATION, confirmation),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_equal_emails() {
        assert_eq!(equals_to().validate(&emails("x@y.com", "x@y.com")), None);
    }

    #[test]
    fn test_different_emails() {
        assert_eq!(
            equals_to().validate(&emails("x@y.com", "x@y.co")),
            Some(GroupError::EMAIL_NOT_MATCH)
        );
    }

    #[test]
    fn test_comparison_is_exact() {
        let rule = equals_to();
        assert!(rule.validate(&emails("x@y.com", "X@y.com")).is_some());
        assert!(rule.validate(&emails("x@y.com", " x@y.com")).is_some());
    }

    #[test]
    fn test_empty_values_are_equal() {
        assert_eq!(equals_to().validate(&emails("", "")), None);
    }

    #[test]
    fn test_missing_field_is_not_an_error() {
        let values: FieldValues = [(fields::EMAIL, "x@y.com")].into_iter().collect();
        assert_eq!(equals_to().validate(&values), None);
        assert_eq!(equals_to().validate(&FieldValues::new()), None);
    }

    #[test]
    fn test_group_error_serializes_as_name() {
        let json = serde_json::to_string(&GroupError::EMAIL_NOT_MATCH).unwrap();
        assert_eq!(json, "\"emailNotMatch\"");
        assert_eq!(GroupError::new("custom").to_string(), "custom");
    }
}

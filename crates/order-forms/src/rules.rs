// File: src/rules.rs
// Purpose: Per-field validators and the errors they report

use order_forms_validation as checks;
use regex::Regex;
use serde::Serialize;

/// Identifies which rule produced a [`FieldError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    Required,
    MinLength,
    Pattern,
}

/// A failed field rule, with the details needed to render a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "lowercase")]
pub enum FieldError {
    Required,
    #[serde(rename_all = "camelCase")]
    MinLength {
        required_length: usize,
        actual_length: usize,
    },
    #[serde(rename_all = "camelCase")]
    Pattern { required_pattern: String },
}

impl FieldError {
    pub fn kind(&self) -> RuleKind {
        match self {
            FieldError::Required => RuleKind::Required,
            FieldError::MinLength { .. } => RuleKind::MinLength,
            FieldError::Pattern { .. } => RuleKind::Pattern,
        }
    }

    /// Human readable message for inline display
    pub fn message(&self) -> String {
        match self {
            FieldError::Required => "This field is required".to_string(),
            FieldError::MinLength {
                required_length, ..
            } => format!("Must be at least {} characters", required_length),
            FieldError::Pattern { .. } => "Invalid format".to_string(),
        }
    }
}

/// A rule applied to a single field value
#[derive(Debug, Clone)]
pub enum Validator {
    /// Fails on empty or whitespace-only values
    Required,
    /// Fails on non-empty values shorter than `n` characters
    MinLength(usize),
    /// Fails on non-empty values that do not fully match the regex
    Pattern { regex: Regex, source: String },
}

impl Validator {
    /// Build a pattern rule. The pattern is anchored on both ends.
    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Validator::Pattern {
            regex: checks::anchored(pattern)?,
            source: pattern.to_string(),
        })
    }

    pub fn email() -> Self {
        Validator::Pattern {
            regex: checks::EMAIL_REGEX.clone(),
            source: checks::EMAIL_PATTERN.to_string(),
        }
    }

    pub fn numeric() -> Self {
        Validator::Pattern {
            regex: checks::NUMERIC_REGEX.clone(),
            source: checks::NUMERIC_PATTERN.to_string(),
        }
    }

    pub fn kind(&self) -> RuleKind {
        match self {
            Validator::Required => RuleKind::Required,
            Validator::MinLength(_) => RuleKind::MinLength,
            Validator::Pattern { .. } => RuleKind::Pattern,
        }
    }

    /// Run the rule against a value.
    ///
    /// Only `Required` reports on empty input; the other rules leave an
    /// empty value alone so a blank field shows a single error.
    pub fn check(&self, value: &str) -> Option<FieldError> {
        match self {
            Validator::Required => {
                (!checks::is_present(value)).then_some(FieldError::Required)
            }
            Validator::MinLength(min) => {
                if value.is_empty() {
                    return None;
                }
                checks::validate_min_length(value, *min)
                    .err()
                    .map(|_| FieldError::MinLength {
                        required_length: *min,
                        actual_length: checks::char_length(value),
                    })
            }
            Validator::Pattern { regex, source } => {
                if value.is_empty() || checks::matches_full(regex, value) {
                    None
                } else {
                    Some(FieldError::Pattern {
                        required_pattern: source.clone(),
                    })
                }
            }
        }
    }
}

/// Evaluate every rule (no short-circuit), keeping rule order
pub fn evaluate(rules: &[Validator], value: &str) -> Vec<FieldError> {
    rules.iter().filter_map(|rule| rule.check(value)).collect()
}

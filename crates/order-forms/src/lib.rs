//! # order-forms
//!
//! Checkout form schema and validation engine.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use order_forms::{order_form_schema, schema::fields, FormEngine};
//!
//! let mut form = FormEngine::new(order_form_schema());
//!
//! form.set_value(fields::NAME, "Maria Silva")?;
//! form.set_value(fields::EMAIL, "maria@example.com")?;
//! form.set_value(fields::EMAIL_CONFIRMATION, "maria@example.org")?;
//!
//! let state = form.current_state();
//! assert!(!state.is_valid());
//! assert!(state.has_group_error(&GroupError::EMAIL_NOT_MATCH));
//! ```
//!
//! ## Architecture
//!
//! - **`schema`** - Field declarations and the static checkout schema
//! - **`rules`** - Per-field validators and their error values
//! - **`group`** - Cross-field validators over the whole value map
//! - **`state`** - Derived, recomputable form snapshot
//! - **`engine`** - Mutation entry points (`set_value`, `mark_touched`, `try_submit`)
//! - **`payload`** - The submission payload handed to the order service

pub mod engine;
pub mod error;
pub mod group;
pub mod payload;
pub mod rules;
pub mod schema;
pub mod state;

// Re-export main types
pub use engine::FormEngine;
pub use error::{FormError, ValidationFailure};
pub use group::{equals_to, FieldValues, GroupError, GroupValidator};
pub use payload::{OrderItem, SubmissionPayload};
pub use rules::{FieldError, RuleKind, Validator};
pub use schema::{order_form_schema, FieldSpec, FormSchema, FormSchemaBuilder};
pub use state::{FieldState, FormState};

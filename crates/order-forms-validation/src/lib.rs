//! Order Forms Validation Core
//!
//! Pure validation functions used by the checkout form engine.
//! Nothing in here holds state; every function is total and never panics.

pub mod pattern;
pub mod string;

// Re-export all validators
pub use pattern::*;
pub use string::*;

// File: src/error.rs
// Purpose: Errors surfaced by the checkout flow

use order_forms::{FormError, ValidationFailure};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The form is not valid; nothing was sent
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    /// Field key not in the form schema
    #[error(transparent)]
    Form(#[from] FormError),

    /// The order service rejected or failed the request; the form is kept
    #[error("order submission failed: {0}")]
    Order(anyhow::Error),

    /// The checkout view was already torn down
    #[error("checkout has been disposed")]
    Disposed,
}

// File: order-checkout/src/lib.rs
// Purpose: Main entry point for the checkout flow

//! # order-checkout
//!
//! The checkout step of the restaurant ordering app: binds the order form to
//! the shopping cart, submits valid orders and moves on to the success page.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use order_checkout::{CheckoutConfig, CheckoutController, HistoryNavigator,
//!     InMemoryOrderService, ShoppingCart};
//! use order_forms::schema::fields;
//!
//! let config = CheckoutConfig::load_default()?;
//! order_checkout::telemetry::init(&config.logging);
//!
//! let mut checkout = CheckoutController::new(
//!     config,
//!     Arc::new(ShoppingCart::new()),
//!     Arc::new(InMemoryOrderService::new()),
//!     Arc::new(HistoryNavigator::new()),
//! );
//!
//! checkout.set_value(fields::NAME, "Maria Silva")?;
//! // ...
//! let outcome = checkout.submit().await?;
//! ```

pub mod cart;
pub mod checkout;
pub mod config;
pub mod error;
pub mod navigation;
pub mod order;
pub mod payment;
pub mod telemetry;

// Re-export main types
pub use cart::{CartItem, CartService, MenuItem, ShoppingCart};
pub use checkout::{CheckoutController, DisposeHandle, SubmissionOutcome};
pub use config::{CheckoutConfig, LoggingConfig, NavigationConfig};
pub use error::CheckoutError;
pub use navigation::{HistoryNavigator, Navigator};
pub use order::{InMemoryOrderService, OrderService};
pub use payment::PaymentOption;

/// Route shown after an order is accepted
pub const ORDER_SUCCESS_PATH: &str = "/order-success";

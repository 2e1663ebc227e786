// File: src/checkout.rs
// Purpose: Checkout controller - binds the order form to the cart and submits orders

use std::sync::Arc;

use order_forms::{order_form_schema, FormEngine, FormState};
use tokio::sync::watch;

use crate::cart::{CartItem, CartService};
use crate::config::CheckoutConfig;
use crate::error::CheckoutError;
use crate::navigation::Navigator;
use crate::order::OrderService;
use crate::payment::PaymentOption;

/// How a submission ended, when it did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Order accepted; the cart was cleared and the form reset
    Completed { order_id: String },
    /// The view went away before the order service answered; nothing changed
    Discarded,
}

/// Tears down a checkout view from outside the task that owns it
#[derive(Clone)]
pub struct DisposeHandle {
    disposed: Arc<watch::Sender<bool>>,
}

impl DisposeHandle {
    pub fn dispose(&self) {
        self.disposed.send_replace(true);
    }

    pub fn is_disposed(&self) -> bool {
        *self.disposed.borrow()
    }
}

/// The checkout view's logic: the order form plus its collaborators
pub struct CheckoutController {
    form: FormEngine,
    config: CheckoutConfig,
    cart: Arc<dyn CartService>,
    orders: Arc<dyn OrderService>,
    navigator: Arc<dyn Navigator>,
    disposed: Arc<watch::Sender<bool>>,
}

impl CheckoutController {
    pub fn new(
        config: CheckoutConfig,
        cart: Arc<dyn CartService>,
        orders: Arc<dyn OrderService>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let (disposed, _) = watch::channel(false);
        Self {
            form: FormEngine::new(order_form_schema()),
            config,
            cart,
            orders,
            navigator,
            disposed: Arc::new(disposed),
        }
    }

    // ---- form ----

    pub fn set_value(
        &mut self,
        key: &str,
        value: impl Into<String>,
    ) -> Result<&FormState, CheckoutError> {
        Ok(self.form.set_value(key, value)?)
    }

    pub fn mark_touched(&mut self, key: &str) -> Result<&FormState, CheckoutError> {
        Ok(self.form.mark_touched(key)?)
    }

    pub fn state(&self) -> &FormState {
        self.form.current_state()
    }

    pub fn payment_options(&self) -> &[PaymentOption] {
        &self.config.payment_options
    }

    // ---- cart ----

    pub async fn cart_items(&self) -> Vec<CartItem> {
        self.cart.cart_items().await
    }

    pub async fn increase_qty(&self, menu_id: &str) {
        self.cart.increase_qty(menu_id).await
    }

    pub async fn decrease_qty(&self, menu_id: &str) {
        self.cart.decrease_qty(menu_id).await
    }

    pub async fn remove_item(&self, menu_id: &str) {
        self.cart.remove_item(menu_id).await
    }

    pub async fn total(&self) -> f64 {
        self.cart.total().await
    }

    // ---- lifecycle ----

    pub fn dispose_handle(&self) -> DisposeHandle {
        DisposeHandle {
            disposed: self.disposed.clone(),
        }
    }

    pub fn dispose(&self) {
        self.disposed.send_replace(true);
    }

    pub fn is_disposed(&self) -> bool {
        *self.disposed.borrow()
    }

    /// Validate the form and send the order.
    ///
    /// An invalid form returns `CheckoutError::Validation` without side
    /// effects. If the controller is disposed while the order service is
    /// still working, the answer is dropped and `Discarded` is returned.
    pub async fn submit(&mut self) -> Result<SubmissionOutcome, CheckoutError> {
        if self.is_disposed() {
            return Err(CheckoutError::Disposed);
        }

        let items = self
            .cart
            .cart_items()
            .await
            .iter()
            .map(CartItem::to_order_item)
            .collect::<Vec<_>>();
        let payload = self.form.try_submit(items)?;

        let mut disposed = self.disposed.subscribe();
        let result = tokio::select! {
            result = self.orders.check_order(&payload) => result,
            _ = disposed.wait_for(|gone| *gone) => {
                tracing::warn!("Checkout disposed while order was pending, ignoring completion");
                return Ok(SubmissionOutcome::Discarded);
            }
        };

        if self.is_disposed() {
            tracing::warn!("Checkout disposed before order completion was handled");
            return Ok(SubmissionOutcome::Discarded);
        }

        let order_id = result.map_err(|e| {
            tracing::error!("Order submission failed: {:#}", e);
            CheckoutError::Order(e)
        })?;

        self.navigator.navigate(&self.config.navigation.success_path);
        tracing::info!("Order completed: {}", order_id);
        self.cart.clear().await;
        self.form.reset();

        Ok(SubmissionOutcome::Completed { order_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HistoryNavigator, InMemoryOrderService, ShoppingCart};
    use order_forms::schema::fields;

    fn controller() -> (CheckoutController, HistoryNavigator) {
        let navigator = HistoryNavigator::new();
        let controller = CheckoutController::new(
            CheckoutConfig::default(),
            Arc::new(ShoppingCart::new()),
            Arc::new(InMemoryOrderService::new()),
            Arc::new(navigator.clone()),
        );
        (controller, navigator)
    }

    #[test]
    fn test_payment_options_from_config() {
        let (controller, _) = controller();
        let labels: Vec<&str> = controller
            .payment_options()
            .iter()
            .map(|o| o.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Dinheiro", "Debito", "Credito"]);
    }

    #[test]
    fn test_unknown_field_is_reported() {
        let (mut controller, _) = controller();
        let err = controller.set_value("phone", "1").unwrap_err();
        assert!(matches!(err, CheckoutError::Form(_)));
    }

    #[tokio::test]
    async fn test_submit_after_dispose() {
        let (mut controller, navigator) = controller();
        controller.set_value(fields::NAME, "Maria Silva").unwrap();
        controller.dispose_handle().dispose();

        assert!(controller.is_disposed());
        let err = controller.submit().await.unwrap_err();
        assert!(matches!(err, CheckoutError::Disposed));
        assert!(navigator.history().is_empty());
    }
}

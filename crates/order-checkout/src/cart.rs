//! Shopping cart collaborator

use async_trait::async_trait;
use order_forms::OrderItem;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

/// A dish on the restaurant menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub image_path: String,
}

impl MenuItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            image_path: String::new(),
        }
    }
}

/// One cart line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub menu_item: MenuItem,
    pub quantity: u32,
}

impl CartItem {
    pub fn new(menu_item: MenuItem) -> Self {
        Self {
            menu_item,
            quantity: 1,
        }
    }

    /// Price of the line (unit price times quantity)
    pub fn value(&self) -> f64 {
        self.menu_item.price * f64::from(self.quantity)
    }

    pub fn to_order_item(&self) -> OrderItem {
        OrderItem::new(self.quantity, self.menu_item.id.clone())
    }
}

/// Cart operations the checkout needs.
///
/// Items are addressed by menu item id.
#[async_trait]
pub trait CartService: Send + Sync {
    /// Current lines, in the order they were added
    async fn cart_items(&self) -> Vec<CartItem>;

    /// Add one unit of a menu item
    async fn add_item(&self, item: MenuItem);

    async fn increase_qty(&self, menu_id: &str);

    /// Remove one unit; the line disappears when it reaches zero
    async fn decrease_qty(&self, menu_id: &str);

    async fn remove_item(&self, menu_id: &str);

    /// Sum of every line's value
    async fn total(&self) -> f64;

    async fn clear(&self);
}

/// In-memory cart
///
/// Cloning shares the same underlying lines.
#[derive(Clone, Default)]
pub struct ShoppingCart {
    items: Arc<RwLock<Vec<CartItem>>>,
}

impl ShoppingCart {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartService for ShoppingCart {
    async fn cart_items(&self) -> Vec<CartItem> {
        self.items.read().await.clone()
    }

    async fn add_item(&self, item: MenuItem) {
        let mut items = self.items.write().await;
        match items.iter_mut().find(|line| line.menu_item.id == item.id) {
            Some(line) => line.quantity += 1,
            None => items.push(CartItem::new(item)),
        }
    }

    async fn increase_qty(&self, menu_id: &str) {
        let mut items = self.items.write().await;
        if let Some(line) = items.iter_mut().find(|line| line.menu_item.id == menu_id) {
            line.quantity += 1;
        }
    }

    async fn decrease_qty(&self, menu_id: &str) {
        let mut items = self.items.write().await;
        if let Some(index) = items.iter().position(|line| line.menu_item.id == menu_id) {
            items[index].quantity = items[index].quantity.saturating_sub(1);
            if items[index].quantity == 0 {
                items.remove(index);
            }
        }
    }

    async fn remove_item(&self, menu_id: &str) {
        self.items
            .write()
            .await
            .retain(|line| line.menu_item.id != menu_id);
    }

    async fn total(&self) -> f64 {
        self.items.read().await.iter().map(CartItem::value).sum()
    }

    async fn clear(&self) {
        self.items.write().await.clear();
    }
}

//! Order submission collaborator

use anyhow::Result;
use async_trait::async_trait;
use order_forms::SubmissionPayload;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// Accepts a submitted order and returns its id
#[async_trait]
pub trait OrderService: Send + Sync {
    async fn check_order(&self, order: &SubmissionPayload) -> Result<String>;
}

/// In-memory order backend
///
/// Assigns random ids and keeps every accepted order. Can be told to reject
/// orders or to answer after a delay.
#[derive(Clone, Default)]
pub struct InMemoryOrderService {
    orders: Arc<RwLock<Vec<(String, SubmissionPayload)>>>,
    failing: Arc<AtomicBool>,
    latency: Option<Duration>,
}

impl InMemoryOrderService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Make subsequent orders fail (or succeed again)
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Accepted orders, oldest first
    pub async fn orders(&self) -> Vec<(String, SubmissionPayload)> {
        self.orders.read().await.clone()
    }
}

#[async_trait]
impl OrderService for InMemoryOrderService {
    async fn check_order(&self, order: &SubmissionPayload) -> Result<String> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        if self.failing.load(Ordering::SeqCst) {
            anyhow::bail!("order service unavailable");
        }

        let order_id = uuid::Uuid::new_v4().to_string();
        self.orders
            .write()
            .await
            .push((order_id.clone(), order.clone()));
        Ok(order_id)
    }
}

//! Router collaborator

use std::sync::{Arc, Mutex, PoisonError};

/// Moves the application to another view
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Navigator that only records where it was sent
#[derive(Clone, Default)]
pub struct HistoryNavigator {
    history: Arc<Mutex<Vec<String>>>,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Visited paths, oldest first
    pub fn history(&self) -> Vec<String> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn current(&self) -> Option<String> {
        self.history().last().cloned()
    }
}

impl Navigator for HistoryNavigator {
    fn navigate(&self, path: &str) {
        tracing::debug!("Navigating to {}", path);
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(path.to_string());
    }
}

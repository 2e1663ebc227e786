// File: src/config.rs
// Purpose: Configuration parsing from checkout.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::payment::{default_payment_options, PaymentOption};
use crate::ORDER_SUCCESS_PATH;

/// Checkout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutConfig {
    #[serde(default)]
    pub navigation: NavigationConfig,

    #[serde(default = "default_payment_options")]
    pub payment_options: Vec<PaymentOption>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where to go after checkout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationConfig {
    #[serde(default = "default_success_path")]
    pub success_path: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive; `RUST_LOG` wins when set
    #[serde(default = "default_filter")]
    pub filter: String,

    #[serde(default = "default_false")]
    pub ansi: bool,
}

// Default values
fn default_success_path() -> String {
    ORDER_SUCCESS_PATH.to_string()
}

fn default_filter() -> String {
    "info".to_string()
}

fn default_false() -> bool {
    false
}

// Default implementations
impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            navigation: NavigationConfig::default(),
            payment_options: default_payment_options(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            success_path: default_success_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            ansi: false,
        }
    }
}

impl CheckoutConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: CheckoutConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./checkout.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("checkout.toml")
    }
}

//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Install a global fmt subscriber.
///
/// `RUST_LOG` overrides the configured filter. Calling this more than once
/// keeps the first subscriber.
pub fn init(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| configured_filter(&config.filter));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.ansi)
        .try_init();

    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}

/// Filter from the config file, or `info` when the directives don't parse
fn configured_filter(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives).unwrap_or_else(|e| {
        eprintln!("Invalid log filter {:?}: {}, using info", directives, e);
        EnvFilter::new("info")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_filter() {
        assert_eq!(
            configured_filter("order_forms=debug").to_string(),
            "order_forms=debug"
        );
        assert_eq!(configured_filter("order_forms=loud").to_string(), "info");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        let config = LoggingConfig {
            filter: "order_forms=loud".to_string(),
            ansi: false,
        };
        init(&config);
        init(&LoggingConfig::default());
        assert!(tracing::dispatcher::has_been_set());
    }
}

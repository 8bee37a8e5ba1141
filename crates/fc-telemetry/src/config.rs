//! Telemetry configuration from environment variables.

use std::env;

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Service name attached to every log line
    pub service_name: String,

    /// Filter directives (`info`, `fc_02_ancestry=debug,warn`, ...)
    pub log_level: String,

    /// Whether to write logs to stdout at all
    pub console_output: bool,

    /// Whether to emit JSON lines instead of human-readable output
    pub json_logs: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "federated-chain".to_string(),
            log_level: "info".to_string(),
            console_output: true,
            json_logs: false,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `OTEL_SERVICE_NAME`: Service name (default: federated-chain)
    /// - `FC_LOG_LEVEL` or `RUST_LOG`: Filter directives (default: info)
    /// - `FC_CONSOLE_OUTPUT`: Enable console output (default: true)
    /// - `FC_JSON_LOGS`: Enable JSON logs (default: false outside containers)
    pub fn from_env() -> Self {
        let is_container =
            env::var("KUBERNETES_SERVICE_HOST").is_ok() || env::var("DOCKER_CONTAINER").is_ok();

        Self {
            service_name: env::var("OTEL_SERVICE_NAME")
                .unwrap_or_else(|_| "federated-chain".to_string()),

            log_level: env::var("FC_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),

            console_output: env::var("FC_CONSOLE_OUTPUT")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(true),

            json_logs: env::var("FC_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(is_container),
        }
    }

    /// Configuration for one component, e.g. `("01", "block-codec")`.
    pub fn for_component(id: &str, name: &str) -> Self {
        let mut config = Self::from_env();
        config.service_name = format!("fc-{}-{}", id, name);
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TelemetryConfig::default();
        assert_eq!(config.service_name, "federated-chain");
        assert_eq!(config.log_level, "info");
        assert!(config.console_output);
        assert!(!config.json_logs);
    }

    #[test]
    fn test_for_component() {
        let config = TelemetryConfig::for_component("02", "ancestry");
        assert_eq!(config.service_name, "fc-02-ancestry");
    }

    #[test]
    fn test_env_flags() {
        env::set_var("FC_JSON_LOGS", "1");
        env::set_var("FC_CONSOLE_OUTPUT", "false");
        env::set_var("FC_LOG_LEVEL", "debug");

        let config = TelemetryConfig::from_env();
        assert!(config.json_logs);
        assert!(!config.console_output);
        assert_eq!(config.log_level, "debug");

        env::remove_var("FC_JSON_LOGS");
        env::remove_var("FC_CONSOLE_OUTPUT");
        env::remove_var("FC_LOG_LEVEL");
    }
}

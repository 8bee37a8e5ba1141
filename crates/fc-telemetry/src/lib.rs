//! # Federated-Chain Telemetry
//!
//! Structured logging for the workspace's binaries. Libraries only emit
//! `tracing` events; binaries call [`init_logging`] once at startup.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fc_telemetry::{init_logging, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     init_logging(&TelemetryConfig::from_env())?;
//!     // ...
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `OTEL_SERVICE_NAME` | `federated-chain` | Service name in logs |
//! | `FC_LOG_LEVEL` / `RUST_LOG` | `info` | Filter directives |
//! | `FC_CONSOLE_OUTPUT` | `true` | Write logs to stdout |
//! | `FC_JSON_LOGS` | `false` (`true` in containers) | JSON lines |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{build_filter, init_logging};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter: {0}")]
    Filter(String),

    #[error("Failed to install subscriber: {0}")]
    Init(String),
}

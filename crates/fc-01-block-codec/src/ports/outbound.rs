//! # Outbound Ports (Driven Ports)
//!
//! Where the codec sends integrity failures it has detected.

/// Receiver of consensus-level faults.
///
/// Production: a node-level panic/alerting processor.
/// Testing: `ChannelFaultReporter` (adapters/fault.rs)
pub trait FaultReporter: Send + Sync {
    /// Report a fault under a short machine-readable `topic`.
    fn report(&self, topic: &str, message: &str);
}

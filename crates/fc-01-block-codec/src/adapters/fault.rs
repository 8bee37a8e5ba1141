//! Fault reporter adapters.

use crate::ports::outbound::FaultReporter;
use tokio::sync::mpsc;
use tracing::{error, warn};

/// Writes faults to the log and nothing else.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingFaultReporter;

impl FaultReporter for LoggingFaultReporter {
    fn report(&self, topic: &str, message: &str) {
        error!(severity = "critical", topic, "[fc-01] Fault: {}", message);
    }
}

/// A fault as delivered through [`ChannelFaultReporter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaultReport {
    pub topic: String,
    pub message: String,
}

/// Forwards faults to an async consumer.
#[derive(Debug, Clone)]
pub struct ChannelFaultReporter {
    sender: mpsc::UnboundedSender<FaultReport>,
}

impl ChannelFaultReporter {
    pub fn new(sender: mpsc::UnboundedSender<FaultReport>) -> Self {
        Self { sender }
    }

    /// Reporter plus the receiving end of its channel.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<FaultReport>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self::new(sender), receiver)
    }
}

impl FaultReporter for ChannelFaultReporter {
    fn report(&self, topic: &str, message: &str) {
        let report = FaultReport {
            topic: topic.to_string(),
            message: message.to_string(),
        };
        if self.sender.send(report).is_err() {
            warn!(topic, "[fc-01] Fault receiver dropped, report lost: {}", message);
        }
    }
}

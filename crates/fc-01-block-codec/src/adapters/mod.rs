//! # Adapters
//!
//! Fault reporter implementations.

pub mod fault;

pub use fault::{ChannelFaultReporter, FaultReport, LoggingFaultReporter};

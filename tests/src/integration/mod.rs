//! # Integration Tests
//!
//! Flows that cross crate boundaries.

pub mod federation_flow;
pub mod sync_flow;

//! # Ports Layer
//!
//! - `outbound.rs` - Authorization capability consulted on every vote

pub mod outbound;

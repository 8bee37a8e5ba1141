//! # Ports Layer
//!
//! - `outbound.rs` - Block sources consulted by the resolver

pub mod outbound;

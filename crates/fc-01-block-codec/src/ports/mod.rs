//! # Ports Layer
//!
//! - `outbound.rs` - Driven ports (dependencies required by the codec service)

pub mod outbound;

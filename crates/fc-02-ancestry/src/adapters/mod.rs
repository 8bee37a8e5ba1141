//! # Adapters
//!
//! In-memory implementations of the block source ports.

pub mod memory;

pub use memory::{InMemoryBlockStore, InMemoryBlockchain};

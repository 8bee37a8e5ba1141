//! # Shared Types Crate
//!
//! Primitive value types used across the block codec, the ancestry resolver
//! and the federation election.
//!
//! ## Design Principles
//!
//! - **Plain arrays**: hashes and addresses are fixed-width byte arrays so they
//!   are `Copy`, hashable and ordered without wrappers.
//! - **One big-integer type**: every amount (value, gas price, fees) is a
//!   `U256`, matching the width used by the encoded transactions.

pub mod entities;

pub use entities::*;

//! # Shared Crypto
//!
//! Hash and trie utilities consumed by the block codec.
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | Keccak-256 | Header hashes, signature digests |
//! | `trie` | Merkle Patricia trie (root only) | Transactions root |
//!
//! The trie module only computes roots of index-keyed lists. It keeps no
//! nodes, produces no proofs and supports no deletion.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod hashing;
pub mod trie;

// Re-exports
pub use hashing::{keccak256, keccak256_concat, Keccak256Hasher};
pub use trie::{ordered_trie_root, trie_root, Nibbles};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

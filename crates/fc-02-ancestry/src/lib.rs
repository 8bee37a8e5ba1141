//! # Ancestry Resolution (fc-02)
//!
//! Decides which ancestors of a block or hash are missing from both the
//! node's chain and its auxiliary store of unconnected blocks.
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Errors, configuration, block list helpers
//! - `ports/` - `Blockchain` and `BlockStore`
//! - `adapters/` - In-memory chain and store
//! - `service.rs` - `AncestryResolver`
//!
//! ## Usage
//!
//! ```
//! use fc_02_ancestry::{AncestryResolver, InMemoryBlockStore, InMemoryBlockchain};
//!
//! let chain = InMemoryBlockchain::new();
//! let orphans = InMemoryBlockStore::new();
//! let missing = AncestryResolver::default()
//!     .unknown_ancestors_of([7u8; 32], &chain, &orphans)
//!     .unwrap();
//! assert!(missing.contains(&[7u8; 32]));
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

#[cfg(test)]
mod test_utils;

// Re-export key types for convenience
pub use adapters::{InMemoryBlockStore, InMemoryBlockchain};
pub use domain::block_list::{add_block_to_list, sort_blocks_by_number};
pub use domain::value_objects::DEFAULT_MAX_VISITED;
pub use domain::{AncestryConfig, AncestryError, AncestryResult};
pub use ports::outbound::{BlockInformation, BlockStore, Blockchain, ImportResult};
pub use service::{block_in_some_blockchain, AncestryResolver};

//! # Block Codec (fc-01)
//!
//! Block value type, canonical encoding and root verification.
//!
//! ## Lifecycle
//!
//! ```text
//! raw bytes ──LazyBlock──→ Block (sealed) ──to_builder()──→ BlockBuilder
//!                             ↑                                  │
//!                             └──────────── seal() ──────────────┘
//! ```
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforced by |
//! |----|-----------|-------------|
//! | 1 | Header hash derives from the encoded fields only | `BlockHeader` caches |
//! | 2 | Declared transactions root equals computed root | `BlockCodec::decode`, `LazyBlock`, `BlockCodec::assemble` |
//! | 3 | Only the last transaction can be the system transaction | `classify_transactions` |
//! | 4 | Sealed blocks never change | `Block` has no mutators |
//! | 5 | Any mutation drops cached encodings | `BlockBuilder` |
//! | 6 | Every decode escalates integrity failures exactly once | `BlockCodec`, `LazyBlock` |
//! | 7 | Stored transactions are in canonical form | `classify_transactions` |
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Pure block logic
//! - `ports/` - `FaultReporter`
//! - `adapters/` - Logging and channel fault reporters
//! - `service.rs` - `BlockCodec`
//!
//! ## Usage
//!
//! ```
//! use fc_01_block_codec::{BlockAssembly, BlockCodec, HeaderFields, EMPTY_TRIE_ROOT};
//!
//! let codec = BlockCodec::default();
//! let assembly = BlockAssembly {
//!     header: HeaderFields {
//!         number: 1,
//!         transactions_root: EMPTY_TRIE_ROOT,
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//! let block = codec.assemble(assembly).unwrap().seal();
//! let decoded = codec.decode(block.encode()).unwrap();
//! assert_eq!(decoded, block);
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export key types for convenience
pub use adapters::{ChannelFaultReporter, FaultReport, LoggingFaultReporter};
pub use domain::block::{
    signatures_hash, transactions_root, Block, BlockBuilder, BLOCK_ITEM_COUNT,
};
pub use domain::errors::{BlockError, BlockResult};
pub use domain::header::{BlockHeader, HeaderFields, HEADER_ITEM_COUNT, MAX_EXTRA_DATA_SIZE};
pub use domain::lazy::LazyBlock;
pub use domain::transaction::{
    classify_transactions, is_system_transaction, BlockTransaction, GasLimit, SystemTransaction,
    Transaction, TxSignature, TRANSACTION_ITEM_COUNT,
};
pub use ports::outbound::FaultReporter;
pub use service::{BlockAssembly, BlockCodec};
pub use shared_types::EMPTY_TRIE_ROOT;

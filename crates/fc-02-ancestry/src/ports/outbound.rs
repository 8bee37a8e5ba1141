//! # Outbound Ports (Driven Ports)
//!
//! Block sources the resolver reads from. Implementations own their
//! locking; all methods take `&self`.

use fc_01_block_codec::Block;
use shared_types::Hash;
use std::sync::Arc;

/// Lookup of blocks by hash.
///
/// Used both as the chain's own storage and as the auxiliary store of blocks
/// that are not connected yet (orphans).
pub trait BlockStore: Send + Sync {
    fn block_by_hash(&self, hash: &Hash) -> Option<Arc<Block>>;
}

/// A block recorded at some height of the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockInformation {
    pub hash: Hash,
    /// Whether the block is on the current best chain.
    pub in_main_chain: bool,
}

/// Outcome of [`Blockchain::try_to_connect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportResult {
    /// Connected and became the new best block.
    ImportedBest,
    /// Connected on a side branch.
    ImportedNotBest,
    /// Already known.
    Exist,
    /// Parent unknown.
    NoParent,
    InvalidBlock,
}

impl ImportResult {
    pub fn is_successful(&self) -> bool {
        matches!(self, ImportResult::ImportedBest | ImportResult::ImportedNotBest)
    }
}

/// The node's chain of connected blocks.
///
/// Production: the node's chain manager.
/// Testing: `InMemoryBlockchain` (adapters/memory.rs)
pub trait Blockchain: Send + Sync {
    fn block_by_hash(&self, hash: &Hash) -> Option<Arc<Block>>;

    /// Block at `number` on the best chain.
    fn block_by_number(&self, number: u64) -> Option<Arc<Block>>;

    /// Every block recorded at `number`, on any branch.
    fn blocks_by_number(&self, number: u64) -> Vec<Arc<Block>>;

    /// Every block recorded at `number`, on any branch.
    fn blocks_information_by_number(&self, number: u64) -> Vec<BlockInformation>;

    fn best_block(&self) -> Option<Arc<Block>>;

    fn try_to_connect(&self, block: Block) -> ImportResult;

    fn has_block(&self, hash: &Hash) -> bool;

    /// Drop every block recorded at `number`.
    fn remove_blocks_by_number(&self, number: u64);

    fn block_store(&self) -> &dyn BlockStore;
}

//! In-memory block sources for tests and tooling.
//!
//! Fork choice is height only: a block becomes best when it is higher than
//! the current best block.

use crate::ports::outbound::{BlockInformation, BlockStore, Blockchain, ImportResult};
use fc_01_block_codec::Block;
use parking_lot::RwLock;
use shared_types::Hash;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tracing::debug;

/// Hash-indexed block map.
#[derive(Default)]
pub struct InMemoryBlockStore {
    blocks: RwLock<HashMap<Hash, Arc<Block>>>,
}

impl InMemoryBlockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, block: Arc<Block>) {
        self.blocks.write().insert(block.hash(), block);
    }

    pub fn remove(&self, hash: &Hash) -> Option<Arc<Block>> {
        self.blocks.write().remove(hash)
    }

    pub fn len(&self) -> usize {
        self.blocks.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.read().is_empty()
    }
}

impl BlockStore for InMemoryBlockStore {
    fn block_by_hash(&self, hash: &Hash) -> Option<Arc<Block>> {
        self.blocks.read().get(hash).cloned()
    }
}

#[derive(Default)]
struct ChainIndex {
    /// Every hash recorded per height, in arrival order.
    by_number: BTreeMap<u64, Vec<Hash>>,
    /// Best-chain hash per height.
    main_chain: BTreeMap<u64, Hash>,
    best: Option<Arc<Block>>,
}

/// Blockchain kept entirely in memory.
#[derive(Default)]
pub struct InMemoryBlockchain {
    store: InMemoryBlockStore,
    index: RwLock<ChainIndex>,
}

impl InMemoryBlockchain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chain holding `blocks`, connected in order.
    pub fn with_blocks<I: IntoIterator<Item = Block>>(blocks: I) -> Self {
        let chain = Self::new();
        for block in blocks {
            chain.try_to_connect(block);
        }
        chain
    }

    /// Make `block` the best block and rewrite the main-chain index down to
    /// the fork point.
    fn set_best(&self, index: &mut ChainIndex, block: Arc<Block>) {
        let top = block.number();
        index.main_chain.retain(|number, _| *number <= top);

        let mut cursor = Some(Arc::clone(&block));
        while let Some(current) = cursor {
            let number = current.number();
            if index.main_chain.get(&number) == Some(&current.hash()) {
                break;
            }
            index.main_chain.insert(number, current.hash());
            cursor = if current.is_genesis() {
                None
            } else {
                self.store.block_by_hash(&current.parent_hash())
            };
        }
        index.best = Some(block);
    }
}

impl Blockchain for InMemoryBlockchain {
    fn block_by_hash(&self, hash: &Hash) -> Option<Arc<Block>> {
        self.store.block_by_hash(hash)
    }

    fn block_by_number(&self, number: u64) -> Option<Arc<Block>> {
        let hash = self.index.read().main_chain.get(&number).copied()?;
        self.store.block_by_hash(&hash)
    }

    fn blocks_by_number(&self, number: u64) -> Vec<Arc<Block>> {
        let index = self.index.read();
        index
            .by_number
            .get(&number)
            .map(|hashes| {
                hashes
                    .iter()
                    .filter_map(|hash| self.store.block_by_hash(hash))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn blocks_information_by_number(&self, number: u64) -> Vec<BlockInformation> {
        let index = self.index.read();
        let main = index.main_chain.get(&number);
        index
            .by_number
            .get(&number)
            .map(|hashes| {
                hashes
                    .iter()
                    .map(|hash| BlockInformation {
                        hash: *hash,
                        in_main_chain: main == Some(hash),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn best_block(&self) -> Option<Arc<Block>> {
        self.index.read().best.clone()
    }

    fn try_to_connect(&self, block: Block) -> ImportResult {
        let mut index = self.index.write();
        let hash = block.hash();
        if self.store.block_by_hash(&hash).is_some() {
            return ImportResult::Exist;
        }

        if block.is_genesis() {
            if index.best.is_some() {
                debug!("[fc-02] Rejecting second genesis {}", block.short_description());
                return ImportResult::InvalidBlock;
            }
        } else {
            match self.store.block_by_hash(&block.parent_hash()) {
                None => return ImportResult::NoParent,
                Some(parent) if parent.number().checked_add(1) != Some(block.number()) => {
                    return ImportResult::InvalidBlock;
                }
                Some(_) => {}
            }
        }

        let block = Arc::new(block);
        self.store.insert(Arc::clone(&block));
        index.by_number.entry(block.number()).or_default().push(hash);

        let is_best = index
            .best
            .as_ref()
            .map_or(true, |best| block.number() > best.number());
        if is_best {
            self.set_best(&mut index, Arc::clone(&block));
            debug!("[fc-02] Imported best block {}", block.short_description());
            ImportResult::ImportedBest
        } else {
            debug!("[fc-02] Imported side block {}", block.short_description());
            ImportResult::ImportedNotBest
        }
    }

    fn has_block(&self, hash: &Hash) -> bool {
        self.store.block_by_hash(hash).is_some()
    }

    fn remove_blocks_by_number(&self, number: u64) {
        let mut index = self.index.write();
        let Some(hashes) = index.by_number.remove(&number) else {
            return;
        };
        for hash in &hashes {
            self.store.remove(hash);
        }

        let main_removed = index
            .main_chain
            .get(&number)
            .is_some_and(|hash| hashes.contains(hash));
        if main_removed {
            index.main_chain.retain(|height, _| *height < number);
            index.best = index
                .main_chain
                .values()
                .next_back()
                .and_then(|hash| self.store.block_by_hash(hash));
        }
    }

    fn block_store(&self) -> &dyn BlockStore {
        &self.store
    }
}

//! # Ancestry Resolver
//!
//! Finds the hashes reachable through parent links that neither the chain
//! nor the auxiliary store knows about. Sync uses the result to decide which
//! blocks to request next.
//!
//! ```text
//! frontier = seeds
//! while frontier not empty:
//!     for hash in frontier (skipping hashes seen in this call):
//!         block = chain[hash] or store[hash]
//!         missing                    → unknown += hash
//!         genesis                    → stop
//!         recorded at its height     → stop (connected)
//!         otherwise                  → next += block.parent
//!     frontier = next
//! ```
//!
//! The walk is bounded by [`AncestryConfig::max_visited`] lookups; a store
//! holding an endless chain of unconnected blocks fails the call instead of
//! spinning.

use crate::domain::{AncestryConfig, AncestryError, AncestryResult};
use crate::ports::outbound::{BlockStore, Blockchain};
use fc_01_block_codec::Block;
use shared_types::Hash;
use std::collections::HashSet;
use tracing::{debug, trace, warn};

/// Whether `block` is recorded at its height in `chain`, on any branch.
pub fn block_in_some_blockchain(block: &Block, chain: &dyn Blockchain) -> bool {
    let hash = block.hash();
    chain
        .blocks_information_by_number(block.number())
        .iter()
        .any(|info| info.hash == hash)
}

/// Stateless resolver. Each call owns its own working sets.
#[derive(Debug, Clone, Default)]
pub struct AncestryResolver {
    config: AncestryConfig,
}

impl AncestryResolver {
    pub fn new(config: AncestryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AncestryConfig {
        &self.config
    }

    /// Unknown ancestors of `block`, starting from its direct parent.
    pub fn unknown_direct_ancestors(
        &self,
        block: &Block,
        chain: &dyn Blockchain,
        store: &dyn BlockStore,
    ) -> AncestryResult<HashSet<Hash>> {
        self.unknown_ancestors([block.parent_hash()], chain, store, false)
    }

    /// Unknown ancestors of `hash`, the hash itself included.
    pub fn unknown_ancestors_of(
        &self,
        hash: Hash,
        chain: &dyn Blockchain,
        store: &dyn BlockStore,
    ) -> AncestryResult<HashSet<Hash>> {
        self.unknown_ancestors([hash], chain, store, true)
    }

    /// Unknown hashes reachable from `seeds` through parent links.
    ///
    /// `with_uncles` is accepted for callers that will want uncle expansion;
    /// it does not change the walk.
    pub fn unknown_ancestors<I>(
        &self,
        seeds: I,
        chain: &dyn Blockchain,
        store: &dyn BlockStore,
        with_uncles: bool,
    ) -> AncestryResult<HashSet<Hash>>
    where
        I: IntoIterator<Item = Hash>,
    {
        let mut frontier: HashSet<Hash> = seeds.into_iter().collect();
        let mut unknown = HashSet::new();
        let mut seen = HashSet::new();
        let mut passes = 0usize;

        while !frontier.is_empty() {
            let mut next = HashSet::new();
            for hash in frontier {
                if unknown.contains(&hash) || !seen.insert(hash) {
                    continue;
                }
                if seen.len() > self.config.max_visited {
                    warn!(
                        limit = self.config.max_visited,
                        passes,
                        "[fc-02] Ancestry walk aborted at visit limit"
                    );
                    return Err(AncestryError::VisitLimitExceeded {
                        limit: self.config.max_visited,
                    });
                }

                let Some(block) = chain
                    .block_by_hash(&hash)
                    .or_else(|| store.block_by_hash(&hash))
                else {
                    trace!(hash = %shared_types::short_hex(&hash), "[fc-02] Unknown ancestor");
                    unknown.insert(hash);
                    continue;
                };

                if !block.is_genesis() && !block_in_some_blockchain(&block, chain) {
                    next.insert(block.parent_hash());
                }
            }
            frontier = next;
            passes += 1;
        }

        debug!(
            unknown = unknown.len(),
            visited = seen.len(),
            passes,
            with_uncles,
            "[fc-02] Ancestry resolved"
        );
        Ok(unknown)
    }
}

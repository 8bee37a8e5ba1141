//! # Sync Flow
//!
//! Blocks travel as bytes from a producer to a receiving node. The receiver
//! decodes them lazily, connects what it can, parks the rest, and asks the
//! ancestry resolver which hashes to request.
//!
//! ```text
//! producer ──encode──→ bytes ──codec.lazy──→ LazyBlock::block
//!                                              │
//!                          ┌───────────────────┴────────────┐
//!                          ↓                                ↓
//!                   chain.try_to_connect          orphan store (NoParent)
//!                                                           │
//!                           resolver.unknown_ancestors ←────┘
//! ```

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use fc_01_block_codec::{
        Block, BlockBuilder, BlockCodec, BlockError, ChannelFaultReporter,
    };
    use fc_02_ancestry::{
        sort_blocks_by_number, AncestryConfig, AncestryError, AncestryResolver, Blockchain,
        ImportResult, InMemoryBlockStore, InMemoryBlockchain,
    };

    use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

    use crate::fixtures::{produce_block, produce_chain};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// Receiving node: decodes bytes and files blocks into chain or orphans.
    struct Receiver {
        codec: BlockCodec,
        chain: InMemoryBlockchain,
        orphans: InMemoryBlockStore,
    }

    impl Receiver {
        fn new(codec: BlockCodec) -> Self {
            Self {
                codec,
                chain: InMemoryBlockchain::new(),
                orphans: InMemoryBlockStore::new(),
            }
        }

        fn receive(&self, raw: Vec<u8>) -> Result<ImportResult, BlockError> {
            let block = self.codec.lazy(raw).into_block()?;
            let result = self.chain.try_to_connect(block.clone());
            if result == ImportResult::NoParent {
                self.orphans.insert(Arc::new(block));
            }
            Ok(result)
        }

        /// Retry parked blocks lowest first until nothing connects.
        fn drain_orphans(&self, parked: &[Arc<Block>]) {
            for block in sort_blocks_by_number(parked) {
                if self.chain.try_to_connect((*block).clone()).is_successful() {
                    self.orphans.remove(&block.hash());
                }
            }
        }
    }

    fn wire(block: &Block) -> Vec<u8> {
        block.encode().to_vec()
    }

    // =============================================================================
    // INTEGRATION TESTS: CODEC → CHAIN → ANCESTRY
    // =============================================================================

    #[test]
    fn test_in_order_delivery_leaves_nothing_unknown() {
        let producer = BlockCodec::default();
        let blocks = produce_chain(&producer, 6, 3);
        let receiver = Receiver::new(BlockCodec::default());

        for block in &blocks {
            assert!(receiver.receive(wire(block)).unwrap().is_successful());
        }

        let tip = receiver.chain.best_block().unwrap();
        assert_eq!(tip.hash(), blocks[5].hash());
        assert_eq!(tip.transactions().len(), 4);
        assert!(tip.system_transaction().is_some());

        let unknown = AncestryResolver::default()
            .unknown_ancestors_of(tip.hash(), &receiver.chain, &receiver.orphans)
            .unwrap();
        assert!(unknown.is_empty());
    }

    #[test]
    fn test_gap_is_requested_then_filled() {
        let producer = BlockCodec::default();
        let blocks = produce_chain(&producer, 8, 2);
        let receiver = Receiver::new(BlockCodec::default());
        let resolver = AncestryResolver::default();

        // Blocks 0..=3 arrive, 4 and 5 are lost, 6 and 7 arrive.
        for block in blocks[..4].iter().chain(&blocks[6..]) {
            receiver.receive(wire(block)).unwrap();
        }
        assert_eq!(receiver.orphans.len(), 2);

        let unknown = resolver
            .unknown_direct_ancestors(&blocks[7], &receiver.chain, &receiver.orphans)
            .unwrap();
        assert_eq!(unknown, HashSet::from([blocks[5].hash()]));

        // Block 5 arrives; it is itself an orphan and now 4 is missing.
        assert_eq!(
            receiver.receive(wire(&blocks[5])).unwrap(),
            ImportResult::NoParent
        );
        let unknown = resolver
            .unknown_ancestors_of(blocks[7].hash(), &receiver.chain, &receiver.orphans)
            .unwrap();
        assert_eq!(unknown, HashSet::from([blocks[4].hash()]));

        // Block 4 connects and the parked blocks follow.
        assert_eq!(
            receiver.receive(wire(&blocks[4])).unwrap(),
            ImportResult::ImportedBest
        );
        let parked: Vec<Arc<Block>> = blocks[5..]
            .iter()
            .map(|b| Arc::new(b.clone()))
            .rev()
            .collect();
        receiver.drain_orphans(&parked);

        assert!(receiver.orphans.is_empty());
        assert_eq!(
            receiver.chain.best_block().unwrap().hash(),
            blocks[7].hash()
        );
    }

    #[test]
    fn test_competing_branch_is_known_after_import() {
        let producer = BlockCodec::default();
        let blocks = produce_chain(&producer, 4, 1);
        let receiver = Receiver::new(BlockCodec::default());
        for block in &blocks {
            receiver.receive(wire(block)).unwrap();
        }

        let uncle = produce_block(&producer, 3, blocks[2].hash(), 1, 9);
        let nephew = produce_block(&producer, 4, uncle.hash(), 0, 9);

        assert_eq!(
            receiver.receive(wire(&nephew)).unwrap(),
            ImportResult::NoParent
        );
        let unknown = AncestryResolver::default()
            .unknown_ancestors_of(nephew.hash(), &receiver.chain, &receiver.orphans)
            .unwrap();
        assert_eq!(unknown, HashSet::from([uncle.hash()]));

        assert_eq!(
            receiver.receive(wire(&uncle)).unwrap(),
            ImportResult::ImportedNotBest
        );
        let unknown = AncestryResolver::default()
            .unknown_ancestors_of(nephew.hash(), &receiver.chain, &receiver.orphans)
            .unwrap();
        assert!(unknown.is_empty());
    }

    #[test]
    fn test_shuffled_delivery_converges() {
        let producer = BlockCodec::default();
        let blocks = produce_chain(&producer, 12, 1);
        let receiver = Receiver::new(BlockCodec::default());

        let mut order: Vec<&Block> = blocks.iter().collect();
        order.shuffle(&mut StdRng::seed_from_u64(7));
        for block in order {
            assert!(receiver.receive(wire(block)).is_ok());
        }

        let parked: Vec<Arc<Block>> = blocks
            .iter()
            .filter(|b| !receiver.chain.has_block(&b.hash()))
            .map(|b| Arc::new(b.clone()))
            .collect();
        receiver.drain_orphans(&parked);

        assert!(receiver.orphans.is_empty());
        assert_eq!(
            receiver.chain.best_block().unwrap().hash(),
            blocks[11].hash()
        );
    }

    #[test]
    fn test_long_orphan_run_hits_visit_limit() {
        let producer = BlockCodec::default();
        let blocks = produce_chain(&producer, 40, 0);
        let receiver = Receiver::new(BlockCodec::default());
        for block in &blocks[1..] {
            receiver.receive(wire(block)).unwrap();
        }
        assert_eq!(receiver.orphans.len(), 39);

        let bounded = AncestryResolver::new(AncestryConfig::with_max_visited(16));
        assert_eq!(
            bounded.unknown_ancestors_of(blocks[39].hash(), &receiver.chain, &receiver.orphans),
            Err(AncestryError::VisitLimitExceeded { limit: 16 })
        );
    }

    #[tokio::test]
    async fn test_tampered_block_is_reported_and_not_imported() {
        let (reporter, mut faults) = ChannelFaultReporter::channel();
        let receiver = Receiver::new(BlockCodec::new(Arc::new(reporter)));

        let producer = BlockCodec::default();
        let genesis = produce_block(&producer, 0, [0u8; 32], 0, 0);
        let honest = produce_block(&producer, 1, genesis.hash(), 2, 1);

        // Same header, different transactions: the declared root no longer matches.
        let other = produce_block(&producer, 1, genesis.hash(), 3, 1);
        let forged = BlockBuilder::new(
            honest.header().clone(),
            other
                .transactions()
                .iter()
                .map(|tx| tx.transaction().clone())
                .collect(),
            vec![],
        )
        .seal();

        receiver.receive(wire(&genesis)).unwrap();
        let err = receiver.receive(wire(&forged)).unwrap_err();
        assert!(err.is_integrity_failure());
        assert!(!receiver.chain.has_block(&forged.hash()));

        let report = faults.recv().await.unwrap();
        assert_eq!(report.topic, "txroot");

        assert_eq!(
            receiver.receive(wire(&honest)).unwrap(),
            ImportResult::ImportedBest
        );
    }
}

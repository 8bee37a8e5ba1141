//! # Block Codec Service
//!
//! Entry point for turning bytes or producer-supplied fields into blocks.
//! Pure decoding lives in the domain layer; this service adds logging and
//! escalates integrity failures to the configured [`FaultReporter`].

use crate::adapters::LoggingFaultReporter;
use crate::domain::block::{decode_block, signatures_hash, transactions_root, Block, BlockBuilder};
use crate::domain::header::{BlockHeader, HeaderFields};
use crate::domain::lazy::LazyBlock;
use crate::domain::transaction::Transaction;
use crate::domain::{BlockError, BlockResult};
use crate::ports::outbound::FaultReporter;
use shared_types::to_hex;
use std::sync::Arc;
use tracing::{debug, error};

/// Producer-supplied block contents.
///
/// `header.transactions_root` is the *declared* root and is checked against
/// `transactions`. `header.signature_root` is ignored and recomputed from
/// `signatures`.
#[derive(Clone, Debug, Default)]
pub struct BlockAssembly {
    pub header: HeaderFields,
    pub transactions: Vec<Transaction>,
    pub signatures: Vec<Vec<u8>>,
}

/// Block decoding and assembly with fault escalation.
#[derive(Clone)]
pub struct BlockCodec {
    faults: Arc<dyn FaultReporter>,
}

impl Default for BlockCodec {
    fn default() -> Self {
        Self::new(Arc::new(LoggingFaultReporter))
    }
}

impl BlockCodec {
    pub fn new(faults: Arc<dyn FaultReporter>) -> Self {
        Self { faults }
    }

    /// Decode and verify a canonical block encoding.
    pub fn decode(&self, raw: &[u8]) -> BlockResult<Block> {
        let block = decode_block(raw).map_err(|e| escalate(self.faults.as_ref(), e))?;
        debug!("[fc-01] Decoded block {}", block.short_description());
        Ok(block)
    }

    /// Decode into a mutable copy.
    pub fn decode_mutable(&self, raw: &[u8]) -> BlockResult<BlockBuilder> {
        self.decode(raw).map(|block| block.to_builder())
    }

    /// Wrap raw bytes for deferred decoding. Faults found by the eventual
    /// decode go to this codec's reporter.
    pub fn lazy(&self, raw: Vec<u8>) -> LazyBlock {
        LazyBlock::new(raw, Arc::clone(&self.faults))
    }

    /// Build a block from producer-supplied contents.
    ///
    /// The actual transactions root is computed and compared against the
    /// declared one; on mismatch nothing is built. The signature root is
    /// derived from the signatures in order.
    pub fn assemble(&self, assembly: BlockAssembly) -> BlockResult<BlockBuilder> {
        let BlockAssembly {
            header: mut fields,
            transactions,
            signatures,
        } = assembly;

        let computed = transactions_root(&transactions);
        if computed != fields.transactions_root {
            return Err(escalate(
                self.faults.as_ref(),
                BlockError::TransactionsRootMismatch {
                    number: fields.number,
                    declared: fields.transactions_root,
                    computed,
                },
            ));
        }
        fields.signature_root = signatures_hash(&signatures);

        let builder = BlockBuilder::new(BlockHeader::new(fields)?, transactions, signatures);
        debug!(
            "[fc-01] Assembled block #{} with {} txs, {} signatures",
            builder.header().number(),
            builder.as_block().transactions().len(),
            builder.as_block().signatures().len()
        );
        Ok(builder)
    }

    /// Re-check a block's transactions root against its transactions.
    pub fn verify(&self, block: &Block) -> BlockResult<()> {
        let computed = transactions_root(block.transactions().iter().map(|tx| tx.transaction()));
        let declared = block.header().transactions_root();
        if computed != declared {
            return Err(escalate(
                self.faults.as_ref(),
                BlockError::TransactionsRootMismatch {
                    number: block.number(),
                    declared,
                    computed,
                },
            ));
        }
        Ok(())
    }
}

/// Log and report integrity failures. Other errors pass through.
pub(crate) fn escalate(faults: &dyn FaultReporter, err: BlockError) -> BlockError {
    let topic = match &err {
        BlockError::TransactionsRootMismatch {
            declared,
            computed,
            number,
        } => {
            error!(
                severity = "critical",
                block = *number,
                declared = %to_hex(declared),
                computed = %to_hex(computed),
                "[fc-01] Transactions trie root validation failed"
            );
            Some("txroot")
        }
        BlockError::InvalidArity { .. } => {
            error!(severity = "critical", error = %err, "[fc-01] Invalid block encoding");
            Some("block-format")
        }
        _ => None,
    };
    if let Some(topic) = topic {
        faults.report(topic, &err.to_string());
    }
    err
}

impl std::fmt::Debug for BlockCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockCodec").finish_non_exhaustive()
    }
}

//! Deferred decoding of raw block bytes.

use super::block::{decode_block, Block};
use super::BlockResult;
use crate::ports::outbound::FaultReporter;
use crate::service::escalate;
use parking_lot::Mutex;
use shared_types::Hash;
use std::sync::{Arc, OnceLock};

/// Raw block bytes that are decoded on first access.
///
/// Decoding happens at most once, even under concurrent readers, and an
/// integrity failure is escalated to `faults` by that single decode. The raw
/// bytes are released as soon as they have been decoded; any later encoding
/// is produced from the parsed fields.
pub struct LazyBlock {
    raw: Mutex<Option<Vec<u8>>>,
    parsed: OnceLock<BlockResult<Block>>,
    faults: Arc<dyn FaultReporter>,
}

impl LazyBlock {
    /// See also [`crate::BlockCodec::lazy`].
    pub fn new(raw: Vec<u8>, faults: Arc<dyn FaultReporter>) -> Self {
        Self {
            raw: Mutex::new(Some(raw)),
            parsed: OnceLock::new(),
            faults,
        }
    }

    /// The decoded block, decoding it now if needed.
    ///
    /// A failed decode is remembered and returned to every later caller.
    pub fn block(&self) -> BlockResult<&Block> {
        self.parsed
            .get_or_init(|| {
                let raw = self.raw.lock().take().unwrap_or_default();
                decode_block(&raw).map_err(|e| escalate(self.faults.as_ref(), e))
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    pub fn hash(&self) -> BlockResult<Hash> {
        self.block().map(Block::hash)
    }

    pub fn is_parsed(&self) -> bool {
        self.parsed.get().is_some()
    }

    /// Whether the undecoded bytes are still held.
    pub fn holds_raw_bytes(&self) -> bool {
        self.raw.lock().is_some()
    }

    pub fn into_block(self) -> BlockResult<Block> {
        match self.parsed.into_inner() {
            Some(result) => result,
            None => {
                let raw = self.raw.into_inner().unwrap_or_default();
                decode_block(&raw).map_err(|e| escalate(self.faults.as_ref(), e))
            }
        }
    }
}

impl std::fmt::Debug for LazyBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyBlock")
            .field("parsed", &self.is_parsed())
            .finish()
    }
}

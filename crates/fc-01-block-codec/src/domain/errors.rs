//! Error types for the block codec.

use shared_types::Hash;
use thiserror::Error;

/// Block construction and decoding failures.
///
/// `InvalidArity` and `TransactionsRootMismatch` are integrity failures: the
/// input is corrupted or the producer disagrees on consensus data. The codec
/// service escalates both to the fault channel before returning them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlockError {
    #[error("Block encoding must have exactly {expected} items, got {actual}")]
    InvalidArity { expected: usize, actual: usize },

    #[error("Malformed {field}: {reason}")]
    Format { field: &'static str, reason: String },

    #[error("Transactions root mismatch for block #{number}: declared {declared:?}, computed {computed:?}")]
    TransactionsRootMismatch {
        number: u64,
        declared: Hash,
        computed: Hash,
    },

    #[error("Extra data too large: {size} bytes > {limit} bytes")]
    ExtraDataTooLarge { size: usize, limit: usize },
}

impl BlockError {
    /// Whether this failure must be treated as a consensus-level fault.
    pub fn is_integrity_failure(&self) -> bool {
        matches!(
            self,
            BlockError::InvalidArity { .. } | BlockError::TransactionsRootMismatch { .. }
        )
    }

    pub(crate) fn format(field: &'static str, reason: impl ToString) -> Self {
        BlockError::Format {
            field,
            reason: reason.to_string(),
        }
    }
}

/// Result type for block operations
pub type BlockResult<T> = Result<T, BlockError>;

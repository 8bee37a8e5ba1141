//! Error types for ancestry resolution.

use thiserror::Error;

/// Ancestry resolution failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AncestryError {
    /// The walk looked up more hashes than allowed. No partial result is
    /// returned.
    #[error("Ancestry walk exceeded {limit} visited hashes")]
    VisitLimitExceeded { limit: usize },
}

/// Result type for ancestry operations
pub type AncestryResult<T> = Result<T, AncestryError>;

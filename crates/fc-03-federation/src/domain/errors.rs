//! Vote outcomes and election load errors.

use thiserror::Error;

/// Why a vote was not recorded. Expected during normal operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteRejection {
    UnauthorizedVoter,
    DuplicateVote,
}

/// Result of [`crate::Election::vote`].
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteOutcome {
    Accepted,
    Rejected(VoteRejection),
}

impl VoteOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, VoteOutcome::Accepted)
    }
}

/// Refusal to build an election from existing state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ElectionError {
    #[error("Unauthorized voter {voter} in votes for {spec}")]
    UnauthorizedVoter { voter: String, spec: String },

    #[error("Voter {voter} appears twice in votes for {spec}")]
    DuplicateVoter { voter: String, spec: String },

    #[error("Election snapshot serialization failed: {0}")]
    Serialization(String),
}

/// Result type for election loading
pub type ElectionResult<T> = Result<T, ElectionError>;

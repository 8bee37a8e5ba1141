//! # Election Service
//!
//! Federation members vote for calls; a call wins once it has at least the
//! authorizer's quorum of votes. Winning entries are cleared after the call
//! is executed so the same quorum cannot trigger it twice.
//!
//! Rejected votes are ordinary outcomes ([`VoteOutcome`]); refusing to load
//! inconsistent state is an error ([`ElectionError`]).

use crate::domain::{
    CallSpec, ElectionError, ElectionResult, ElectionSnapshot, VoteOutcome, VoteRejection,
};
use crate::ports::outbound::Authorizer;
use shared_types::{to_hex, Address};
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, info, warn};

/// Vote ledger keyed by call.
///
/// Calls are kept ordered, so when several reach quorum at once the smallest
/// [`CallSpec`] wins. Not internally synchronized.
#[derive(Debug, Clone)]
pub struct Election<A> {
    authorizer: A,
    votes: BTreeMap<CallSpec, Vec<Address>>,
}

impl<A: Authorizer> Election<A> {
    pub fn new(authorizer: A) -> Self {
        Self {
            authorizer,
            votes: BTreeMap::new(),
        }
    }

    /// Election seeded with existing votes.
    ///
    /// Every voter must pass the authorizer *now* and appear at most once
    /// per call; otherwise the whole state is refused. Calls without votes
    /// are dropped.
    pub fn with_votes(
        authorizer: A,
        votes: BTreeMap<CallSpec, Vec<Address>>,
    ) -> ElectionResult<Self> {
        for (spec, voters) in &votes {
            let mut seen = HashSet::with_capacity(voters.len());
            for voter in voters {
                if !authorizer.is_authorized(voter) {
                    warn!(voter = %to_hex(voter), %spec, "[fc-03] Refusing election state");
                    return Err(ElectionError::UnauthorizedVoter {
                        voter: to_hex(voter),
                        spec: spec.to_string(),
                    });
                }
                if !seen.insert(voter) {
                    return Err(ElectionError::DuplicateVoter {
                        voter: to_hex(voter),
                        spec: spec.to_string(),
                    });
                }
            }
        }

        let votes = votes
            .into_iter()
            .filter(|(_, voters)| !voters.is_empty())
            .collect();
        Ok(Self { authorizer, votes })
    }

    /// Election rebuilt from an encoded [`ElectionSnapshot`].
    pub fn restore(authorizer: A, encoded: &[u8]) -> ElectionResult<Self> {
        let snapshot = ElectionSnapshot::decode(encoded)?;
        Self::with_votes(authorizer, snapshot.votes)
    }

    pub fn snapshot(&self) -> ElectionSnapshot {
        ElectionSnapshot {
            votes: self.votes.clone(),
        }
    }

    pub fn authorizer(&self) -> &A {
        &self.authorizer
    }

    pub fn votes(&self) -> &BTreeMap<CallSpec, Vec<Address>> {
        &self.votes
    }

    /// Voters for `spec`, in arrival order.
    pub fn votes_for(&self, spec: &CallSpec) -> &[Address] {
        self.votes.get(spec).map(Vec::as_slice).unwrap_or_default()
    }

    /// Record `voter`'s vote for `spec`. A rejected vote changes nothing.
    pub fn vote(&mut self, spec: CallSpec, voter: Address) -> VoteOutcome {
        if !self.authorizer.is_authorized(&voter) {
            warn!(voter = %to_hex(&voter), %spec, "[fc-03] Unauthorized voter");
            return VoteOutcome::Rejected(VoteRejection::UnauthorizedVoter);
        }
        if self.votes_for(&spec).contains(&voter) {
            warn!(voter = %to_hex(&voter), %spec, "[fc-03] Vote already registered");
            return VoteOutcome::Rejected(VoteRejection::DuplicateVote);
        }

        let voters = self.votes.entry(spec).or_default();
        voters.push(voter);
        debug!(votes = voters.len(), "[fc-03] Vote registered");
        VoteOutcome::Accepted
    }

    /// The smallest call with at least a quorum of votes.
    pub fn winner(&self) -> Option<&CallSpec> {
        let quorum = self.authorizer.required_quorum();
        self.votes
            .iter()
            .find(|(_, voters)| voters.len() >= quorum)
            .map(|(spec, _)| spec)
    }

    /// Remove the current winner's votes. Returns the call that was cleared.
    pub fn clear_winner(&mut self) -> Option<CallSpec> {
        let winner = self.winner().cloned()?;
        self.votes.remove(&winner);
        info!(spec = %winner, "[fc-03] Cleared winning call");
        Some(winner)
    }

    /// Remove the votes for `spec`, winning or not. Returns its voters.
    pub fn clear_winner_spec(&mut self, spec: &CallSpec) -> Option<Vec<Address>> {
        self.votes.remove(spec)
    }

    /// Drop every vote.
    pub fn clear(&mut self) {
        self.votes.clear();
    }
}

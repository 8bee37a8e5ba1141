//! Serializable copy of an election's votes.

use super::{CallSpec, ElectionError, ElectionResult};
use serde::{Deserialize, Serialize};
use shared_types::Address;
use std::collections::BTreeMap;

/// Votes per call, voters in arrival order.
///
/// A snapshot is plain data: it is only checked against an authorizer when
/// turned back into an election.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionSnapshot {
    pub votes: BTreeMap<CallSpec, Vec<Address>>,
}

impl ElectionSnapshot {
    pub fn encode(&self) -> ElectionResult<Vec<u8>> {
        bincode::serialize(self).map_err(|e| ElectionError::Serialization(e.to_string()))
    }

    pub fn decode(bytes: &[u8]) -> ElectionResult<Self> {
        bincode::deserialize(bytes).map_err(|e| ElectionError::Serialization(e.to_string()))
    }
}

//! # Federation Election (fc-03)
//!
//! Quorum voting among federation members for bridge calls.
//!
//! ## Invariants
//!
//! | ID | Invariant | Enforced by |
//! |----|-----------|-------------|
//! | 1 | Every recorded voter passes the authorizer | `vote`, `with_votes`, `restore` |
//! | 2 | A voter appears at most once per call | `vote`, `with_votes` |
//! | 3 | Winner choice is deterministic | `BTreeMap<CallSpec, _>` ordering |
//! | 4 | A rejected vote changes nothing | `vote` |
//!
//! ## Usage
//!
//! ```
//! use fc_03_federation::{
//!     AddressBasedAuthorizer, CallSpec, Election, MinimumRequiredCalculation,
//! };
//!
//! let members = [[1u8; 20], [2u8; 20], [3u8; 20]];
//! let authorizer = AddressBasedAuthorizer::new(members, MinimumRequiredCalculation::Majority);
//! let mut election = Election::new(authorizer);
//!
//! let call = CallSpec::new("release", vec![vec![0x2a]]);
//! assert!(election.vote(call.clone(), members[0]).is_accepted());
//! assert!(election.vote(call.clone(), members[1]).is_accepted());
//! assert_eq!(election.clear_winner(), Some(call));
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export key types for convenience
pub use adapters::{AddressBasedAuthorizer, MinimumRequiredCalculation};
pub use domain::{
    CallSpec, ElectionError, ElectionResult, ElectionSnapshot, VoteOutcome, VoteRejection,
};
pub use ports::outbound::Authorizer;
pub use service::Election;

//! # Domain Layer
//!
//! - `call_spec` - The voted-on call descriptor
//! - `snapshot` - Serializable election state
//! - `errors` - Vote outcomes and load failures

pub mod call_spec;
pub mod errors;
pub mod snapshot;

pub use call_spec::CallSpec;
pub use errors::{ElectionError, ElectionResult, VoteOutcome, VoteRejection};
pub use snapshot::ElectionSnapshot;

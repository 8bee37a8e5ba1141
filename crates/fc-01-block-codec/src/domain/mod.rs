//! # Domain Layer
//!
//! Block values and their canonical encoding. No I/O, no logging.
//!
//! ## Modules
//!
//! - `header` - Header fields, memoized encoding and hash
//! - `transaction` - Transactions and the system transaction predicate
//! - `block` - `BlockBuilder` / `Block` lifecycle, roots, decoding
//! - `lazy` - Deferred decoding of raw bytes
//! - `errors` - Domain error types

pub mod block;
pub mod errors;
mod fields;
pub mod header;
pub mod lazy;
pub mod transaction;

pub use errors::{BlockError, BlockResult};

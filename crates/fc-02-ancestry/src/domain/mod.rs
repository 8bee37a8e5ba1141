//! # Domain Layer
//!
//! - `errors` - Resolution failures
//! - `value_objects` - Resolver configuration
//! - `block_list` - Helpers over block lists and chain membership

pub mod block_list;
pub mod errors;
pub mod value_objects;

pub use errors::{AncestryError, AncestryResult};
pub use value_objects::AncestryConfig;

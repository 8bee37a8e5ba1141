//! # Adapters

pub mod address_authorizer;

pub use address_authorizer::{AddressBasedAuthorizer, MinimumRequiredCalculation};

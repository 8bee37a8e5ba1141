//! # Outbound Ports (Driven Ports)

use shared_types::Address;
use std::sync::Arc;

/// Who may vote and how many votes win.
///
/// Production: `AddressBasedAuthorizer` over the federation member set.
pub trait Authorizer {
    fn is_authorized(&self, voter: &Address) -> bool;

    /// Number of votes a call needs to win.
    fn required_quorum(&self) -> usize;
}

impl<A: Authorizer + ?Sized> Authorizer for Arc<A> {
    fn is_authorized(&self, voter: &Address) -> bool {
        (**self).is_authorized(voter)
    }

    fn required_quorum(&self) -> usize {
        (**self).required_quorum()
    }
}

impl<A: Authorizer + ?Sized> Authorizer for &A {
    fn is_authorized(&self, voter: &Address) -> bool {
        (**self).is_authorized(voter)
    }

    fn required_quorum(&self) -> usize {
        (**self).required_quorum()
    }
}

//! Authorization by a fixed set of member addresses.

use crate::ports::outbound::Authorizer;
use serde::{Deserialize, Serialize};
use shared_types::Address;
use std::collections::BTreeSet;

/// How the quorum follows from the number of members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MinimumRequiredCalculation {
    One,
    /// `n / 2 + 1`
    Majority,
    All,
}

/// Members are authorized; everyone else is not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressBasedAuthorizer {
    members: BTreeSet<Address>,
    calculation: MinimumRequiredCalculation,
}

impl AddressBasedAuthorizer {
    pub fn new<I>(members: I, calculation: MinimumRequiredCalculation) -> Self
    where
        I: IntoIterator<Item = Address>,
    {
        Self {
            members: members.into_iter().collect(),
            calculation,
        }
    }

    pub fn number_of_members(&self) -> usize {
        self.members.len()
    }

    pub fn members(&self) -> impl Iterator<Item = &Address> {
        self.members.iter()
    }
}

impl Authorizer for AddressBasedAuthorizer {
    fn is_authorized(&self, voter: &Address) -> bool {
        self.members.contains(voter)
    }

    fn required_quorum(&self) -> usize {
        let n = self.members.len();
        match self.calculation {
            MinimumRequiredCalculation::One => 1,
            MinimumRequiredCalculation::Majority => n / 2 + 1,
            MinimumRequiredCalculation::All => n,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn members(n: u8) -> Vec<Address> {
        (1..=n).map(|i| [i; 20]).collect()
    }

    #[test]
    fn test_quorum_calculations() {
        let one = AddressBasedAuthorizer::new(members(5), MinimumRequiredCalculation::One);
        let majority = AddressBasedAuthorizer::new(members(5), MinimumRequiredCalculation::Majority);
        let all = AddressBasedAuthorizer::new(members(5), MinimumRequiredCalculation::All);

        assert_eq!(one.required_quorum(), 1);
        assert_eq!(majority.required_quorum(), 3);
        assert_eq!(all.required_quorum(), 5);

        let even = AddressBasedAuthorizer::new(members(4), MinimumRequiredCalculation::Majority);
        assert_eq!(even.required_quorum(), 3);
    }

    #[test]
    fn test_membership() {
        let authorizer = AddressBasedAuthorizer::new(members(3), MinimumRequiredCalculation::One);
        assert!(authorizer.is_authorized(&[2; 20]));
        assert!(!authorizer.is_authorized(&[9; 20]));
    }

    #[test]
    fn test_duplicate_members_count_once() {
        let authorizer = AddressBasedAuthorizer::new(
            vec![[1; 20], [1; 20], [2; 20]],
            MinimumRequiredCalculation::All,
        );
        assert_eq!(authorizer.number_of_members(), 2);
        assert_eq!(authorizer.required_quorum(), 2);
    }
}

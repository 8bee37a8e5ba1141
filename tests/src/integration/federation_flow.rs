//! # Federation Flow
//!
//! A federation of five members votes on bridge calls, persists its ledger,
//! restarts, and carries on. Membership rotation between restarts must make
//! the persisted ledger unloadable rather than silently re-attributed.

#[cfg(test)]
mod tests {
    use fc_03_federation::{
        AddressBasedAuthorizer, CallSpec, Election, ElectionError, MinimumRequiredCalculation,
        VoteOutcome, VoteRejection,
    };
    use shared_types::Address;

    fn member(i: u8) -> Address {
        [i; 20]
    }

    fn federation() -> AddressBasedAuthorizer {
        AddressBasedAuthorizer::new((1..=5).map(member), MinimumRequiredCalculation::Majority)
    }

    fn release(tx: u8) -> CallSpec {
        CallSpec::new("release", vec![vec![tx; 32], vec![0x00, 0x64]])
    }

    #[test]
    fn test_votes_survive_restart() {
        let mut election = Election::new(federation());
        assert!(election.vote(release(1), member(1)).is_accepted());
        assert!(election.vote(release(1), member(2)).is_accepted());
        assert!(election.vote(release(2), member(3)).is_accepted());
        assert_eq!(election.winner(), None);

        let persisted = election.snapshot().encode().unwrap();
        drop(election);

        let mut election = Election::restore(federation(), &persisted).unwrap();
        assert_eq!(election.votes_for(&release(1)), &[member(1), member(2)]);
        assert_eq!(
            election.vote(release(1), member(2)),
            VoteOutcome::Rejected(VoteRejection::DuplicateVote)
        );

        assert!(election.vote(release(1), member(4)).is_accepted());
        assert_eq!(election.winner(), Some(&release(1)));

        // Executing the call clears it; the other ledger entry stays.
        assert_eq!(election.clear_winner(), Some(release(1)));
        assert_eq!(election.winner(), None);
        assert_eq!(election.votes_for(&release(2)), &[member(3)]);
    }

    #[test]
    fn test_outsider_cannot_tip_the_vote() {
        let mut election = Election::new(federation());
        for i in 1..=2 {
            let _ = election.vote(release(7), member(i));
        }
        assert_eq!(
            election.vote(release(7), member(9)),
            VoteOutcome::Rejected(VoteRejection::UnauthorizedVoter)
        );
        assert_eq!(election.winner(), None);
    }

    #[test]
    fn test_rotation_invalidates_persisted_ledger() {
        let mut election = Election::new(federation());
        let _ = election.vote(release(3), member(5));
        let persisted = election.snapshot().encode().unwrap();

        // Member 5 rotated out for member 6.
        let rotated = AddressBasedAuthorizer::new(
            (1..=4).chain([6]).map(member),
            MinimumRequiredCalculation::Majority,
        );
        assert!(matches!(
            Election::restore(rotated, &persisted),
            Err(ElectionError::UnauthorizedVoter { .. })
        ));
    }

    #[test]
    fn test_corrupt_ledger_is_refused() {
        assert!(matches!(
            Election::restore(federation(), &[0xFF; 7]),
            Err(ElectionError::Serialization(_))
        ));
    }
}

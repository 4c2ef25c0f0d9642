#![allow(dead_code)]

extern crate std;

use soroban_sdk::Address;

use crate::test::RoomFixture;
use crate::types::{Proposal, ProposalState};

/// INV-1: The sum of all credits never exceeds what the room holds.
pub fn assert_credits_covered(f: &RoomFixture, holders: &[&Address]) {
    let sum: i128 = holders.iter().map(|a| f.room.get_deposit(a)).sum();
    let held = f.room.get_balance();
    assert!(
        sum <= held,
        "INV-1 violated: credits {} exceed held balance {}",
        sum,
        held
    );
    assert_eq!(
        f.room.get_total_credited(),
        sum,
        "INV-1 violated: running total diverged from per-address credits"
    );
}

/// INV-2: No credit is ever negative.
pub fn assert_credits_non_negative(f: &RoomFixture, holders: &[&Address]) {
    for holder in holders {
        let credit = f.room.get_deposit(holder);
        assert!(credit >= 0, "INV-2 violated: negative credit {}", credit);
    }
}

/// INV-3: Proposal ids are sequential starting from 0.
pub fn assert_sequential_ids(proposals: &[Proposal]) {
    for (i, proposal) in proposals.iter().enumerate() {
        assert_eq!(
            proposal.id, i as u64,
            "INV-3 violated: expected id {}, got {}",
            i, proposal.id
        );
    }
}

/// INV-4: Only forward transitions are observable between two snapshots.
pub fn assert_valid_state_change(from: ProposalState, to: ProposalState) {
    if from == to {
        return;
    }
    assert!(
        from.can_transition_to(to),
        "INV-4 violated: invalid state change from {:?} to {:?}",
        from,
        to
    );
}

/// INV-5: Everything except the state is immutable after submission.
pub fn assert_proposal_immutable_fields(original: &Proposal, current: &Proposal) {
    assert_eq!(original.id, current.id, "INV-5 violated: id changed");
    assert_eq!(
        original.submitter, current.submitter,
        "INV-5 violated: submitter changed"
    );
    assert_eq!(original.uri, current.uri, "INV-5 violated: uri changed");
    assert_eq!(
        original.amount_requested, current.amount_requested,
        "INV-5 violated: amount_requested changed"
    );
}

extern crate std;

use daonative_core::events::TransferEvent;
use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    vec, Address, IntoVal, String, TryIntoVal,
};

use crate::test::{setup, FUNDING_AMOUNT, PROPOSAL_AMOUNT};
use crate::{Approve, SubmitProposal};

#[test]
fn test_deposit_emits_transfer_into_room() {
    let f = setup();
    f.fund(&f.owner, FUNDING_AMOUNT);

    let last_event = f.env.events().all().last().expect("No events found");

    assert_eq!(last_event.0, f.room.address);
    assert_eq!(
        last_event.1,
        vec![&f.env, symbol_short!("transfer").into_val(&f.env)]
    );
    let data: TransferEvent = last_event.2.try_into_val(&f.env).unwrap();
    assert_eq!(
        data,
        TransferEvent {
            from: f.owner.clone(),
            to: f.room.address.clone(),
            amount: FUNDING_AMOUNT,
        }
    );
}

#[test]
fn test_withdraw_emits_transfer_out_of_room() {
    let f = setup();
    f.fund(&f.owner, FUNDING_AMOUNT);
    f.room.withdraw(&f.owner, &FUNDING_AMOUNT);

    let last_event = f.env.events().all().last().expect("No events found");
    let data: TransferEvent = last_event.2.try_into_val(&f.env).unwrap();
    assert_eq!(
        data,
        TransferEvent {
            from: f.room.address.clone(),
            to: f.owner.clone(),
            amount: FUNDING_AMOUNT,
        }
    );
}

#[test]
fn test_submit_proposal_event() {
    let f = setup();
    let contributor = Address::generate(&f.env);
    let id = f.submit(&contributor, PROPOSAL_AMOUNT);

    let last_event = f.env.events().all().last().expect("No events found");

    assert_eq!(last_event.0, f.room.address);
    assert_eq!(
        last_event.1,
        vec![
            &f.env,
            symbol_short!("submit").into_val(&f.env),
            id.into_val(&f.env),
        ]
    );
    let data: SubmitProposal = last_event.2.try_into_val(&f.env).unwrap();
    assert_eq!(
        data,
        SubmitProposal {
            proposal_id: id,
            submitter: contributor,
            uri: String::from_str(&f.env, "https://link.co.test"),
            amount_requested: PROPOSAL_AMOUNT,
        }
    );
}

#[test]
fn test_approve_event_carries_amount_and_id() {
    let f = setup();
    let contributor = Address::generate(&f.env);
    f.fund(&f.owner, FUNDING_AMOUNT);
    let id = f.submit(&contributor, PROPOSAL_AMOUNT);

    f.room.approve_proposal(&f.owner, &id);

    let last_event = f.env.events().all().last().expect("No events found");
    assert_eq!(
        last_event.1,
        vec![
            &f.env,
            symbol_short!("approve").into_val(&f.env),
            id.into_val(&f.env),
        ]
    );
    let data: Approve = last_event.2.try_into_val(&f.env).unwrap();
    assert_eq!(
        data,
        Approve {
            amount: PROPOSAL_AMOUNT,
            proposal_id: id,
        }
    );
}

#[test]
fn test_emergency_withdrawal_emits_transfer() {
    let f = setup();
    f.fund(&f.owner, FUNDING_AMOUNT);
    f.room.emergency_withdrawal(&f.owner);

    let last_event = f.env.events().all().last().expect("No events found");
    let data: TransferEvent = last_event.2.try_into_val(&f.env).unwrap();
    assert_eq!(data.to, f.owner);
    assert_eq!(data.amount, FUNDING_AMOUNT);
}

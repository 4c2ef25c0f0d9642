extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    vec, Address, IntoVal, String, TryIntoVal,
};

use crate::test::{setup, FUNDING_AMOUNT, VOTE_AMOUNT};
use crate::{SubmitAnswer, Vote};

#[test]
fn test_submit_answer_event() {
    let f = setup();
    let solver = Address::generate(&f.env);
    let id = f.answer(&solver);

    let last_event = f.env.events().all().last().expect("No events found");

    assert_eq!(last_event.0, f.bounty.address);
    assert_eq!(
        last_event.1,
        vec![
            &f.env,
            symbol_short!("answer").into_val(&f.env),
            id.into_val(&f.env),
        ]
    );
    let data: SubmitAnswer = last_event.2.try_into_val(&f.env).unwrap();
    assert_eq!(
        data,
        SubmitAnswer {
            answer_id: id,
            submitter: solver,
            uri: String::from_str(&f.env, "ipfs://answer"),
        }
    );
}

#[test]
fn test_vote_event() {
    let f = setup();
    let solver = Address::generate(&f.env);
    f.fund(&f.owner, FUNDING_AMOUNT);
    let id = f.answer(&solver);

    f.bounty.vote(&f.owner, &id, &VOTE_AMOUNT);

    let last_event = f.env.events().all().last().expect("No events found");
    assert_eq!(
        last_event.1,
        vec![
            &f.env,
            symbol_short!("vote").into_val(&f.env),
            id.into_val(&f.env),
        ]
    );
    let data: Vote = last_event.2.try_into_val(&f.env).unwrap();
    assert_eq!(
        data,
        Vote {
            amount: VOTE_AMOUNT,
            answer_id: id,
        }
    );
}

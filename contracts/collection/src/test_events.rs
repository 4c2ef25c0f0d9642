extern crate std;

use daonative_core::events::NftTransfer;
use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    vec, Address, IntoVal, TryIntoVal,
};

use crate::test::setup;

#[test]
fn test_mint_emits_nft_transfer_from_none() {
    let f = setup();
    let alice = Address::generate(&f.env);
    let id = f.mint(&alice, "a", 0);

    let last_event = f.env.events().all().last().expect("No events found");

    assert_eq!(last_event.0, f.collection.address);
    assert_eq!(
        last_event.1,
        vec![
            &f.env,
            symbol_short!("nft_xfer").into_val(&f.env),
            id.into_val(&f.env),
        ]
    );
    let data: NftTransfer = last_event.2.try_into_val(&f.env).unwrap();
    assert_eq!(
        data,
        NftTransfer {
            from: None,
            to: alice,
            token_id: id,
        }
    );
}

#[test]
fn test_transfer_emits_nft_transfer() {
    let f = setup();
    let alice = Address::generate(&f.env);
    let bob = Address::generate(&f.env);
    let id = f.mint(&alice, "a", 0);
    f.collection.transfer(&alice, &bob, &id);

    let last_event = f.env.events().all().last().expect("No events found");
    let data: NftTransfer = last_event.2.try_into_val(&f.env).unwrap();
    assert_eq!(
        data,
        NftTransfer {
            from: Some(alice),
            to: bob,
            token_id: id,
        }
    );
}

#[test]
fn test_pause_and_unpause_events_carry_caller() {
    let f = setup();

    f.collection.pause(&f.owner);
    let last_event = f.env.events().all().last().expect("No events found");
    assert_eq!(
        last_event.1,
        vec![&f.env, symbol_short!("paused").into_val(&f.env)]
    );
    let caller: Address = last_event.2.try_into_val(&f.env).unwrap();
    assert_eq!(caller, f.owner);

    f.collection.unpause(&f.owner);
    let last_event = f.env.events().all().last().expect("No events found");
    assert_eq!(
        last_event.1,
        vec![&f.env, symbol_short!("unpaused").into_val(&f.env)]
    );
}

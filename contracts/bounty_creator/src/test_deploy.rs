use daonative_core::events::InstanceCreated;
use soroban_sdk::{
    testutils::{Address as _, Events},
    vec, Address, Env, IntoVal, String, Symbol, TryIntoVal,
};

use crate::{BountyCreator, BountyCreatorClient};

mod bounty_wasm {
    soroban_sdk::contractimport!(file = "../../target/wasm32-unknown-unknown/release/bounty.wasm");
}

#[test]
fn test_create_bounty_deploys_and_registers() {
    let env = Env::default();
    env.mock_all_auths();

    let wasm_hash = env.deployer().upload_contract_wasm(bounty_wasm::WASM);
    let creator_id = env.register(BountyCreator, (wasm_hash,));
    let creator = BountyCreatorClient::new(&env, &creator_id);

    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    let token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();

    let first = creator.create_bounty(&alice, &token, &String::from_str(&env, "first"));

    let last_event = env.events().all().last().expect("No events found");
    assert_eq!(last_event.0, creator_id);
    assert_eq!(
        last_event.1,
        vec![&env, Symbol::new(&env, "bounty_created").into_val(&env)]
    );
    let data: InstanceCreated = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        data,
        InstanceCreated {
            instance: first.clone(),
            owner: alice.clone(),
        }
    );

    let second = creator.create_bounty(&bob, &token, &String::from_str(&env, "second"));
    assert_ne!(first, second);
    assert_eq!(creator.get_bounties(), vec![&env, first.clone(), second.clone()]);

    let bounty = bounty_wasm::Client::new(&env, &first);
    assert_eq!(bounty.get_owner(), alice);
    assert_eq!(bounty.get_token(), token);
    assert_eq!(bounty.get_uri(), String::from_str(&env, "first"));
    assert_eq!(bounty_wasm::Client::new(&env, &second).get_owner(), bob);
}

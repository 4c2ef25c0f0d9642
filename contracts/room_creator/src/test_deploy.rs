use daonative_core::events::InstanceCreated;
use soroban_sdk::{
    testutils::{Address as _, Events},
    vec, Address, Env, IntoVal, String, Symbol, TryIntoVal,
};

use crate::{RoomCreator, RoomCreatorClient};

mod room_wasm {
    soroban_sdk::contractimport!(file = "../../target/wasm32-unknown-unknown/release/room.wasm");
}

#[test]
fn test_create_room_deploys_and_registers() {
    let env = Env::default();
    env.mock_all_auths();

    let wasm_hash = env.deployer().upload_contract_wasm(room_wasm::WASM);
    let creator_id = env.register(RoomCreator, (wasm_hash,));
    let creator = RoomCreatorClient::new(&env, &creator_id);

    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    let token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();

    let first = creator.create_room(&alice, &token, &String::from_str(&env, "first"));

    let last_event = env.events().all().last().expect("No events found");
    assert_eq!(last_event.0, creator_id);
    assert_eq!(
        last_event.1,
        vec![&env, Symbol::new(&env, "room_created").into_val(&env)]
    );
    let data: InstanceCreated = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        data,
        InstanceCreated {
            instance: first.clone(),
            owner: alice.clone(),
        }
    );

    let second = creator.create_room(&bob, &token, &String::from_str(&env, "second"));
    assert_ne!(first, second);
    assert_eq!(creator.get_rooms(), vec![&env, first.clone(), second.clone()]);

    let room = room_wasm::Client::new(&env, &first);
    assert_eq!(room.get_owner(), alice);
    assert_eq!(room.get_token(), token);
    assert_eq!(room.get_uri(), String::from_str(&env, "first"));
    assert_eq!(room_wasm::Client::new(&env, &second).get_owner(), bob);
}

use daonative_core::events::InstanceCreated;
use soroban_sdk::{
    testutils::{Address as _, Events},
    vec, Address, BytesN, Env, IntoVal, String, Symbol, TryIntoVal,
};

use crate::{CollectionCreator, CollectionCreatorClient};

mod collection_wasm {
    soroban_sdk::contractimport!(
        file = "../../target/wasm32-unknown-unknown/release/collection.wasm"
    );
}

#[test]
fn test_create_collection_deploys_and_registers() {
    let env = Env::default();
    env.mock_all_auths();

    let wasm_hash = env.deployer().upload_contract_wasm(collection_wasm::WASM);
    let creator_id = env.register(CollectionCreator, (wasm_hash,));
    let creator = CollectionCreatorClient::new(&env, &creator_id);

    let alice = Address::generate(&env);
    let signer = BytesN::from_array(&env, &[5u8; 32]);
    let collection = creator.create_collection(
        &alice,
        &String::from_str(&env, "Guild"),
        &String::from_str(&env, "GLD"),
        &String::from_str(&env, "ipfs://guild"),
        &0,
        &100,
        &true,
        &signer,
    );

    let last_event = env.events().all().last().expect("No events found");
    assert_eq!(
        last_event.1,
        vec![&env, Symbol::new(&env, "collection_created").into_val(&env)]
    );
    let data: InstanceCreated = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(data.instance, collection);
    assert_eq!(data.owner, alice);

    assert_eq!(creator.get_collections(), vec![&env, collection.clone()]);

    let client = collection_wasm::Client::new(&env, &collection);
    assert_eq!(client.get_owner(), alice);
    assert_eq!(client.get_max_supply(), 100);
    assert!(client.is_one_token_per_address());
    assert_eq!(client.name(), String::from_str(&env, "Guild"));
}

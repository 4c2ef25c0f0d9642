//! # Collection Creator
//!
//! Deploys `collection` instances and records them in an append-only
//! registry. The caller becomes the new collection's owner.
//!
//! `create_collection` is exercised by `test_deploy`, which needs the `collection`
//! release wasm and the `wasm-tests` feature (see the workspace README).

#![no_std]

use daonative_core::{events, registry};
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String, Vec};

#[cfg(all(test, feature = "wasm-tests"))]
mod test_deploy;

#[contract]
pub struct CollectionCreator;

#[contractimpl]
impl CollectionCreator {
    pub fn __constructor(env: Env, wasm_hash: BytesN<32>) {
        registry::init(&env, &wasm_hash);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn create_collection(
        env: Env,
        caller: Address,
        name: String,
        symbol: String,
        uri: String,
        mint_end_timestamp: u64,
        max_supply: u32,
        one_token_per_address: bool,
        signer: BytesN<32>,
    ) -> Address {
        caller.require_auth();
        let collection = registry::deploy(
            &env,
            (
                caller.clone(),
                name,
                symbol,
                uri,
                mint_end_timestamp,
                max_supply,
                one_token_per_address,
                signer,
            ),
        );
        events::emit_instance_created(&env, "collection_created", collection.clone(), caller);
        collection
    }

    pub fn get_collections(env: Env) -> Vec<Address> {
        registry::instances(&env)
    }

    pub fn get_collection_count(env: Env) -> u32 {
        registry::count(&env)
    }

    pub fn get_collection_wasm(env: Env) -> BytesN<32> {
        registry::child_wasm(&env)
    }
}

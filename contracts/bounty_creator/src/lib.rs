//! # Bounty Creator
//!
//! Deploys `bounty` instances and records them in an append-only registry.
//!
//! `create_bounty` is exercised by `test_deploy`, which needs the `bounty`
//! release wasm and the `wasm-tests` feature (see the workspace README).

#![no_std]

use daonative_core::{events, registry};
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String, Vec};

#[cfg(all(test, feature = "wasm-tests"))]
mod test_deploy;

#[contract]
pub struct BountyCreator;

#[contractimpl]
impl BountyCreator {
    pub fn __constructor(env: Env, wasm_hash: BytesN<32>) {
        registry::init(&env, &wasm_hash);
    }

    pub fn create_bounty(env: Env, caller: Address, token: Address, data: String) -> Address {
        caller.require_auth();
        let bounty = registry::deploy(&env, (caller.clone(), token, data));
        events::emit_instance_created(&env, "bounty_created", bounty.clone(), caller);
        bounty
    }

    pub fn get_bounties(env: Env) -> Vec<Address> {
        registry::instances(&env)
    }

    pub fn get_bounty_count(env: Env) -> u32 {
        registry::count(&env)
    }

    pub fn get_bounty_wasm(env: Env) -> BytesN<32> {
        registry::child_wasm(&env)
    }
}

//! # Room Creator
//!
//! Deploys `room` instances from a fixed wasm hash and keeps every deployed
//! address in an append-only registry.
//!
//! Deployment tests (`test_deploy`) need the `room` release wasm and the
//! `wasm-tests` feature; see the workspace README. CI runs them.

#![no_std]

use daonative_core::{events, registry};
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String, Vec};

#[cfg(all(test, feature = "wasm-tests"))]
mod test_deploy;

#[contract]
pub struct RoomCreator;

#[contractimpl]
impl RoomCreator {
    pub fn __constructor(env: Env, wasm_hash: BytesN<32>) {
        registry::init(&env, &wasm_hash);
    }

    /// Deploy a room owned by `caller` and funded in `token`.
    pub fn create_room(env: Env, caller: Address, token: Address, data: String) -> Address {
        caller.require_auth();
        let room = registry::deploy(&env, (caller.clone(), token, data));
        events::emit_instance_created(&env, "room_created", room.clone(), caller);
        room
    }

    pub fn get_rooms(env: Env) -> Vec<Address> {
        registry::instances(&env)
    }

    pub fn get_room_count(env: Env) -> u32 {
        registry::count(&env)
    }

    pub fn get_room_wasm(env: Env) -> BytesN<32> {
        registry::child_wasm(&env)
    }
}

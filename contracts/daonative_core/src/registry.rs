//! Append-only registry of instances deployed by a creator contract.
//!
//! Entries are never removed or rewritten; the list grows without bound and
//! is returned whole by the creators' `get_*` views.

use soroban_sdk::{contracttype, Address, Bytes, BytesN, ConstructorArgs, Env, Vec};

use crate::storage::bump_instance;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RegistryKey {
    /// Hash of the uploaded child contract wasm (Instance).
    ChildWasm,
    /// Deployed instance addresses in creation order (Instance).
    Instances,
}

/// Record the wasm every future instance is deployed from.
pub fn init(env: &Env, wasm_hash: &BytesN<32>) {
    env.storage().instance().set(&RegistryKey::ChildWasm, wasm_hash);
    env.storage()
        .instance()
        .set(&RegistryKey::Instances, &Vec::<Address>::new(env));
    bump_instance(env);
}

pub fn child_wasm(env: &Env) -> BytesN<32> {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&RegistryKey::ChildWasm)
        .expect("child wasm not set")
}

pub fn instances(env: &Env) -> Vec<Address> {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&RegistryKey::Instances)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn count(env: &Env) -> u32 {
    instances(env).len()
}

pub fn append(env: &Env, instance: &Address) {
    let mut list = instances(env);
    list.push_back(instance.clone());
    env.storage().instance().set(&RegistryKey::Instances, &list);
}

/// Deterministic deploy salt for the next instance: sha256 of the registry length.
pub fn next_salt(env: &Env) -> BytesN<32> {
    let mut seed = Bytes::new(env);
    seed.extend_from_array(&count(env).to_be_bytes());
    env.crypto().sha256(&seed).to_bytes()
}

/// Deploy a new child instance with `constructor_args` and register it.
pub fn deploy<A: ConstructorArgs>(env: &Env, constructor_args: A) -> Address {
    let instance = env
        .deployer()
        .with_current_contract(next_salt(env))
        .deploy_v2(child_wasm(env), constructor_args);
    append(env, &instance);
    instance
}

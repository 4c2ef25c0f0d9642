//! # Storage
//!
//! | Key                        | Tier       | Type               |
//! |----------------------------|------------|--------------------|
//! | `Config`                   | Instance   | `CollectionConfig` |
//! | `Paused`                   | Instance   | `bool`             |
//! | `InviteUses(code, limit)`  | Persistent | `u32`              |
//! | `InviteExhausted(code)`    | Persistent | `bool`             |
//!
//! Token ownership lives under [`daonative_core::nft::NftKey`].

use daonative_core::storage::{bump_instance, bump_persistent};
use soroban_sdk::{contracttype, Env, String};

use crate::types::CollectionConfig;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Config,
    Paused,
    InviteUses(String, u32),
    InviteExhausted(String),
}

pub fn save_config(env: &Env, config: &CollectionConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    env.storage().instance().set(&DataKey::Paused, &false);
    bump_instance(env);
}

pub fn load_config(env: &Env) -> CollectionConfig {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .expect("collection not initialized")
}

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Paused)
        .unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
    bump_instance(env);
}

pub fn invite_uses(env: &Env, code: &String, limit: u32) -> u32 {
    let key = DataKey::InviteUses(code.clone(), limit);
    match env.storage().persistent().get(&key) {
        Some(uses) => {
            bump_persistent(env, &key);
            uses
        }
        None => 0,
    }
}

pub fn set_invite_uses(env: &Env, code: &String, limit: u32, uses: u32) {
    let key = DataKey::InviteUses(code.clone(), limit);
    env.storage().persistent().set(&key, &uses);
    bump_persistent(env, &key);
}

pub fn is_exhausted(env: &Env, code: &String) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::InviteExhausted(code.clone()))
        .unwrap_or(false)
}

/// A code, once used up under some limit, stays dead under every limit.
pub fn mark_exhausted(env: &Env, code: &String) {
    let key = DataKey::InviteExhausted(code.clone());
    env.storage().persistent().set(&key, &true);
    bump_persistent(env, &key);
}

//! Non-fungible token ownership shared by `collection` and `membership`.
//!
//! Ids are assigned sequentially from 0 and tokens are never burned, so the
//! next id doubles as the total supply.

use soroban_sdk::{contracttype, Address, Env};

use crate::errors::Error;
use crate::events;
use crate::storage::{bump_instance, bump_persistent};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum NftKey {
    /// Next id to mint (Instance).
    NextTokenId,
    /// Owner of a token (Persistent).
    TokenOwner(u32),
    /// Number of tokens held by an address (Persistent).
    TokenBalance(Address),
}

pub fn total_supply(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&NftKey::NextTokenId)
        .unwrap_or(0)
}

pub fn exists(env: &Env, token_id: u32) -> bool {
    token_id < total_supply(env)
}

pub fn owner_of(env: &Env, token_id: u32) -> Result<Address, Error> {
    let key = NftKey::TokenOwner(token_id);
    let owner = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::TokenNotFound)?;
    bump_persistent(env, &key);
    Ok(owner)
}

pub fn balance(env: &Env, owner: &Address) -> u32 {
    let key = NftKey::TokenBalance(owner.clone());
    match env.storage().persistent().get::<_, u32>(&key) {
        Some(count) => {
            bump_persistent(env, &key);
            count
        }
        None => 0,
    }
}

/// Mint the next sequential token to `to` and return its id.
pub fn mint(env: &Env, to: &Address) -> Result<u32, Error> {
    let token_id = total_supply(env);
    let next = token_id.checked_add(1).ok_or(Error::Overflow)?;

    env.storage().instance().set(&NftKey::NextTokenId, &next);
    bump_instance(env);

    let owner_key = NftKey::TokenOwner(token_id);
    env.storage().persistent().set(&owner_key, to);
    bump_persistent(env, &owner_key);
    set_balance(env, to, balance(env, to).checked_add(1).ok_or(Error::Overflow)?);

    events::emit_nft_transfer(env, None, to.clone(), token_id);
    Ok(token_id)
}

/// Move `token_id` from `from` to `to`. Authorization is the caller's job.
pub fn transfer(env: &Env, from: &Address, to: &Address, token_id: u32) -> Result<(), Error> {
    if owner_of(env, token_id)? != *from {
        return Err(Error::NotTokenOwner);
    }

    let owner_key = NftKey::TokenOwner(token_id);
    env.storage().persistent().set(&owner_key, to);
    bump_persistent(env, &owner_key);

    set_balance(env, from, balance(env, from) - 1);
    set_balance(env, to, balance(env, to).checked_add(1).ok_or(Error::Overflow)?);

    events::emit_nft_transfer(env, Some(from.clone()), to.clone(), token_id);
    Ok(())
}

fn set_balance(env: &Env, owner: &Address, count: u32) {
    let key = NftKey::TokenBalance(owner.clone());
    env.storage().persistent().set(&key, &count);
    bump_persistent(env, &key);
}

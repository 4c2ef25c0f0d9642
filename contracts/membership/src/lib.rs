//! # Room Membership
//!
//! An open NFT: anyone may mint a token to any address, each with its own
//! URI. Rooms use it to hand out proof of participation.

#![no_std]

use daonative_core::storage::bump_persistent;
use daonative_core::{nft, Error};
use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, String};


const NAME: &str = "Room Membership";
const SYMBOL: &str = "RMB";

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Per-token URI (Persistent).
    TokenUri(u32),
}

#[contract]
pub struct Membership;

#[contractimpl]
impl Membership {
    /// Mint the next token to `to` with its own `uri`.
    pub fn safe_mint(env: Env, to: Address, uri: String) -> Result<u32, Error> {
        let token_id = nft::mint(&env, &to)?;
        let key = DataKey::TokenUri(token_id);
        env.storage().persistent().set(&key, &uri);
        bump_persistent(&env, &key);
        Ok(token_id)
    }

    pub fn name(env: Env) -> String {
        String::from_str(&env, NAME)
    }

    pub fn symbol(env: Env) -> String {
        String::from_str(&env, SYMBOL)
    }

    pub fn token_uri(env: Env, token_id: u32) -> Result<String, Error> {
        let key = DataKey::TokenUri(token_id);
        let uri = env
            .storage()
            .persistent()
            .get(&key)
            .ok_or(Error::TokenNotFound)?;
        bump_persistent(&env, &key);
        Ok(uri)
    }

    pub fn owner_of(env: Env, token_id: u32) -> Result<Address, Error> {
        nft::owner_of(&env, token_id)
    }

    pub fn balance(env: Env, owner: Address) -> u32 {
        nft::balance(&env, &owner)
    }

    pub fn total_supply(env: Env) -> u32 {
        nft::total_supply(&env)
    }
}

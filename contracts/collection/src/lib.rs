//! # Collection Contract
//!
//! An NFT collection whose mints are gated by owner-signed invites.
//!
//! An invite is the pair `(invite_code, limit)`. The owner signs
//! [`Collection::invite_digest`] for that pair and hands the code, limit and
//! signature to prospective members. See [`minting`] for the order in which
//! a mint is checked.
//!
//! Ownership bookkeeping is shared with `membership` through
//! [`daonative_core::nft`].

#![no_std]

use daonative_core::{nft, Error};
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String};

mod events;
pub mod minting;
pub mod signature;
mod storage;
mod types;

#[cfg(test)]
mod test;
#[cfg(test)]
mod test_events;

pub use signature::{Ed25519Verifier, InviteVerifier};
pub use types::CollectionConfig;

#[contract]
pub struct Collection;

#[contractimpl]
impl Collection {
    #[allow(clippy::too_many_arguments)]
    pub fn __constructor(
        env: Env,
        owner: Address,
        name: String,
        symbol: String,
        uri: String,
        mint_end_timestamp: u64,
        max_supply: u32,
        one_token_per_address: bool,
        signer: BytesN<32>,
    ) {
        storage::save_config(
            &env,
            &CollectionConfig {
                owner,
                name,
                symbol,
                uri,
                signer,
                mint_end_timestamp,
                max_supply,
                one_token_per_address,
            },
        );
    }

    // ─────────────────────────────────────────────────────────
    // Minting and transfer
    // ─────────────────────────────────────────────────────────

    /// Mint the next token to `to` under an owner-signed invite.
    pub fn safe_mint(
        env: Env,
        to: Address,
        invite_code: String,
        limit: u32,
        signature: BytesN<64>,
    ) -> Result<u32, Error> {
        to.require_auth();
        minting::safe_mint(&env, &Ed25519Verifier, &to, &invite_code, limit, &signature)
    }

    pub fn transfer(env: Env, from: Address, to: Address, token_id: u32) -> Result<(), Error> {
        from.require_auth();
        if storage::is_paused(&env) {
            return Err(Error::ContractPaused);
        }
        if nft::owner_of(&env, token_id)? != from {
            return Err(Error::NotTokenOwner);
        }
        if storage::load_config(&env).one_token_per_address && nft::balance(&env, &to) >= 1 {
            return Err(Error::RecipientHasToken);
        }
        nft::transfer(&env, &from, &to, token_id)
    }

    // ─────────────────────────────────────────────────────────
    // Pause
    // ─────────────────────────────────────────────────────────

    pub fn pause(env: Env, caller: Address) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;
        if storage::is_paused(&env) {
            return Err(Error::ContractPaused);
        }
        storage::set_paused(&env, true);
        events::emit_paused(&env, caller);
        Ok(())
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;
        if !storage::is_paused(&env) {
            return Err(Error::NotPaused);
        }
        storage::set_paused(&env, false);
        events::emit_unpaused(&env, caller);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Signer
    // ─────────────────────────────────────────────────────────

    /// Owner only. Replace the invite signing key. Invites signed by the
    /// previous key stop verifying; uses already counted are kept.
    pub fn set_signer(env: Env, caller: Address, signer: BytesN<32>) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;
        let mut config = storage::load_config(&env);
        config.signer = signer;
        storage::save_config(&env, &config);
        Ok(())
    }

    pub fn get_signer(env: Env) -> BytesN<32> {
        storage::load_config(&env).signer
    }

    // ─────────────────────────────────────────────────────────
    // Views
    // ─────────────────────────────────────────────────────────

    pub fn name(env: Env) -> String {
        storage::load_config(&env).name
    }

    pub fn symbol(env: Env) -> String {
        storage::load_config(&env).symbol
    }

    /// Every token shares the collection's base URI.
    pub fn token_uri(env: Env, token_id: u32) -> Result<String, Error> {
        if !nft::exists(&env, token_id) {
            return Err(Error::TokenNotFound);
        }
        Ok(storage::load_config(&env).uri)
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

    pub fn get_mint_end_timestamp(env: Env) -> u64 {
        storage::load_config(&env).mint_end_timestamp
    }

    pub fn get_max_supply(env: Env) -> u32 {
        storage::load_config(&env).max_supply
    }

    pub fn is_one_token_per_address(env: Env) -> bool {
        storage::load_config(&env).one_token_per_address
    }

    pub fn is_paused(env: Env) -> bool {
        storage::is_paused(&env)
    }

    pub fn get_owner(env: Env) -> Address {
        storage::load_config(&env).owner
    }

    pub fn invite_uses(env: Env, invite_code: String, limit: u32) -> u32 {
        storage::invite_uses(&env, &invite_code, limit)
    }

    /// The 32 bytes the owner signs to issue `(invite_code, limit)`.
    pub fn invite_digest(env: Env, invite_code: String, limit: u32) -> BytesN<32> {
        signature::invite_digest(&env, &invite_code, limit)
    }

    fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
        caller.require_auth();
        if *caller != storage::load_config(env).owner {
            return Err(Error::NotOwner);
        }
        Ok(())
    }
}

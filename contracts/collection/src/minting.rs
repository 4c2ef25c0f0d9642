//! The gated mint path.
//!
//! Checks run in a fixed order and the first failure wins:
//!
//! 1. collection paused → `ContractPaused`
//! 2. past `mint_end_timestamp` → `MintWindowClosed`
//! 3. `max_supply` reached → `MaxSupplyExceeded`
//! 4. invite signature rejected → `InvalidSignature`
//! 5. recipient already holds a token → `RecipientHasToken`
//! 6. invite code used up → `InvalidInviteCode`
//!
//! A `limit` of 0 means the invite is unlimited, unless the code was already
//! exhausted under some other limit.

use daonative_core::{nft, Error};
use soroban_sdk::{Address, BytesN, Env, String};

use crate::signature::{invite_digest, InviteVerifier};
use crate::storage;

pub fn safe_mint<V: InviteVerifier>(
    env: &Env,
    verifier: &V,
    to: &Address,
    invite_code: &String,
    limit: u32,
    signature: &BytesN<64>,
) -> Result<u32, Error> {
    let config = storage::load_config(env);

    if storage::is_paused(env) {
        return Err(Error::ContractPaused);
    }
    if config.mint_end_timestamp != 0 && env.ledger().timestamp() > config.mint_end_timestamp {
        return Err(Error::MintWindowClosed);
    }
    if config.max_supply != 0 && nft::total_supply(env) >= config.max_supply {
        return Err(Error::MaxSupplyExceeded);
    }

    let digest = invite_digest(env, invite_code, limit);
    if !verifier.verify(env, &config.signer, &digest, signature) {
        return Err(Error::InvalidSignature);
    }

    if config.one_token_per_address && nft::balance(env, to) >= 1 {
        return Err(Error::RecipientHasToken);
    }

    let uses = storage::invite_uses(env, invite_code, limit);
    if storage::is_exhausted(env, invite_code) || (limit != 0 && uses >= limit) {
        return Err(Error::InvalidInviteCode);
    }

    let token_id = nft::mint(env, to)?;

    let uses = uses.checked_add(1).ok_or(Error::Overflow)?;
    storage::set_invite_uses(env, invite_code, limit, uses);
    if limit != 0 && uses >= limit {
        storage::mark_exhausted(env, invite_code);
    }

    Ok(token_id)
}

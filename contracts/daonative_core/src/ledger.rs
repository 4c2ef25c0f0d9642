//! # Funding Ledger
//!
//! Token custody for `room` and `bounty` instances.
//!
//! The instance holds a single token balance. Inside it, every address has a
//! withdrawable *credit*; the owner's credit is the pool that approvals and
//! votes draw from.
//!
//! ## Invariant
//!
//! `total_credited` equals the sum of all live credits and never exceeds the
//! token balance held by the instance. Deposits raise both sides by the same
//! amount, withdrawals lower both, [`move_credit`] only shifts credit between
//! addresses, and [`drain_to`] retires every credit at once before emptying
//! the balance.
//!
//! Credits are keyed by a *credit epoch*. Draining bumps the epoch, so every
//! credit recorded under the old one reads as zero without being touched.
//!
//! ## Ordering
//!
//! All credit mutations are written before the outgoing token transfer, so a
//! re-entrant call observes the already-debited state.
//!
//! ## Storage
//!
//! | Key                      | Tier       | Type      |
//! |--------------------------|------------|-----------|
//! | `FundingToken`           | Instance   | `Address` |
//! | `TotalCredited`          | Instance   | `i128`    |
//! | `CreditEpoch`            | Instance   | `u32`     |
//! | `Credit(epoch, address)` | Persistent | `i128`    |

use soroban_sdk::{contracttype, token, Address, Env};

use crate::errors::Error;
use crate::events;
use crate::storage::{bump_instance, bump_persistent};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LedgerKey {
    FundingToken,
    TotalCredited,
    CreditEpoch,
    Credit(u32, Address),
}

/// Record the funding token. Called once from the owning contract's constructor.
pub fn init(env: &Env, token: &Address) {
    env.storage().instance().set(&LedgerKey::FundingToken, token);
    env.storage().instance().set(&LedgerKey::TotalCredited, &0i128);
    bump_instance(env);
}

pub fn funding_token(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&LedgerKey::FundingToken)
        .expect("funding token not set")
}

/// Withdrawable credit of `address` (0 when it holds none in the current epoch).
pub fn credit_of(env: &Env, address: &Address) -> i128 {
    let key = credit_key(env, address);
    match env.storage().persistent().get::<_, i128>(&key) {
        Some(credit) => {
            bump_persistent(env, &key);
            credit
        }
        None => 0,
    }
}

pub fn total_credited(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&LedgerKey::TotalCredited)
        .unwrap_or(0)
}

/// Token balance actually held by the calling contract.
pub fn held_balance(env: &Env) -> i128 {
    token::Client::new(env, &funding_token(env)).balance(&env.current_contract_address())
}

/// Incremented by every [`drain_to`]; starts at 0.
pub fn credit_epoch(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&LedgerKey::CreditEpoch)
        .unwrap_or(0)
}

/// Pull `amount` tokens from `from` and credit them to `from`.
///
/// The caller must have authorized `from` already. A zero amount is a no-op.
pub fn deposit(env: &Env, from: &Address, amount: i128) -> Result<(), Error> {
    if amount < 0 {
        return Err(Error::InvalidAmount);
    }
    if amount == 0 {
        return Ok(());
    }

    let contract = env.current_contract_address();
    add_credit(env, from, amount)?;
    set_total_credited(env, total_credited(env).checked_add(amount).ok_or(Error::Overflow)?);

    token::Client::new(env, &funding_token(env)).transfer(from, &contract, &amount);
    events::emit_transfer(env, from.clone(), contract, amount);
    Ok(())
}

/// Pay `amount` out of `to`'s own credit.
pub fn withdraw(env: &Env, to: &Address, amount: i128) -> Result<(), Error> {
    if amount < 0 {
        return Err(Error::InvalidAmount);
    }

    sub_credit(env, to, amount)?;
    set_total_credited(env, total_credited(env) - amount);

    let contract = env.current_contract_address();
    token::Client::new(env, &funding_token(env)).transfer(&contract, to, &amount);
    events::emit_transfer(env, contract, to.clone(), amount);
    Ok(())
}

/// Shift `amount` of credit from `from` to `to` without moving tokens.
pub fn move_credit(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    if amount < 0 {
        return Err(Error::InvalidAmount);
    }
    if amount == 0 {
        return Ok(());
    }
    sub_credit(env, from, amount)?;
    add_credit(env, to, amount)
}

/// Retire every credit and send the whole held balance to `to`.
///
/// Constant cost regardless of how many addresses hold credit. Returns the
/// amount transferred.
pub fn drain_to(env: &Env, to: &Address) -> Result<i128, Error> {
    let next_epoch = credit_epoch(env).checked_add(1).ok_or(Error::Overflow)?;
    env.storage()
        .instance()
        .set(&LedgerKey::CreditEpoch, &next_epoch);
    set_total_credited(env, 0);

    let contract = env.current_contract_address();
    let token_client = token::Client::new(env, &funding_token(env));
    let amount = token_client.balance(&contract);
    token_client.transfer(&contract, to, &amount);
    events::emit_transfer(env, contract, to.clone(), amount);
    Ok(amount)
}

fn credit_key(env: &Env, address: &Address) -> LedgerKey {
    LedgerKey::Credit(credit_epoch(env), address.clone())
}

fn add_credit(env: &Env, address: &Address, amount: i128) -> Result<(), Error> {
    let key = credit_key(env, address);
    let updated = credit_of(env, address)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    env.storage().persistent().set(&key, &updated);
    bump_persistent(env, &key);
    Ok(())
}

fn sub_credit(env: &Env, address: &Address, amount: i128) -> Result<(), Error> {
    let current = credit_of(env, address);
    if current < amount {
        return Err(Error::InsufficientBalance);
    }
    let key = credit_key(env, address);
    env.storage().persistent().set(&key, &(current - amount));
    bump_persistent(env, &key);
    Ok(())
}

fn set_total_credited(env: &Env, total: i128) {
    env.storage().instance().set(&LedgerKey::TotalCredited, &total);
    bump_instance(env);
}

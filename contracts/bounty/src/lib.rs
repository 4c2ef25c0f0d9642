//! # Bounty Contract
//!
//! A sponsor-owned pot of funds rewarded directly to answers.
//!
//! Unlike `room`, answers carry no lifecycle: the owner calls
//! [`Bounty::vote`] to move credit from the pool to the answer's submitter,
//! as often and as much as the pool allows. Votes on the same answer add up.
//!
//! Token custody is delegated to [`daonative_core::ledger`].

#![no_std]

use daonative_core::{ledger, Error};
use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

mod events;
mod storage;
mod types;

#[cfg(test)]
mod test_events;

pub use events::{SubmitAnswer, Vote};
pub use types::{Answer, BountyConfig};

#[contract]
pub struct Bounty;

#[contractimpl]
impl Bounty {
    pub fn __constructor(env: Env, owner: Address, token: Address, data: String) {
        storage::save_config(&env, &BountyConfig { owner, uri: data });
        ledger::init(&env, &token);
    }

    pub fn get_uri(env: Env) -> String {
        storage::load_config(&env).uri
    }

    pub fn get_owner(env: Env) -> Address {
        storage::load_config(&env).owner
    }

    pub fn get_token(env: Env) -> Address {
        ledger::funding_token(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Funding
    // ─────────────────────────────────────────────────────────

    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();
        ledger::deposit(&env, &from, amount)
    }

    pub fn withdraw(env: Env, caller: Address, amount: i128) -> Result<(), Error> {
        caller.require_auth();
        ledger::withdraw(&env, &caller, amount)
    }

    /// Owner only: drain the bounty and clear all credits.
    pub fn emergency_withdrawal(env: Env, caller: Address) -> Result<i128, Error> {
        Self::require_owner(&env, &caller)?;
        ledger::drain_to(&env, &caller)
    }

    pub fn get_deposit(env: Env, address: Address) -> i128 {
        ledger::credit_of(&env, &address)
    }

    pub fn get_balance(env: Env) -> i128 {
        ledger::held_balance(&env)
    }

    pub fn get_total_credited(env: Env) -> i128 {
        ledger::total_credited(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Answers
    // ─────────────────────────────────────────────────────────

    pub fn submit_answer(env: Env, submitter: Address, uri: String) {
        submitter.require_auth();
        let id = storage::get_and_increment_answer_id(&env);
        storage::save_answer(
            &env,
            &types::AnswerConfig {
                id,
                submitter: submitter.clone(),
                uri: uri.clone(),
            },
        );
        events::emit_submit_answer(&env, id, submitter, uri);
    }

    pub fn get_answer(env: Env, id: u64) -> Result<Answer, Error> {
        storage::load_answer(&env, id)
    }

    pub fn get_answers(env: Env) -> Vec<u64> {
        let mut ids = Vec::new(&env);
        for id in 0..storage::answer_count(&env) {
            ids.push_back(id);
        }
        ids
    }

    pub fn get_my_answers(env: Env, caller: Address) -> Vec<u64> {
        storage::answered_by(&env, &caller)
    }

    pub fn get_answer_count(env: Env) -> u64 {
        storage::answer_count(&env)
    }

    /// Owner only. Credit `amount` from the pool to the answer's submitter.
    pub fn vote(env: Env, caller: Address, answer_id: u64, amount: i128) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;
        let answer = storage::load_answer_config(&env, answer_id)?;

        ledger::move_credit(&env, &caller, &answer.submitter, amount)?;
        let total = storage::load_votes(&env, answer_id)
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        storage::save_votes(&env, answer_id, total);

        events::emit_vote(&env, answer_id, amount);
        Ok(())
    }

    fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
        caller.require_auth();
        if *caller != storage::load_config(env).owner {
            return Err(Error::NotOwner);
        }
        Ok(())
    }
}

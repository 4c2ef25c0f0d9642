//! # Room Contract
//!
//! A sponsor-owned pot of funds that contributors claim through proposals.
//!
//! | Phase      | Entry Point(s)                                             |
//! |------------|------------------------------------------------------------|
//! | Bootstrap  | `__constructor`                                            |
//! | Funding    | [`Room::deposit`], [`Room::withdraw`], [`Room::emergency_withdrawal`] |
//! | Submission | [`Room::submit_proposal`]                                  |
//! | Decision   | [`Room::approve_proposal`], [`Room::close_proposal`], [`Room::reject_proposal`] |
//! | Queries    | `get_proposal`, `get_proposals`, `get_my_proposals`, `get_deposit`, … |
//!
//! ## Architecture
//!
//! Token custody and per-address credits are delegated to
//! [`daonative_core::ledger`]. Proposal storage lives in [`storage`]. The
//! owner's credit is the pool that approvals draw from: approving a proposal
//! moves `amount_requested` from the owner to the submitter, who then
//! withdraws it at will.

#![no_std]

use daonative_core::{ledger, Error};
use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

mod events;
mod storage;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;

pub use events::{Approve, SubmitProposal};
pub use types::{Proposal, ProposalState, RoomConfig};

#[contract]
pub struct Room;

#[contractimpl]
impl Room {
    /// Create a room owned by `owner`, funded in `token`, described by `data`.
    pub fn __constructor(env: Env, owner: Address, token: Address, data: String) {
        storage::save_config(&env, &RoomConfig { owner, uri: data });
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

    /// Deposit `amount` tokens from `from`; the amount becomes `from`'s credit.
    /// For the owner this tops up the pool that approvals pay from.
    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();
        ledger::deposit(&env, &from, amount)
    }

    /// Withdraw up to `caller`'s credit.
    pub fn withdraw(env: Env, caller: Address, amount: i128) -> Result<(), Error> {
        caller.require_auth();
        ledger::withdraw(&env, &caller, amount)
    }

    /// Owner only: send the entire held balance to the owner and clear all
    /// credits. Returns the amount sent.
    pub fn emergency_withdrawal(env: Env, caller: Address) -> Result<i128, Error> {
        Self::require_owner(&env, &caller)?;
        ledger::drain_to(&env, &caller)
    }

    /// Withdrawable credit of `address`.
    pub fn get_deposit(env: Env, address: Address) -> i128 {
        ledger::credit_of(&env, &address)
    }

    /// Tokens actually held by the room.
    pub fn get_balance(env: Env) -> i128 {
        ledger::held_balance(&env)
    }

    pub fn get_total_credited(env: Env) -> i128 {
        ledger::total_credited(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Proposals
    // ─────────────────────────────────────────────────────────

    /// Submit a proposal asking for `amount_requested`. Open to anyone.
    pub fn submit_proposal(
        env: Env,
        submitter: Address,
        uri: String,
        amount_requested: i128,
    ) -> Result<(), Error> {
        submitter.require_auth();
        if amount_requested < 0 {
            return Err(Error::InvalidAmount);
        }

        let id = storage::get_and_increment_proposal_id(&env);
        let proposal = Proposal {
            id,
            submitter: submitter.clone(),
            uri: uri.clone(),
            amount_requested,
            state: ProposalState::Pending,
        };
        storage::save_proposal(&env, &proposal);

        events::emit_submit_proposal(&env, id, submitter, uri, amount_requested);
        Ok(())
    }

    pub fn get_proposal(env: Env, id: u64) -> Result<Proposal, Error> {
        storage::load_proposal(&env, id)
    }

    /// Ids of every proposal, in submission order.
    pub fn get_proposals(env: Env) -> Vec<u64> {
        let mut ids = Vec::new(&env);
        for id in 0..storage::proposal_count(&env) {
            ids.push_back(id);
        }
        ids
    }

    /// Ids of the proposals submitted by `caller`.
    pub fn get_my_proposals(env: Env, caller: Address) -> Vec<u64> {
        storage::submitted_by(&env, &caller)
    }

    pub fn get_proposal_count(env: Env) -> u64 {
        storage::proposal_count(&env)
    }

    /// Owner only. Pending → Approved; credits the submitter with
    /// `amount_requested` out of the owner's pool.
    pub fn approve_proposal(env: Env, caller: Address, id: u64) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;
        let config = storage::load_proposal_config(&env, id)?;
        Self::transition(&env, id, ProposalState::Approved)?;

        ledger::move_credit(&env, &caller, &config.submitter, config.amount_requested)?;

        events::emit_approve(&env, id, config.amount_requested);
        Ok(())
    }

    /// Owner only. Approved → Closed. No funds move.
    pub fn close_proposal(env: Env, caller: Address, id: u64) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;
        Self::transition(&env, id, ProposalState::Closed)
    }

    /// Owner only. Pending → Rejected. No funds move.
    pub fn reject_proposal(env: Env, caller: Address, id: u64) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;
        Self::transition(&env, id, ProposalState::Rejected)
    }

    // ─────────────────────────────────────────────────────────
    // Internal Helpers
    // ─────────────────────────────────────────────────────────

    fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
        caller.require_auth();
        if *caller != storage::load_config(env).owner {
            return Err(Error::NotOwner);
        }
        Ok(())
    }

    fn transition(env: &Env, id: u64, next: ProposalState) -> Result<(), Error> {
        let current = storage::load_proposal_state(env, id)?;
        if !current.can_transition_to(next) {
            return Err(Error::InvalidState);
        }
        storage::save_proposal_state(env, id, next);
        Ok(())
    }
}

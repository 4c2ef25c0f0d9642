//! # Storage
//!
//! ## Instance storage
//!
//! | Key             | Type         | Description                       |
//! |-----------------|--------------|-----------------------------------|
//! | `Config`        | `RoomConfig` | Owner and descriptive uri         |
//! | `ProposalCount` | `u64`        | Auto-increment proposal counter   |
//!
//! ## Persistent storage
//!
//! | Key                    | Type             | Description                 |
//! |------------------------|------------------|-----------------------------|
//! | `PropConfig(id)`       | `ProposalConfig` | Immutable proposal fields   |
//! | `PropState(id)`        | `ProposalState`  | Current lifecycle state     |
//! | `Submitted(address)`   | `Vec<u64>`       | Ids authored by an address  |
//!
//! Funding-ledger entries live under `daonative_core::ledger::LedgerKey`.

use daonative_core::storage::{bump_instance, bump_persistent};
use daonative_core::Error;
use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::types::{Proposal, ProposalConfig, ProposalState, RoomConfig};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Config,
    ProposalCount,
    PropConfig(u64),
    PropState(u64),
    Submitted(Address),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

pub fn save_config(env: &Env, config: &RoomConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

pub fn load_config(env: &Env) -> RoomConfig {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .expect("room not initialized")
}

pub fn proposal_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0)
}

/// Reads, increments, and stores the proposal counter.
/// Returns the ID to use for the *current* proposal (pre-increment value).
pub fn get_and_increment_proposal_id(env: &Env) -> u64 {
    bump_instance(env);
    let current = proposal_count(env);
    env.storage()
        .instance()
        .set(&DataKey::ProposalCount, &(current + 1));
    current
}

// ── Persistent Storage Helpers ───────────────────────────────────────

/// Save the immutable config and the initial state of a new proposal, and
/// index it under its submitter.
pub fn save_proposal(env: &Env, proposal: &Proposal) {
    let config_key = DataKey::PropConfig(proposal.id);
    let state_key = DataKey::PropState(proposal.id);

    let config = ProposalConfig {
        id: proposal.id,
        submitter: proposal.submitter.clone(),
        uri: proposal.uri.clone(),
        amount_requested: proposal.amount_requested,
    };

    env.storage().persistent().set(&config_key, &config);
    env.storage().persistent().set(&state_key, &proposal.state);
    bump_persistent(env, &config_key);
    bump_persistent(env, &state_key);

    let index_key = DataKey::Submitted(proposal.submitter.clone());
    let mut ids = submitted_by(env, &proposal.submitter);
    ids.push_back(proposal.id);
    env.storage().persistent().set(&index_key, &ids);
    bump_persistent(env, &index_key);
}

pub fn load_proposal(env: &Env, id: u64) -> Result<Proposal, Error> {
    let config = load_proposal_config(env, id)?;
    let state = load_proposal_state(env, id)?;
    Ok(Proposal {
        id: config.id,
        submitter: config.submitter,
        uri: config.uri,
        amount_requested: config.amount_requested,
        state,
    })
}

pub fn load_proposal_config(env: &Env, id: u64) -> Result<ProposalConfig, Error> {
    let key = DataKey::PropConfig(id);
    let config = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::ProposalNotFound)?;
    bump_persistent(env, &key);
    Ok(config)
}

pub fn load_proposal_state(env: &Env, id: u64) -> Result<ProposalState, Error> {
    let key = DataKey::PropState(id);
    let state = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::ProposalNotFound)?;
    bump_persistent(env, &key);
    Ok(state)
}

/// Save only the lifecycle state (the config entry is never rewritten).
pub fn save_proposal_state(env: &Env, id: u64, state: ProposalState) {
    let key = DataKey::PropState(id);
    env.storage().persistent().set(&key, &state);
    bump_persistent(env, &key);
}

pub fn submitted_by(env: &Env, submitter: &Address) -> Vec<u64> {
    let key = DataKey::Submitted(submitter.clone());
    match env.storage().persistent().get(&key) {
        Some(ids) => {
            bump_persistent(env, &key);
            ids
        }
        None => Vec::new(env),
    }
}

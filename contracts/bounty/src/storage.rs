//! # Storage
//!
//! | Key                  | Tier       | Type           |
//! |----------------------|------------|----------------|
//! | `Config`             | Instance   | `BountyConfig` |
//! | `AnswerCount`        | Instance   | `u64`          |
//! | `AnsConfig(id)`      | Persistent | `AnswerConfig` |
//! | `AnsVotes(id)`       | Persistent | `i128`         |
//! | `Answered(address)`  | Persistent | `Vec<u64>`     |

use daonative_core::storage::{bump_instance, bump_persistent};
use daonative_core::Error;
use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::types::{Answer, AnswerConfig, BountyConfig};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Config,
    AnswerCount,
    AnsConfig(u64),
    AnsVotes(u64),
    Answered(Address),
}

pub fn save_config(env: &Env, config: &BountyConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

pub fn load_config(env: &Env) -> BountyConfig {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .expect("bounty not initialized")
}

pub fn answer_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::AnswerCount)
        .unwrap_or(0)
}

pub fn get_and_increment_answer_id(env: &Env) -> u64 {
    bump_instance(env);
    let current = answer_count(env);
    env.storage()
        .instance()
        .set(&DataKey::AnswerCount, &(current + 1));
    current
}

/// Store a fresh answer with a zero tally and index it under its submitter.
pub fn save_answer(env: &Env, config: &AnswerConfig) {
    let config_key = DataKey::AnsConfig(config.id);
    let votes_key = DataKey::AnsVotes(config.id);
    env.storage().persistent().set(&config_key, config);
    env.storage().persistent().set(&votes_key, &0i128);
    bump_persistent(env, &config_key);
    bump_persistent(env, &votes_key);

    let index_key = DataKey::Answered(config.submitter.clone());
    let mut ids = answered_by(env, &config.submitter);
    ids.push_back(config.id);
    env.storage().persistent().set(&index_key, &ids);
    bump_persistent(env, &index_key);
}

pub fn load_answer_config(env: &Env, id: u64) -> Result<AnswerConfig, Error> {
    let key = DataKey::AnsConfig(id);
    let config = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::AnswerNotFound)?;
    bump_persistent(env, &key);
    Ok(config)
}

pub fn load_votes(env: &Env, id: u64) -> i128 {
    let key = DataKey::AnsVotes(id);
    match env.storage().persistent().get(&key) {
        Some(votes) => {
            bump_persistent(env, &key);
            votes
        }
        None => 0,
    }
}

pub fn save_votes(env: &Env, id: u64, votes: i128) {
    let key = DataKey::AnsVotes(id);
    env.storage().persistent().set(&key, &votes);
    bump_persistent(env, &key);
}

pub fn load_answer(env: &Env, id: u64) -> Result<Answer, Error> {
    let config = load_answer_config(env, id)?;
    Ok(Answer {
        id: config.id,
        submitter: config.submitter,
        uri: config.uri,
        total_votes: load_votes(env, id),
    })
}

pub fn answered_by(env: &Env, submitter: &Address) -> Vec<u64> {
    let key = DataKey::Answered(submitter.clone());
    match env.storage().persistent().get(&key) {
        Some(ids) => {
            bump_persistent(env, &key);
            ids
        }
        None => Vec::new(env),
    }
}

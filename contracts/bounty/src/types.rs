//! # Types
//!
//! An [`Answer`] has no lifecycle. Its immutable [`AnswerConfig`] is written
//! once at submission; the vote tally is a separate `i128` entry that grows
//! with every owner vote.

use soroban_sdk::{contracttype, Address, String};

/// Immutable bounty configuration, written once by the constructor.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BountyConfig {
    pub owner: Address,
    pub uri: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AnswerConfig {
    pub id: u64,
    pub submitter: Address,
    pub uri: String,
}

/// Full answer as returned by `get_answer`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Answer {
    pub id: u64,
    pub submitter: Address,
    pub uri: String,
    /// Sum of every amount the owner voted to this answer.
    pub total_votes: i128,
}

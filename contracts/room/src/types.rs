//! # Types
//!
//! ## Config / State split
//!
//! A [`Proposal`] is stored as two ledger entries:
//!
//! - [`ProposalConfig`]: written once at submission; never mutated.
//! - [`ProposalState`]: rewritten on every lifecycle transition.
//!
//! The public API returns the reconstructed [`Proposal`].
//!
//! ## Lifecycle
//!
//! ```text
//! Pending ──► Approved ──► Closed
//!     └─────► Rejected
//! ```
//!
//! `Closed` and `Rejected` are terminal. `Approved` never returns to `Pending`.

use soroban_sdk::{contracttype, Address, String};

/// Lifecycle state of a proposal, encoded on the wire as `0..=3`.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ProposalState {
    /// Submitted, awaiting the owner's decision.
    Pending = 0,
    /// Funds credited to the submitter; work in progress.
    Approved = 1,
    /// Delivered and closed by the owner.
    Closed = 2,
    /// Turned down by the owner.
    Rejected = 3,
}

impl ProposalState {
    /// Whether the lifecycle allows moving from `self` to `next`.
    pub fn can_transition_to(self, next: ProposalState) -> bool {
        matches!(
            (self, next),
            (ProposalState::Pending, ProposalState::Approved)
                | (ProposalState::Approved, ProposalState::Closed)
                | (ProposalState::Pending, ProposalState::Rejected)
        )
    }
}

/// Immutable room configuration, written once by the constructor.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoomConfig {
    pub owner: Address,
    /// Opaque description supplied at creation.
    pub uri: String,
}

/// Immutable part of a proposal.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalConfig {
    pub id: u64,
    pub submitter: Address,
    pub uri: String,
    pub amount_requested: i128,
}

/// Full proposal as returned by `get_proposal`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    /// Sequential identifier starting at 0.
    pub id: u64,
    /// Address that submitted the proposal and receives the credit on approval.
    pub submitter: Address,
    /// Link to the proposal body.
    pub uri: String,
    pub amount_requested: i128,
    pub state: ProposalState,
}

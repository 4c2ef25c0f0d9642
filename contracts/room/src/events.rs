//! Room events. Ledger `transfer` events come from `daonative_core::events`.

use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SubmitProposal {
    pub proposal_id: u64,
    pub submitter: Address,
    pub uri: String,
    pub amount_requested: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Approve {
    pub amount: i128,
    pub proposal_id: u64,
}

pub fn emit_submit_proposal(
    env: &Env,
    proposal_id: u64,
    submitter: Address,
    uri: String,
    amount_requested: i128,
) {
    env.events().publish(
        (symbol_short!("submit"), proposal_id),
        SubmitProposal {
            proposal_id,
            submitter,
            uri,
            amount_requested,
        },
    );
}

pub fn emit_approve(env: &Env, proposal_id: u64, amount: i128) {
    env.events().publish(
        (symbol_short!("approve"), proposal_id),
        Approve {
            amount,
            proposal_id,
        },
    );
}

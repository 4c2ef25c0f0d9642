//! Events published by the shared modules.
//!
//! | Topic                        | Data                |
//! |------------------------------|---------------------|
//! | `("transfer",)`              | [`TransferEvent`]   |
//! | `("nft_xfer", token_id)`     | [`NftTransfer`]     |
//! | `("<kind>_created",)`        | [`InstanceCreated`] |

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

/// Token movement into or out of a funding ledger.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransferEvent {
    pub from: Address,
    pub to: Address,
    pub amount: i128,
}

/// NFT ownership change. `from` is `None` for a mint.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NftTransfer {
    pub from: Option<Address>,
    pub to: Address,
    pub token_id: u32,
}

/// A factory deployed a new instance on behalf of `owner`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InstanceCreated {
    pub instance: Address,
    pub owner: Address,
}

pub fn emit_transfer(env: &Env, from: Address, to: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("transfer"),),
        TransferEvent { from, to, amount },
    );
}

pub fn emit_nft_transfer(env: &Env, from: Option<Address>, to: Address, token_id: u32) {
    env.events().publish(
        (symbol_short!("nft_xfer"), token_id),
        NftTransfer { from, to, token_id },
    );
}

/// `topic` is the full event name, e.g. `"room_created"`.
pub fn emit_instance_created(env: &Env, topic: &str, instance: Address, owner: Address) {
    env.events().publish(
        (Symbol::new(env, topic),),
        InstanceCreated { instance, owner },
    );
}

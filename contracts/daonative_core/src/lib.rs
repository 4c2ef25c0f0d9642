//! # DAOnative Core
//!
//! Building blocks shared by every DAOnative Soroban contract:
//!
//! | Module       | Used by                         | Responsibility                                  |
//! |--------------|---------------------------------|-------------------------------------------------|
//! | [`errors`]   | all                             | The single [`Error`] taxonomy                   |
//! | [`ledger`]   | `room`, `bounty`                | Token custody and per-address withdrawable credit |
//! | [`nft`]      | `collection`, `membership`      | Token ownership, balances, sequential ids       |
//! | [`registry`] | `*_creator`                     | Append-only list of deployed instances          |
//! | [`events`]   | all                             | Event payloads published by the shared modules  |
//! | [`storage`]  | all                             | TTL bump helpers                                |
//!
//! Every helper here reads and writes the storage of the *calling* contract.
//! Each module keys its entries with its own `#[contracttype]` enum so that
//! they never collide with the contract's own `DataKey`.

#![no_std]

pub mod errors;
pub mod events;
pub mod ledger;
pub mod nft;
pub mod registry;
pub mod storage;


pub use errors::Error;

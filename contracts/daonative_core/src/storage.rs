//! # Storage TTL
//!
//! DAOnative contracts use Soroban's two long-lived storage tiers:
//!
//! - **Instance** storage holds per-contract configuration and counters. It
//!   is bumped by **7 days** whenever it falls below 1 day remaining.
//! - **Persistent** storage holds per-entity records (submissions, credits,
//!   token owners). Each entry is bumped by **30 days** whenever it falls
//!   below 7 days remaining, on every read and write.

use soroban_sdk::{Env, IntoVal, Val};

/// Approximate ledgers per day (~5 seconds per ledger).
pub const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

/// Extend instance storage TTL if it falls below the threshold.
pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Extend the TTL for a persistent storage key.
///
/// The key must already exist.
pub fn bump_persistent<K: IntoVal<Env, Val>>(env: &Env, key: &K) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

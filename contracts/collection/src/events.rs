use soroban_sdk::{symbol_short, Address, Env};

pub fn emit_paused(env: &Env, caller: Address) {
    env.events().publish((symbol_short!("paused"),), caller);
}

pub fn emit_unpaused(env: &Env, caller: Address) {
    env.events().publish((symbol_short!("unpaused"),), caller);
}

use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::types::{GlobalRewardState, LedgerConfig, RewardAccount, StakeRecord};

// ── Storage key constants ───────────────────────────────────────────────────

const CONFIG: Symbol = symbol_short!("CONFIG");
const STATE: Symbol = symbol_short!("STATE");

// Per-user persistent storage uses tuple keys:  (prefix, user_address)
const USER_STAKE: Symbol = symbol_short!("STK");
const USER_REWARD: Symbol = symbol_short!("RWD_ACCT");

const TTL_THRESHOLD: u32 = 17_280; // ~1 day
const TTL_EXTEND_TO: u32 = 518_400; // ~30 days

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

// ── Ledger-wide entries (instance storage) ──────────────────────────────────

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&CONFIG)
}

pub fn get_config(env: &Env) -> Option<LedgerConfig> {
    env.storage().instance().get(&CONFIG)
}

pub fn set_config(env: &Env, config: &LedgerConfig) {
    env.storage().instance().set(&CONFIG, config);
    bump_instance(env);
}

/// Global totals; all-zero before the first deposit.
pub fn get_state(env: &Env) -> GlobalRewardState {
    env.storage().instance().get(&STATE).unwrap_or_default()
}

pub fn set_state(env: &Env, state: &GlobalRewardState) {
    env.storage().instance().set(&STATE, state);
    bump_instance(env);
}

// ── Per-account entries (persistent storage) ────────────────────────────────

/// Stake record for `user`; accounts never seen before read as empty.
pub fn get_stake(env: &Env, user: &Address) -> StakeRecord {
    env.storage()
        .persistent()
        .get(&(USER_STAKE, user.clone()))
        .unwrap_or_default()
}

pub fn set_stake(env: &Env, user: &Address, record: &StakeRecord) {
    let key = (USER_STAKE, user.clone());
    env.storage().persistent().set(&key, record);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn get_reward_account(env: &Env, user: &Address) -> RewardAccount {
    env.storage()
        .persistent()
        .get(&(USER_REWARD, user.clone()))
        .unwrap_or_default()
}

pub fn set_reward_account(env: &Env, user: &Address, account: &RewardAccount) {
    let key = (USER_REWARD, user.clone());
    env.storage().persistent().set(&key, account);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

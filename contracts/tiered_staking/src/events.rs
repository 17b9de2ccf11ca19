#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

use crate::types::UnlockTier;

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the ledger is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub stake_token: Address,
    pub reward_token: Address,
    pub timestamp: u64,
}

/// Fired when a user locks tokens.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EnteredEvent {
    pub staker: Address,
    pub amount: i128,
    pub principal_locked: i128,
    pub stake_start_time: u64,
    pub total_locked: i128,
    pub timestamp: u64,
}

/// Fired when a user withdraws unlocked principal.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LeftEvent {
    pub staker: Address,
    pub released: i128,
    pub principal_locked: i128,
    pub tier: UnlockTier,
    pub total_locked: i128,
    pub timestamp: u64,
}

/// Fired when someone funds the reward pool.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardInjectedEvent {
    pub funder: Address,
    pub amount: i128,
    pub acc_reward_per_share: i128,
    pub total_locked: i128,
    pub timestamp: u64,
}

/// Fired when a user claims accumulated rewards.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardClaimedEvent {
    pub staker: Address,
    pub amount: i128,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(
    env: &Env,
    admin: Address,
    stake_token: Address,
    reward_token: Address,
) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            admin,
            stake_token,
            reward_token,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_entered(
    env: &Env,
    staker: Address,
    amount: i128,
    principal_locked: i128,
    stake_start_time: u64,
    total_locked: i128,
) {
    env.events().publish(
        (symbol_short!("ENTERED"), staker.clone()),
        EnteredEvent {
            staker,
            amount,
            principal_locked,
            stake_start_time,
            total_locked,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_left(
    env: &Env,
    staker: Address,
    released: i128,
    principal_locked: i128,
    tier: UnlockTier,
    total_locked: i128,
) {
    env.events().publish(
        (symbol_short!("LEFT"), staker.clone()),
        LeftEvent {
            staker,
            released,
            principal_locked,
            tier,
            total_locked,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reward_injected(
    env: &Env,
    funder: Address,
    amount: i128,
    acc_reward_per_share: i128,
    total_locked: i128,
) {
    env.events().publish(
        (symbol_short!("RWD_INJ"), funder.clone()),
        RewardInjectedEvent {
            funder,
            amount,
            acc_reward_per_share,
            total_locked,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reward_claimed(env: &Env, staker: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("CLAIMED"), staker.clone()),
        RewardClaimedEvent {
            staker,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

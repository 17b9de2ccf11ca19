use soroban_sdk::{contracttype, Address};

/// Deployment-time configuration written once by `initialize`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerConfig {
    /// Address that bootstrapped the ledger.
    pub admin: Address,
    /// SAC address of the custodied asset users lock.
    pub stake_token: Address,
    /// SAC address of the asset paid out from the reward pool.
    pub reward_token: Address,
}

/// Per-account lock position.
///
/// `principal_locked + released_so_far` is the amount locked at
/// `stake_start_time`; the schedule releases fractions of that total.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StakeRecord {
    /// Amount still subject to the unlock schedule.
    pub principal_locked: i128,
    /// Ledger timestamp of the deposit that opened the current lock.
    pub stake_start_time: u64,
    /// Amount already withdrawn since `stake_start_time`.
    pub released_so_far: i128,
}

impl StakeRecord {
    /// The amount that was locked when the current schedule started.
    pub fn original_locked(&self) -> i128 {
        self.principal_locked.saturating_add(self.released_so_far)
    }

    pub fn is_empty(&self) -> bool {
        self.principal_locked == 0
    }
}

/// Per-account reward bookkeeping.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RewardAccount {
    /// Accumulator value already accounted for at the last checkpoint.
    pub reward_debt: i128,
    /// Reward realized by settlement but not yet claimed.
    pub pending: i128,
}

/// Ledger-wide totals shared by every account.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GlobalRewardState {
    /// Sum of every account's `principal_locked`.
    pub total_locked: i128,
    /// Reward per locked unit, scaled by `fixed_point::PRECISION`.
    pub acc_reward_per_share: i128,
    /// Injected reward × `PRECISION` not yet reflected in the accumulator.
    pub reward_carry: i128,
    /// Cumulative reward injected into the pool.
    pub total_injected: i128,
    /// Cumulative reward paid out by claims.
    pub total_claimed: i128,
}

/// Stage of the unlock schedule. The discriminant is the tier index.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum UnlockTier {
    /// Nothing may be withdrawn.
    Locked = 0,
    /// 25% of the original lock is withdrawable.
    Quarter = 1,
    /// 50% of the original lock is withdrawable.
    Half = 2,
    /// 75% of the original lock is withdrawable.
    ThreeQuarters = 3,
    /// The whole lock is withdrawable.
    Full = 4,
}

/// Read-only answer to "what would `leave` release right now?".
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReleaseQuote {
    pub tier: UnlockTier,
    pub unlocked_numerator: u32,
    pub unlocked_denominator: u32,
    pub releasable: i128,
    /// Timestamp at which the next tier starts; `None` once fully unlocked.
    pub next_unlock_at: Option<u64>,
}

/// Snapshot of a user's position returned by `get_staker_info`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakerInfo {
    pub staked: i128,
    pub released_so_far: i128,
    pub stake_start_time: u64,
    pub pending_reward: i128,
    pub tier: UnlockTier,
}

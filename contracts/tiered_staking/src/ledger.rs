//! Per-account lock positions and the ledger-wide `total_locked` counter.
//!
//! Functions take the records they touch by reference and never read
//! storage or the clock, so they can be driven directly from tests. Each
//! operation validates and computes every new value before assigning any of
//! them; an `Err` leaves both arguments untouched.

use crate::schedule;
use crate::types::{GlobalRewardState, ReleaseQuote, StakeRecord, UnlockTier};
use crate::ContractError;

/// Outcome of a successful `withdraw`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Withdrawal {
    /// Principal to hand back to the account. Zero is a valid outcome.
    pub released: i128,
    /// Tier the withdrawal was evaluated in.
    pub tier: UnlockTier,
    /// `true` when this withdrawal emptied the position.
    pub fully_exited: bool,
}

impl Withdrawal {
    fn nothing(tier: UnlockTier) -> Self {
        Self {
            released: 0,
            tier,
            fully_exited: false,
        }
    }
}

/// Reject non-positive amounts with the matching error.
pub fn require_positive(amount: i128) -> Result<(), ContractError> {
    if amount == 0 {
        return Err(ContractError::ZeroAmount);
    }
    if amount < 0 {
        return Err(ContractError::NegativeAmount);
    }
    Ok(())
}

fn elapsed_since_start(record: &StakeRecord, now: u64) -> u64 {
    now.saturating_sub(record.stake_start_time)
}

/// Lock `amount` more for this account.
///
/// A deposit into an empty position opens a fresh lock at `now`. A top-up
/// into a live position joins the running schedule: the start time is kept
/// and the new amount counts toward `original_locked`, so it unlocks at the
/// position's current tier.
pub fn deposit(
    state: &mut GlobalRewardState,
    record: &mut StakeRecord,
    amount: i128,
    now: u64,
) -> Result<(), ContractError> {
    require_positive(amount)?;

    let new_principal = record
        .principal_locked
        .checked_add(amount)
        .ok_or(ContractError::ArithmeticOverflow)?;
    let new_total = state
        .total_locked
        .checked_add(amount)
        .ok_or(ContractError::ArithmeticOverflow)?;

    if record.is_empty() {
        record.stake_start_time = now;
        record.released_so_far = 0;
    }
    record.principal_locked = new_principal;
    state.total_locked = new_total;

    Ok(())
}

/// Release whatever the schedule allows at `now`.
///
/// Fails with `Locked` inside the first tier. Later tiers with nothing new to
/// release succeed with `released == 0`. Emptying the position resets its
/// start time and release counter so the next deposit opens a clean lock.
pub fn withdraw(
    state: &mut GlobalRewardState,
    record: &mut StakeRecord,
    now: u64,
) -> Result<Withdrawal, ContractError> {
    if record.is_empty() {
        return Ok(Withdrawal::nothing(UnlockTier::Locked));
    }

    let elapsed = elapsed_since_start(record, now);
    let tier = UnlockTier::for_elapsed(elapsed);
    if tier.is_locked() {
        return Err(ContractError::Locked);
    }

    let releasable = schedule::releasable_now(record, elapsed)?;
    if releasable == 0 {
        return Ok(Withdrawal::nothing(tier));
    }

    let new_principal = record
        .principal_locked
        .checked_sub(releasable)
        .filter(|p| *p >= 0)
        .ok_or(ContractError::ArithmeticOverflow)?;
    let new_released = record
        .released_so_far
        .checked_add(releasable)
        .ok_or(ContractError::ArithmeticOverflow)?;
    let new_total = state
        .total_locked
        .checked_sub(releasable)
        .filter(|t| *t >= 0)
        .ok_or(ContractError::ArithmeticOverflow)?;

    let fully_exited = new_principal == 0;
    if fully_exited {
        *record = StakeRecord::default();
    } else {
        record.principal_locked = new_principal;
        record.released_so_far = new_released;
    }
    state.total_locked = new_total;

    Ok(Withdrawal {
        released: releasable,
        tier,
        fully_exited,
    })
}

pub fn staked_balance(record: &StakeRecord) -> i128 {
    record.principal_locked
}

/// What `withdraw` would do at `now`, without mutating anything.
///
/// An empty position has no schedule running and reports `Locked` with
/// nothing unlocked.
pub fn quote(record: &StakeRecord, now: u64) -> Result<ReleaseQuote, ContractError> {
    if record.is_empty() {
        return Ok(ReleaseQuote {
            tier: UnlockTier::Locked,
            unlocked_numerator: 0,
            unlocked_denominator: schedule::UNLOCK_DENOMINATOR,
            releasable: 0,
            next_unlock_at: None,
        });
    }

    let elapsed = elapsed_since_start(record, now);
    let fraction = schedule::unlock_fraction(elapsed);

    Ok(ReleaseQuote {
        tier: fraction.tier,
        unlocked_numerator: fraction.numerator,
        unlocked_denominator: fraction.denominator,
        releasable: schedule::releasable_now(record, elapsed)?,
        next_unlock_at: schedule::next_unlock_at(record.stake_start_time, fraction.tier),
    })
}

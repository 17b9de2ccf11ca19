use crate::fixed_point;
use crate::ledger::require_positive;
use crate::types::{GlobalRewardState, RewardAccount, StakeRecord};
use crate::ContractError;

// ── Core reward engine ──────────────────────────────────────────────────────

/// Distribute `amount` over everything currently locked.
///
/// This is the O(1) accumulation step:
///
/// ```text
/// Δacc  = ⌊(amount × PRECISION + carry) / total_locked⌋
/// acc   = acc + Δacc
/// carry = (amount × PRECISION + carry) mod total_locked
/// ```
///
/// Only balances locked at the moment of injection share the reward. With
/// nothing locked the injection is rejected with `NoStakers` rather than
/// silently stranded in the pool.
///
/// Returns the accumulator increment.
pub fn inject(state: &mut GlobalRewardState, amount: i128) -> Result<i128, ContractError> {
    require_positive(amount)?;
    if state.total_locked <= 0 {
        return Err(ContractError::NoStakers);
    }

    let (delta, carry) = fixed_point::per_share(amount, state.total_locked, state.reward_carry)
        .ok_or(ContractError::ArithmeticOverflow)?;
    let new_acc = state
        .acc_reward_per_share
        .checked_add(delta)
        .ok_or(ContractError::ArithmeticOverflow)?;
    let new_injected = state
        .total_injected
        .checked_add(amount)
        .ok_or(ContractError::ArithmeticOverflow)?;

    state.acc_reward_per_share = new_acc;
    state.reward_carry = carry;
    state.total_injected = new_injected;

    Ok(delta)
}

/// Reward earned by `record` since the account's last checkpoint.
///
/// ```text
/// accrued = ⌊principal_locked × (acc − reward_debt) / PRECISION⌋
/// ```
pub fn accrued(
    state: &GlobalRewardState,
    record: &StakeRecord,
    account: &RewardAccount,
) -> Result<i128, ContractError> {
    let delta = state
        .acc_reward_per_share
        .saturating_sub(account.reward_debt)
        .max(0);
    fixed_point::scale(record.principal_locked, delta).ok_or(ContractError::ArithmeticOverflow)
}

/// Everything the account could claim right now: the settled cache plus
/// what has accrued on the current balance.
pub fn pending_reward(
    state: &GlobalRewardState,
    record: &StakeRecord,
    account: &RewardAccount,
) -> Result<i128, ContractError> {
    account
        .pending
        .checked_add(accrued(state, record, account)?)
        .ok_or(ContractError::ArithmeticOverflow)
}

/// Realize accrual into the account's pending cache.
///
/// Must run while `record` still holds the balance the accrual was earned
/// on, i.e. *before* any deposit or withdrawal changes it.
pub fn settle(
    state: &GlobalRewardState,
    record: &StakeRecord,
    account: &mut RewardAccount,
) -> Result<(), ContractError> {
    account.pending = pending_reward(state, record, account)?;
    Ok(())
}

/// Mark everything up to the current accumulator as accounted for.
///
/// Must run *after* the balance change, so the next accrual is measured on
/// the new balance only.
pub fn checkpoint(state: &GlobalRewardState, account: &mut RewardAccount) {
    account.reward_debt = state.acc_reward_per_share;
}

/// Settle and hand out the account's whole pending reward.
///
/// A zero payout is a valid no-op. Returns the amount to transfer.
pub fn claim(
    state: &mut GlobalRewardState,
    record: &StakeRecord,
    account: &mut RewardAccount,
) -> Result<i128, ContractError> {
    let amount = pending_reward(state, record, account)?;
    let new_claimed = state
        .total_claimed
        .checked_add(amount)
        .ok_or(ContractError::ArithmeticOverflow)?;

    account.pending = 0;
    checkpoint(state, account);
    state.total_claimed = new_claimed;

    Ok(amount)
}

// ── Unit tests ──────────────────────────────────────────────────────────────
// Pure-math tests with no Soroban environment dependency.

#![no_std]

pub mod events;
pub mod fixed_point;
pub mod ledger;
pub mod rewards;
pub mod schedule;
mod storage;
pub mod types;

use soroban_sdk::{contract, contractimpl, token, Address, Env};

pub use types::{
    GlobalRewardState, LedgerConfig, ReleaseQuote, RewardAccount, StakeRecord, StakerInfo,
    UnlockTier,
};

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    TokensIdentical = 3,
    ZeroAmount = 4,
    NegativeAmount = 5,
    /// Withdrawal attempted before the first tier threshold.
    Locked = 6,
    /// Reward injected while nothing is locked.
    NoStakers = 7,
    /// The stake token refused to move the deposit into custody.
    InsufficientApproval = 8,
    TransferFailed = 9,
    ArithmeticOverflow = 10,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct TieredStakingContract;

#[contractimpl]
impl TieredStakingContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the ledger.
    ///
    /// * `stake_token`  – SAC address of the token users lock.
    /// * `reward_token` – SAC address of the token the reward pool pays out.
    pub fn initialize(
        env: Env,
        admin: Address,
        stake_token: Address,
        reward_token: Address,
    ) -> Result<(), ContractError> {
        if storage::has_config(&env) {
            return Err(ContractError::AlreadyInitialized);
        }
        admin.require_auth();

        if stake_token == reward_token {
            return Err(ContractError::TokensIdentical);
        }

        storage::set_config(
            &env,
            &LedgerConfig {
                admin: admin.clone(),
                stake_token: stake_token.clone(),
                reward_token: reward_token.clone(),
            },
        );
        storage::set_state(&env, &GlobalRewardState::default());

        events::publish_initialized(&env, admin, stake_token, reward_token);

        Ok(())
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Lock `amount` stake tokens.
    ///
    /// Pending reward is settled against the balance held *before* the
    /// deposit, and the reward debt is re-checkpointed against the new
    /// balance, so the deposit never earns from earlier injections.
    pub fn enter(env: Env, staker: Address, amount: i128) -> Result<(), ContractError> {
        let config = Self::require_config(&env)?;
        staker.require_auth();

        let now = env.ledger().timestamp();
        let mut state = storage::get_state(&env);
        let mut record = storage::get_stake(&env, &staker);
        let mut account = storage::get_reward_account(&env, &staker);

        rewards::settle(&state, &record, &mut account)?;
        ledger::deposit(&mut state, &mut record, amount, now)?;
        rewards::checkpoint(&state, &mut account);

        Self::move_tokens(
            &env,
            &config.stake_token,
            &staker,
            &env.current_contract_address(),
            amount,
            ContractError::InsufficientApproval,
        )?;

        storage::set_state(&env, &state);
        storage::set_stake(&env, &staker, &record);
        storage::set_reward_account(&env, &staker, &account);

        events::publish_entered(
            &env,
            staker,
            amount,
            record.principal_locked,
            record.stake_start_time,
            state.total_locked,
        );

        Ok(())
    }

    /// Withdraw whatever the unlock schedule currently allows.
    ///
    /// Fails with `Locked` during the first two days of a lock. Calling again
    /// within the same tier releases nothing and succeeds. Returns the amount
    /// of stake token sent back to `staker`; `LEFT` is only published when
    /// that amount is non-zero.
    pub fn leave(env: Env, staker: Address) -> Result<i128, ContractError> {
        let config = Self::require_config(&env)?;
        staker.require_auth();

        let now = env.ledger().timestamp();
        let mut state = storage::get_state(&env);
        let mut record = storage::get_stake(&env, &staker);
        let mut account = storage::get_reward_account(&env, &staker);

        rewards::settle(&state, &record, &mut account)?;
        let withdrawal = ledger::withdraw(&mut state, &mut record, now)?;
        rewards::checkpoint(&state, &mut account);

        if withdrawal.released > 0 {
            Self::move_tokens(
                &env,
                &config.stake_token,
                &env.current_contract_address(),
                &staker,
                withdrawal.released,
                ContractError::TransferFailed,
            )?;
        }

        storage::set_state(&env, &state);
        storage::set_stake(&env, &staker, &record);
        storage::set_reward_account(&env, &staker, &account);

        if withdrawal.released > 0 {
            events::publish_left(
                &env,
                staker,
                withdrawal.released,
                record.principal_locked,
                withdrawal.tier,
                state.total_locked,
            );
        }

        Ok(withdrawal.released)
    }

    // ── Rewards ─────────────────────────────────────────────────────────────

    /// Add `amount` reward tokens to the pool, shared pro rata by everything
    /// locked right now. Any authorized funder may call this.
    pub fn inject_reward(env: Env, funder: Address, amount: i128) -> Result<(), ContractError> {
        let config = Self::require_config(&env)?;
        funder.require_auth();

        let mut state = storage::get_state(&env);
        rewards::inject(&mut state, amount)?;

        Self::move_tokens(
            &env,
            &config.reward_token,
            &funder,
            &env.current_contract_address(),
            amount,
            ContractError::TransferFailed,
        )?;

        storage::set_state(&env, &state);

        events::publish_reward_injected(
            &env,
            funder,
            amount,
            state.acc_reward_per_share,
            state.total_locked,
        );

        Ok(())
    }

    /// Claim every reward accrued to `staker`.
    ///
    /// Nothing to claim is not an error; the call returns 0.
    pub fn claim_reward(env: Env, staker: Address) -> Result<i128, ContractError> {
        let config = Self::require_config(&env)?;
        staker.require_auth();

        let mut state = storage::get_state(&env);
        let record = storage::get_stake(&env, &staker);
        let mut account = storage::get_reward_account(&env, &staker);

        let amount = rewards::claim(&mut state, &record, &mut account)?;

        if amount > 0 {
            Self::move_tokens(
                &env,
                &config.reward_token,
                &env.current_contract_address(),
                &staker,
                amount,
                ContractError::TransferFailed,
            )?;
        }

        storage::set_state(&env, &state);
        storage::set_reward_account(&env, &staker, &account);

        if amount > 0 {
            events::publish_reward_claimed(&env, staker, amount);
        }

        Ok(amount)
    }

    // ── View functions ───────────────────────────────────────────────────────

    /// Return the user's currently locked principal.
    pub fn get_staked(env: Env, staker: Address) -> i128 {
        ledger::staked_balance(&storage::get_stake(&env, &staker))
    }

    /// Return the reward `staker` could claim right now.
    pub fn get_pending_reward(env: Env, staker: Address) -> Result<i128, ContractError> {
        let state = storage::get_state(&env);
        let record = storage::get_stake(&env, &staker);
        let account = storage::get_reward_account(&env, &staker);
        rewards::pending_reward(&state, &record, &account)
    }

    /// Return the sum of all locked principal.
    pub fn get_total_locked(env: Env) -> i128 {
        storage::get_state(&env).total_locked
    }

    pub fn get_stake_record(env: Env, staker: Address) -> StakeRecord {
        storage::get_stake(&env, &staker)
    }

    /// Return what `leave` would release at the current ledger time.
    pub fn get_release_quote(env: Env, staker: Address) -> Result<ReleaseQuote, ContractError> {
        let record = storage::get_stake(&env, &staker);
        ledger::quote(&record, env.ledger().timestamp())
    }

    /// Return the combined position for a user.
    pub fn get_staker_info(env: Env, staker: Address) -> Result<StakerInfo, ContractError> {
        let state = storage::get_state(&env);
        let record = storage::get_stake(&env, &staker);
        let account = storage::get_reward_account(&env, &staker);
        let quote = ledger::quote(&record, env.ledger().timestamp())?;

        Ok(StakerInfo {
            staked: record.principal_locked,
            released_so_far: record.released_so_far,
            stake_start_time: record.stake_start_time,
            pending_reward: rewards::pending_reward(&state, &record, &account)?,
            tier: quote.tier,
        })
    }

    pub fn get_reward_state(env: Env) -> GlobalRewardState {
        storage::get_state(&env)
    }

    pub fn get_config(env: Env) -> Result<LedgerConfig, ContractError> {
        Self::require_config(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        Ok(Self::require_config(&env)?.admin)
    }

    pub fn is_initialized(env: Env) -> bool {
        storage::has_config(&env)
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    /// Guard: revert if the ledger is not yet initialized.
    fn require_config(env: &Env) -> Result<LedgerConfig, ContractError> {
        storage::get_config(env).ok_or(ContractError::NotInitialized)
    }

    /// Move `amount` of `token` through the token contract, mapping any
    /// rejection to `err`.
    fn move_tokens(
        env: &Env,
        token: &Address,
        from: &Address,
        to: &Address,
        amount: i128,
        err: ContractError,
    ) -> Result<(), ContractError> {
        match token::Client::new(env, token).try_transfer(from, to, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => Err(err),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Property-based state machine tests for the TieredStaking contract.
//!
//! Random operation sequences are replayed against a deployed contract with
//! real SAC tokens. After every step the contract must stay consistent with
//! its own token balances.
//!
//! Invariants tested:
//! - `get_total_locked` equals the sum of every staker's `get_staked`
//! - The contract holds exactly `total_locked` stake tokens
//! - The contract holds exactly `injected - claimed` reward tokens
//! - `leave` fails with `Locked` only inside the first two days of a lock

use proptest::prelude::*;
use proptest_derive::Arbitrary;
use soroban_sdk::testutils::{Address as _, Ledger as _};
use soroban_sdk::token::{Client as TokenClient, StellarAssetClient};
use soroban_sdk::{Address, Env};
use tiered_staking::schedule::{DAY, TIER_LENGTH};
use tiered_staking::{ContractError, TieredStakingContract, TieredStakingContractClient};

const STAKERS: usize = 3;
/// A hundred thousand tokens at 18 decimals per staker.
const WALLET: i128 = 100_000_000_000_000_000_000_000;

#[derive(Clone, Debug, Arbitrary)]
enum Op {
    Enter {
        #[proptest(strategy = "0..STAKERS")]
        who: usize,
        #[proptest(strategy = "1_000_000_000_000i128..1_000_000_000_000_000_000_000i128")]
        amount: i128,
    },
    Leave {
        #[proptest(strategy = "0..STAKERS")]
        who: usize,
    },
    Claim {
        #[proptest(strategy = "0..STAKERS")]
        who: usize,
    },
    Inject {
        #[proptest(strategy = "1i128..1_000_000_000_000_000_000_000i128")]
        amount: i128,
    },
    Warp {
        #[proptest(strategy = "0u64..3 * DAY")]
        secs: u64,
    },
}

// ── Helpers ───────────────────────────────────────────────────────────────────

struct World {
    env: Env,
    client: TieredStakingContractClient<'static>,
    stake_token: Address,
    reward_token: Address,
    stakers: [Address; STAKERS],
    injected: i128,
    claimed: i128,
}

fn setup() -> World {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(0);

    let stake_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let reward_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();

    let contract_id = env.register(TieredStakingContract, ());
    let client = TieredStakingContractClient::new(&env, &contract_id);
    client.initialize(&Address::generate(&env), &stake_token, &reward_token);

    let stakers = [
        Address::generate(&env),
        Address::generate(&env),
        Address::generate(&env),
    ];
    for staker in &stakers {
        StellarAssetClient::new(&env, &stake_token).mint(staker, &WALLET);
    }

    World {
        env,
        client,
        stake_token,
        reward_token,
        stakers,
        injected: 0,
        claimed: 0,
    }
}

impl World {
    fn now(&self) -> u64 {
        self.env.ledger().timestamp()
    }

    fn apply(&mut self, op: &Op) -> Result<(), TestCaseError> {
        match *op {
            Op::Enter { who, amount } => {
                let staker = &self.stakers[who];
                let result = self.client.try_enter(staker, &amount);
                let wallet = TokenClient::new(&self.env, &self.stake_token).balance(staker);
                // A failed enter can only mean the wallet ran dry.
                if result.is_err() {
                    prop_assert!(wallet < amount);
                }
            }
            Op::Leave { who } => {
                let staker = &self.stakers[who];
                let record = self.client.get_stake_record(staker);
                let elapsed = self.now().saturating_sub(record.stake_start_time);
                let result = self.client.try_leave(staker);

                if record.principal_locked > 0 && elapsed < TIER_LENGTH {
                    prop_assert!(matches!(result, Err(Ok(ContractError::Locked))));
                } else {
                    let released = result.unwrap().unwrap();
                    prop_assert!(released >= 0 && released <= record.principal_locked);
                }
            }
            Op::Claim { who } => {
                let paid = self.client.claim_reward(&self.stakers[who]);
                prop_assert!(paid >= 0);
                self.claimed += paid;
            }
            Op::Inject { amount } => {
                let funder = Address::generate(&self.env);
                StellarAssetClient::new(&self.env, &self.reward_token).mint(&funder, &amount);
                let result = self.client.try_inject_reward(&funder, &amount);

                if self.client.get_total_locked() == 0 {
                    prop_assert!(matches!(result, Err(Ok(ContractError::NoStakers))));
                } else {
                    prop_assert!(result.is_ok());
                    self.injected += amount;
                }
            }
            Op::Warp { secs } => {
                let to = self.now() + secs;
                self.env.ledger().set_timestamp(to);
            }
        }
        Ok(())
    }

    fn check_invariants(&self) -> Result<(), TestCaseError> {
        let contract = self.client.address.clone();
        let total = self.client.get_total_locked();
        let sum: i128 = self.stakers.iter().map(|s| self.client.get_staked(s)).sum();
        prop_assert_eq!(total, sum);

        let held = TokenClient::new(&self.env, &self.stake_token).balance(&contract);
        prop_assert_eq!(held, total);

        let pool = TokenClient::new(&self.env, &self.reward_token).balance(&contract);
        prop_assert_eq!(pool, self.injected - self.claimed);
        Ok(())
    }
}

// ── proptest! blocks ──────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Every random sequence of operations leaves the ledger and the token
    /// balances in agreement.
    #[test]
    fn prop_random_sequences_stay_consistent(ops in prop::collection::vec(any::<Op>(), 1..25)) {
        let mut world = setup();
        for op in &ops {
            world.apply(op)?;
            world.check_invariants()?;
        }
    }

    /// Whatever the sequence, waiting out the full schedule lets every staker
    /// drain their position and leaves nothing locked.
    #[test]
    fn prop_everyone_can_exit_after_schedule(ops in prop::collection::vec(any::<Op>(), 1..25)) {
        let mut world = setup();
        for op in &ops {
            world.apply(op)?;
        }

        let end = world.now() + 4 * TIER_LENGTH;
        world.env.ledger().set_timestamp(end);

        for staker in &world.stakers {
            let before = world.client.get_staked(staker);
            let released = world.client.leave(staker);
            prop_assert_eq!(released, before);
            prop_assert_eq!(
                TokenClient::new(&world.env, &world.stake_token).balance(staker),
                WALLET
            );
        }
        prop_assert_eq!(world.client.get_total_locked(), 0);
    }
}

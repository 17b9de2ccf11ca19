#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env,
};
use tiered_staking::{TieredStakingContract, TieredStakingContractClient};

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Enter { amount: i128 },
    Leave,
    Claim,
    Inject { amount: i128 },
    Warp { secs: u32 },
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();

    let stake_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let reward_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let stake_sac = StellarAssetClient::new(&env, &stake_token);
    let reward_sac = StellarAssetClient::new(&env, &reward_token);

    let contract_id = env.register(TieredStakingContract, ());
    let client = TieredStakingContractClient::new(&env, &contract_id);
    client.initialize(&Address::generate(&env), &stake_token, &reward_token);

    let users: Vec<Address> = (0..4).map(|_| Address::generate(&env)).collect();
    let funder = Address::generate(&env);

    // Arbitrary amounts reach the checked arithmetic in the ledger and the
    // reward index; every failure must surface as a contract error, never a
    // panic, and must leave the books balanced.
    for (i, action) in actions.into_iter().enumerate() {
        let caller = &users[i % users.len()];
        match action {
            FuzzAction::Enter { amount } => {
                if amount > 0 {
                    let _ = stake_sac.try_mint(caller, &amount);
                }
                let _ = client.try_enter(caller, &amount);
            }
            FuzzAction::Leave => {
                let _ = client.try_leave(caller);
            }
            FuzzAction::Claim => {
                let _ = client.try_claim_reward(caller);
            }
            FuzzAction::Inject { amount } => {
                if amount > 0 {
                    let _ = reward_sac.try_mint(&funder, &amount);
                }
                let _ = client.try_inject_reward(&funder, &amount);
            }
            FuzzAction::Warp { secs } => {
                let now = env.ledger().timestamp();
                env.ledger().set_timestamp(now.saturating_add(u64::from(secs)));
            }
        }

        let total = client.get_total_locked();
        let sum: i128 = users.iter().map(|u| client.get_staked(u)).sum();
        assert_eq!(total, sum, "total_locked drifted from positions");
        assert_eq!(
            TokenClient::new(&env, &stake_token).balance(&contract_id),
            total,
            "custody balance drifted from total_locked"
        );
    }
});

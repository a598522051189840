//! Calls into the RewardToken and AchievementNFT contracts.
//!
//! Both collaborators only accept `mint` from their configured minter, which
//! must be this election's contract address. A failing mint aborts the whole
//! invocation, so no tally or registry write survives it.

use soroban_sdk::{symbol_short, Address, Env, IntoVal, String};

use crate::storage::ElectionConfig;

pub fn mint_reward(env: &Env, config: &ElectionConfig, to: &Address) {
    if config.reward_amount == 0 {
        return;
    }
    env.invoke_contract::<()>(
        &config.reward_token,
        &symbol_short!("mint"),
        soroban_sdk::vec![
            env,
            to.into_val(env),
            config.reward_amount.into_val(env)
        ],
    );
}

/// Returns the token id the NFT contract assigned.
pub fn mint_badge(env: &Env, config: &ElectionConfig, to: &Address, label: &String) -> u64 {
    env.invoke_contract(
        &config.achievement_nft,
        &symbol_short!("mint"),
        soroban_sdk::vec![env, to.into_val(env), label.into_val(env)],
    )
}

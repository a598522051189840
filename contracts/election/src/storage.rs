use soroban_sdk::{contracttype, Address, BytesN, Env};

use crate::error::ElectionError;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,
    Config,
    Window,
    Root,
    CandidateCount,
    Candidate(u32), // id -> Candidate
    Voted(Address), // voter -> bool
}

/// Deployment-time settings. Immutable once the contract is constructed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ElectionConfig {
    /// RewardToken contract; this election must be its minter
    pub reward_token: Address,
    /// Amount minted to every voter (0 disables the reward)
    pub reward_amount: i128,
    /// AchievementNFT contract; this election must be its minter
    pub achievement_nft: Address,
}

pub fn owner(env: &Env) -> Result<Address, ElectionError> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(ElectionError::NotInitialized)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn config(env: &Env) -> Result<ElectionConfig, ElectionError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(ElectionError::NotInitialized)
}

pub fn set_config(env: &Env, config: &ElectionConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

/// All-zero when no allowlist has been configured.
pub fn merkle_root(env: &Env) -> BytesN<32> {
    env.storage()
        .instance()
        .get(&DataKey::Root)
        .unwrap_or_else(|| BytesN::from_array(env, &[0u8; 32]))
}

pub fn set_merkle_root(env: &Env, root: &BytesN<32>) {
    env.storage().instance().set(&DataKey::Root, root);
}

/// Caller must authorize the invocation and be the stored owner.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), ElectionError> {
    caller.require_auth();
    let owner = owner(env)?;
    if caller != &owner {
        return Err(ElectionError::Unauthorized);
    }
    Ok(())
}

use soroban_sdk::{Address, Env};

use crate::error::ElectionError;
use crate::storage::DataKey;

pub fn has_voted(env: &Env, voter: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Voted(voter.clone()))
        .unwrap_or(false)
}

pub fn ensure_not_voted(env: &Env, voter: &Address) -> Result<(), ElectionError> {
    if has_voted(env, voter) {
        return Err(ElectionError::AlreadyVoted);
    }
    Ok(())
}

/// Sole writer of the voted flag. The flag is never cleared.
pub fn mark_voted(env: &Env, voter: &Address) -> Result<(), ElectionError> {
    ensure_not_voted(env, voter)?;
    env.storage()
        .persistent()
        .set(&DataKey::Voted(voter.clone()), &true);
    Ok(())
}

use soroban_sdk::{contracttype, Env, String, Vec};

use crate::error::ElectionError;
use crate::storage::DataKey;

pub const MAX_POSITION: u32 = 10;
pub const NEUTRAL_POSITION: u32 = 5;
pub const MAX_NAME_LEN: u32 = 64;

/// Stance on the three questionnaire axes, each in `[0, MAX_POSITION]`.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Positions(pub u32, pub u32, pub u32);

impl Positions {
    pub const NEUTRAL: Positions = Positions(NEUTRAL_POSITION, NEUTRAL_POSITION, NEUTRAL_POSITION);

    pub fn to_array(&self) -> [u32; 3] {
        [self.0, self.1, self.2]
    }

    pub fn validate(&self) -> Result<(), ElectionError> {
        if self.to_array().iter().any(|p| *p > MAX_POSITION) {
            return Err(ElectionError::InvalidPosition);
        }
        Ok(())
    }

    pub fn distance_sq(&self, other: &Positions) -> u32 {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .map(|(a, b)| {
                let d = a.abs_diff(*b);
                d * d
            })
            .sum()
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Candidate {
    pub name: String,
    pub positions: Positions,
    pub vote_count: u64,
    /// AchievementNFT token minted when the candidate was registered
    pub badge_id: u64,
}

pub fn validate_name(name: &String) -> Result<(), ElectionError> {
    if name.len() == 0 || name.len() > MAX_NAME_LEN {
        return Err(ElectionError::InvalidName);
    }
    Ok(())
}

pub fn count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::CandidateCount)
        .unwrap_or(0)
}

/// Append a candidate with a zero tally. Returns its id.
pub fn append(env: &Env, name: String, positions: Positions, badge_id: u64) -> u32 {
    let id = count(env);
    let candidate = Candidate {
        name,
        positions,
        vote_count: 0,
        badge_id,
    };
    env.storage()
        .persistent()
        .set(&DataKey::Candidate(id), &candidate);
    env.storage()
        .instance()
        .set(&DataKey::CandidateCount, &(id + 1));
    id
}

pub fn get(env: &Env, id: u32) -> Result<Candidate, ElectionError> {
    if id >= count(env) {
        return Err(ElectionError::InvalidCandidate);
    }
    env.storage()
        .persistent()
        .get(&DataKey::Candidate(id))
        .ok_or(ElectionError::InvalidCandidate)
}

/// Increment a candidate's tally, returning the new count.
pub fn record_vote(env: &Env, id: u32) -> Result<u64, ElectionError> {
    let mut candidate = get(env, id)?;
    candidate.vote_count += 1;
    env.storage()
        .persistent()
        .set(&DataKey::Candidate(id), &candidate);
    Ok(candidate.vote_count)
}

/// All candidates in id order.
pub fn all(env: &Env) -> Result<Vec<Candidate>, ElectionError> {
    let mut candidates = Vec::new(env);
    for id in 0..count(env) {
        candidates.push_back(get(env, id)?);
    }
    Ok(candidates)
}

//! # Allowlisted Election Contract
//!
//! One election per contract instance. Voters prove membership in an
//! owner-committed Merkle allowlist, vote once inside a `[start, end)` window,
//! either directly for a candidate id or by answering a three-axis
//! questionnaire that is matched to the nearest candidate. Every vote mints a
//! fixed RewardToken amount to the voter; every registered candidate mints an
//! AchievementNFT to the owner.
//!
//! ## Lifecycle
//!
//! `Unconfigured -> Configured -> NotStarted -> Open -> Closed`, derived from
//! the stored window, the root and the ledger timestamp (see [`Phase`]).
//!
//! ## Vote gates (in order)
//! 1. window open (`VotingNotOpen` / `VotingNotStarted` / `VotingClosed`)
//! 2. Merkle proof for the voter's 20-byte key (`NotEligible`, also when no root is set)
//! 3. voter has not voted (`AlreadyVoted`)
//!
//! Effects (voted flag, tally, reward mint, `Voted` event) run only after all
//! checks pass.

#![no_std]
use soroban_sdk::{
    contract, contractimpl, log, panic_with_error, Address, BytesN, Env, String, Vec,
};

mod ballot;
mod collaborators;
mod eligibility;
mod error;
mod events;
mod matching;
mod registry;
mod storage;
mod window;

pub use error::ElectionError;
pub use events::{CandidateAdded, OwnershipTransferred, RootSet, Voted, WindowSet};
pub use registry::{Candidate, Positions, MAX_NAME_LEN, MAX_POSITION, NEUTRAL_POSITION};
pub use storage::ElectionConfig;
pub use window::{Phase, VotingWindow};

#[contract]
pub struct Election;

#[contractimpl]
impl Election {
    /// Constructor: owner and collaborator wiring
    pub fn __constructor(env: Env, owner: Address, config: ElectionConfig) {
        if config.reward_amount < 0 {
            panic_with_error!(&env, ElectionError::InvalidRewardAmount);
        }
        storage::set_owner(&env, &owner);
        storage::set_config(&env, &config);
    }

    // ---------------------------------------------------------------------
    // Owner-only administration
    // ---------------------------------------------------------------------

    /// Register a candidate and mint its AchievementNFT to the owner.
    /// Returns the new candidate id.
    pub fn add_candidate(
        env: Env,
        caller: Address,
        name: String,
        positions: Positions,
    ) -> Result<u32, ElectionError> {
        storage::require_owner(&env, &caller)?;
        registry::validate_name(&name)?;
        positions.validate()?;
        Self::register(&env, name, positions)
    }

    /// Singular form used by older setup scripts; same as `add_candidate`.
    pub fn set_candidate(
        env: Env,
        caller: Address,
        name: String,
        positions: Positions,
    ) -> Result<u32, ElectionError> {
        Self::add_candidate(env, caller, name, positions)
    }

    /// Append every name with neutral positions. Existing candidates and
    /// their tallies are untouched; duplicate names are appended as new
    /// candidates. Returns the new candidate count.
    pub fn set_candidates(
        env: Env,
        caller: Address,
        names: Vec<String>,
    ) -> Result<u32, ElectionError> {
        storage::require_owner(&env, &caller)?;
        for name in names.iter() {
            registry::validate_name(&name)?;
        }
        for name in names.iter() {
            Self::register(&env, name, Positions::NEUTRAL)?;
        }
        Ok(registry::count(&env))
    }

    /// Replace the voting window.
    pub fn set_window(env: Env, caller: Address, start: u64, end: u64) -> Result<(), ElectionError> {
        storage::require_owner(&env, &caller)?;
        let window = VotingWindow::new(start, end)?;
        window::store(&env, &window);

        log!(&env, "voting window set", start, end);
        WindowSet { start, end }.publish(&env);
        Ok(())
    }

    /// Replace the allowlist root. An all-zero root closes eligibility for everyone.
    pub fn set_merkle_root(env: Env, caller: Address, root: BytesN<32>) -> Result<(), ElectionError> {
        storage::require_owner(&env, &caller)?;
        storage::set_merkle_root(&env, &root);

        log!(&env, "eligibility root set", root);
        RootSet { root }.publish(&env);
        Ok(())
    }

    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), ElectionError> {
        storage::require_owner(&env, &caller)?;
        storage::set_owner(&env, &new_owner);

        OwnershipTransferred {
            old_owner: caller,
            new_owner,
        }
        .publish(&env);
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Voting
    // ---------------------------------------------------------------------

    /// Cast a vote for `candidate_id`.
    pub fn vote(
        env: Env,
        voter: Address,
        candidate_id: u32,
        proof: Vec<BytesN<32>>,
    ) -> Result<(), ElectionError> {
        voter.require_auth();
        Self::admit(&env, &voter, &proof)?;

        let count = registry::count(&env);
        if count == 0 {
            return Err(ElectionError::NoCandidates);
        }
        if candidate_id >= count {
            return Err(ElectionError::InvalidCandidate);
        }

        Self::cast(&env, &voter, candidate_id, false)
    }

    /// Cast a vote for whichever candidate is closest to `positions`.
    /// The chosen id is deliberately not returned.
    pub fn vote_by_questionnaire(
        env: Env,
        voter: Address,
        positions: Positions,
        proof: Vec<BytesN<32>>,
    ) -> Result<(), ElectionError> {
        voter.require_auth();
        Self::admit(&env, &voter, &proof)?;

        let candidates = registry::all(&env)?;
        let candidate_id =
            matching::find_closest(&positions, candidates.iter().map(|c| c.positions))?;

        Self::cast(&env, &voter, candidate_id, true)
    }

    // ---------------------------------------------------------------------
    // Views
    // ---------------------------------------------------------------------

    pub fn owner(env: Env) -> Result<Address, ElectionError> {
        storage::owner(&env)
    }

    pub fn merkle_root(env: Env) -> BytesN<32> {
        storage::merkle_root(&env)
    }

    /// `(start, end)`; `(0, 0)` when never set.
    pub fn get_window(env: Env) -> (u64, u64) {
        let window = window::load(&env);
        (window.start, window.end)
    }

    pub fn is_open(env: Env) -> bool {
        window::load(&env).is_open(env.ledger().timestamp())
    }

    pub fn phase(env: Env) -> Phase {
        let window = window::load(&env);
        if window.is_set() {
            window.phase_at(env.ledger().timestamp())
        } else if eligibility::is_unset(&storage::merkle_root(&env)) {
            Phase::Unconfigured
        } else {
            Phase::Configured
        }
    }

    pub fn has_voted(env: Env, voter: Address) -> bool {
        ballot::has_voted(&env, &voter)
    }

    pub fn candidate_count(env: Env) -> u32 {
        registry::count(&env)
    }

    pub fn get_candidate(env: Env, candidate_id: u32) -> Result<Candidate, ElectionError> {
        registry::get(&env, candidate_id)
    }

    /// Candidate names in id order.
    pub fn get_candidates(env: Env) -> Result<Vec<String>, ElectionError> {
        let mut names = Vec::new(&env);
        for candidate in registry::all(&env)?.iter() {
            names.push_back(candidate.name);
        }
        Ok(names)
    }

    /// `(names, positions, vote_counts)` in id order.
    pub fn get_candidate_details(
        env: Env,
    ) -> Result<(Vec<String>, Vec<Positions>, Vec<u64>), ElectionError> {
        let mut names = Vec::new(&env);
        let mut positions = Vec::new(&env);
        let mut votes = Vec::new(&env);
        for candidate in registry::all(&env)?.iter() {
            names.push_back(candidate.name);
            positions.push_back(candidate.positions);
            votes.push_back(candidate.vote_count);
        }
        Ok((names, positions, votes))
    }

    /// `(names, vote_counts)` in id order. Not sorted by votes.
    pub fn get_results(env: Env) -> Result<(Vec<String>, Vec<u64>), ElectionError> {
        let (names, _, votes) = Self::get_candidate_details(env)?;
        Ok((names, votes))
    }

    pub fn reward_amount(env: Env) -> Result<i128, ElectionError> {
        Ok(storage::config(&env)?.reward_amount)
    }

    pub fn reward_token(env: Env) -> Result<Address, ElectionError> {
        Ok(storage::config(&env)?.reward_token)
    }

    pub fn achievement_nft(env: Env) -> Result<Address, ElectionError> {
        Ok(storage::config(&env)?.achievement_nft)
    }

    /// 20-byte identity the allowlist must contain for `voter`.
    pub fn voter_key(env: Env, voter: Address) -> BytesN<20> {
        eligibility::voter_key(&env, &voter)
    }

    /// Dry run of the eligibility gate against the current root.
    pub fn is_eligible(env: Env, voter: Address, proof: Vec<BytesN<32>>) -> bool {
        let key = eligibility::voter_key(&env, &voter);
        eligibility::verify(&env, &storage::merkle_root(&env), &key, &proof)
    }

    // ---------------------------------------------------------------------
    // Internal
    // ---------------------------------------------------------------------

    fn register(env: &Env, name: String, positions: Positions) -> Result<u32, ElectionError> {
        let config = storage::config(env)?;
        let owner = storage::owner(env)?;

        let badge_id = collaborators::mint_badge(env, &config, &owner, &name);
        let id = registry::append(env, name.clone(), positions, badge_id);

        log!(env, "candidate added", id, badge_id);
        CandidateAdded {
            id,
            name,
            positions,
        }
        .publish(env);
        Ok(id)
    }

    fn admit(env: &Env, voter: &Address, proof: &Vec<BytesN<32>>) -> Result<(), ElectionError> {
        window::load(env).check_open(env.ledger().timestamp())?;

        let key = eligibility::voter_key(env, voter);
        if !eligibility::verify(env, &storage::merkle_root(env), &key, proof) {
            return Err(ElectionError::NotEligible);
        }

        ballot::ensure_not_voted(env, voter)
    }

    fn cast(
        env: &Env,
        voter: &Address,
        candidate_id: u32,
        is_anonymous: bool,
    ) -> Result<(), ElectionError> {
        let config = storage::config(env)?;

        ballot::mark_voted(env, voter)?;
        registry::record_vote(env, candidate_id)?;
        collaborators::mint_reward(env, &config, voter);

        log!(env, "vote recorded", is_anonymous);
        Voted {
            voter: voter.clone(),
            candidate_id,
            is_anonymous,
        }
        .publish(env);
        Ok(())
    }
}

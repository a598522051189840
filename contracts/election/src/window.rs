use soroban_sdk::{contracttype, Env};

use crate::error::ElectionError;
use crate::storage::DataKey;

/// Derived election phase. Never stored; recomputed from the window, the
/// allowlist root and the ledger clock on every read.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    Unconfigured, // no window, no root
    Configured,   // root set, window not yet set
    NotStarted,   // window set, now < start
    Open,         // start <= now < end
    Closed,       // now >= end
}

/// Half-open `[start, end)` voting period in ledger seconds.
/// `start == 0 && end == 0` means "never configured".
#[contracttype]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct VotingWindow {
    pub start: u64,
    pub end: u64,
}

impl VotingWindow {
    pub fn new(start: u64, end: u64) -> Result<Self, ElectionError> {
        if end <= start {
            return Err(ElectionError::InvalidWindow);
        }
        Ok(Self { start, end })
    }

    pub fn is_set(&self) -> bool {
        self.start != 0 || self.end != 0
    }

    pub fn is_open(&self, now: u64) -> bool {
        self.is_set() && self.start <= now && now < self.end
    }

    /// Same predicate as `is_open`, but reports which side of the window
    /// `now` falls on.
    pub fn check_open(&self, now: u64) -> Result<(), ElectionError> {
        if !self.is_set() {
            Err(ElectionError::VotingNotOpen)
        } else if now < self.start {
            Err(ElectionError::VotingNotStarted)
        } else if now >= self.end {
            Err(ElectionError::VotingClosed)
        } else {
            Ok(())
        }
    }

    /// Phase of a configured window at `now`.
    pub fn phase_at(&self, now: u64) -> Phase {
        match self.check_open(now) {
            Ok(()) => Phase::Open,
            Err(ElectionError::VotingNotStarted) => Phase::NotStarted,
            Err(ElectionError::VotingClosed) => Phase::Closed,
            Err(_) => Phase::Configured,
        }
    }
}

pub fn load(env: &Env) -> VotingWindow {
    env.storage()
        .instance()
        .get(&DataKey::Window)
        .unwrap_or_default()
}

pub fn store(env: &Env, window: &VotingWindow) {
    env.storage().instance().set(&DataKey::Window, window);
}

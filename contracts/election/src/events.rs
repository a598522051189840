use soroban_sdk::{Address, BytesN, String};

use crate::registry::Positions;

// Typed Events
#[soroban_sdk::contractevent]
#[derive(Clone, Debug, PartialEq)]
pub struct Voted {
    #[topic]
    pub voter: Address,
    pub candidate_id: u32,
    pub is_anonymous: bool, // true when resolved through the questionnaire
}

#[soroban_sdk::contractevent]
#[derive(Clone, Debug, PartialEq)]
pub struct CandidateAdded {
    #[topic]
    pub id: u32,
    pub name: String,
    pub positions: Positions,
}

#[soroban_sdk::contractevent]
#[derive(Clone, Debug, PartialEq)]
pub struct WindowSet {
    pub start: u64,
    pub end: u64,
}

#[soroban_sdk::contractevent]
#[derive(Clone, Debug, PartialEq)]
pub struct RootSet {
    pub root: BytesN<32>,
}

#[soroban_sdk::contractevent]
#[derive(Clone, Debug, PartialEq)]
pub struct OwnershipTransferred {
    pub old_owner: Address,
    pub new_owner: Address,
}

use soroban_sdk::contracterror;

/// Every way an election call can be rejected.
///
/// Codes are part of the contract ABI. Never renumber an existing variant.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ElectionError {
    /// Caller is not the election owner
    Unauthorized = 1,
    /// A policy position is outside [0, 10]
    InvalidPosition = 2,
    /// Candidate id does not exist
    InvalidCandidate = 3,
    /// Window end is not after its start
    InvalidWindow = 4,
    /// Merkle proof does not lead to the configured root (or no root is set)
    NotEligible = 5,
    AlreadyVoted = 6,
    /// No voting window has been configured
    VotingNotOpen = 7,
    VotingNotStarted = 8,
    VotingClosed = 9,
    /// Vote or match attempted with an empty candidate list
    NoCandidates = 10,
    /// Candidate name is empty or longer than `MAX_NAME_LEN`
    InvalidName = 11,
    InvalidRewardAmount = 12,
    NotInitialized = 13,
}

#![no_std]
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, panic_with_error, Address, Env, String,
};

#[contracterror]
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum BadgeError {
    NotAdmin = 1,
    MinterNotSet = 2,
    TokenNotFound = 3,
    NotInitialized = 4,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Minter,
    NextId,
    Owner(u64),
    Balance(Address),
}

// Typed Events
#[soroban_sdk::contractevent]
#[derive(Clone, Debug, PartialEq)]
pub struct MinterSetEvent {
    pub minter: Address,
}

#[soroban_sdk::contractevent]
#[derive(Clone, Debug, PartialEq)]
pub struct BadgeMintedEvent {
    #[topic]
    pub to: Address,
    pub token_id: u64,
    pub label: String,
}

/// Non-transferable badge minted once per registered candidate.
/// Token ids are sequential starting at 0.
#[contract]
pub struct AchievementNft;

#[contractimpl]
impl AchievementNft {
    pub fn __constructor(env: Env, admin: Address) {
        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::NextId, &0u64);
    }

    fn admin_addr(env: &Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .unwrap_or_else(|| panic_with_error!(env, BadgeError::NotInitialized))
    }

    /// Grant the mint capability (admin only).
    pub fn set_minter(env: Env, admin: Address, minter: Address) -> Result<(), BadgeError> {
        admin.require_auth();
        if admin != Self::admin_addr(&env) {
            return Err(BadgeError::NotAdmin);
        }

        env.storage().instance().set(&DataKey::Minter, &minter);
        MinterSetEvent { minter }.publish(&env);
        Ok(())
    }

    /// Mint the next badge to `to` and return its id.
    /// The label is only carried in the mint event.
    pub fn mint(env: Env, to: Address, label: String) -> Result<u64, BadgeError> {
        let minter: Address = env
            .storage()
            .instance()
            .get(&DataKey::Minter)
            .ok_or(BadgeError::MinterNotSet)?;
        minter.require_auth();

        let token_id: u64 = env.storage().instance().get(&DataKey::NextId).unwrap_or(0);
        env.storage()
            .instance()
            .set(&DataKey::NextId, &(token_id + 1));

        env.storage()
            .persistent()
            .set(&DataKey::Owner(token_id), &to);
        let balance_key = DataKey::Balance(to.clone());
        let balance: u64 = env.storage().persistent().get(&balance_key).unwrap_or(0);
        env.storage().persistent().set(&balance_key, &(balance + 1));

        BadgeMintedEvent {
            to,
            token_id,
            label,
        }
        .publish(&env);
        Ok(token_id)
    }

    pub fn owner_of(env: Env, token_id: u64) -> Result<Address, BadgeError> {
        env.storage()
            .persistent()
            .get(&DataKey::Owner(token_id))
            .ok_or(BadgeError::TokenNotFound)
    }

    pub fn balance_of(env: Env, owner: Address) -> u64 {
        env.storage()
            .persistent()
            .get(&DataKey::Balance(owner))
            .unwrap_or(0)
    }

    /// Id the next mint will receive; equals the number minted so far.
    pub fn next_id(env: Env) -> u64 {
        env.storage().instance().get(&DataKey::NextId).unwrap_or(0)
    }

    pub fn minter(env: Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::Minter)
    }

    pub fn admin(env: Env) -> Address {
        Self::admin_addr(&env)
    }
}

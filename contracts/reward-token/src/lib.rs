#![no_std]
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, panic_with_error, Address, Env, String,
};

const DECIMALS: u32 = 7;

#[contracterror]
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum TokenError {
    NotAdmin = 1,
    MinterNotSet = 2,
    NegativeAmount = 3,
    Overflow = 4,
    NotInitialized = 5,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Minter,
    Name,
    Symbol,
    TotalSupply,
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
pub struct MintEvent {
    #[topic]
    pub to: Address,
    pub amount: i128,
}

/// Fungible reward paid out per vote. Only the configured minter can create
/// supply; there is no transfer path.
#[contract]
pub struct RewardToken;

#[contractimpl]
impl RewardToken {
    pub fn __constructor(env: Env, admin: Address, name: String, symbol: String) {
        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::Name, &name);
        env.storage().instance().set(&DataKey::Symbol, &symbol);
        env.storage().instance().set(&DataKey::TotalSupply, &0i128);
    }

    fn admin_addr(env: &Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .unwrap_or_else(|| panic_with_error!(env, TokenError::NotInitialized))
    }

    /// Grant the mint capability (admin only). Replaces any previous minter.
    pub fn set_minter(env: Env, admin: Address, minter: Address) -> Result<(), TokenError> {
        admin.require_auth();
        if admin != Self::admin_addr(&env) {
            return Err(TokenError::NotAdmin);
        }

        env.storage().instance().set(&DataKey::Minter, &minter);
        MinterSetEvent { minter }.publish(&env);
        Ok(())
    }

    /// Mint `amount` to `to`. Requires the minter's authorization.
    pub fn mint(env: Env, to: Address, amount: i128) -> Result<(), TokenError> {
        let minter: Address = env
            .storage()
            .instance()
            .get(&DataKey::Minter)
            .ok_or(TokenError::MinterNotSet)?;
        minter.require_auth();

        if amount < 0 {
            return Err(TokenError::NegativeAmount);
        }

        let key = DataKey::Balance(to.clone());
        let balance: i128 = env.storage().persistent().get(&key).unwrap_or(0);
        let supply: i128 = env
            .storage()
            .instance()
            .get(&DataKey::TotalSupply)
            .unwrap_or(0);

        let balance = balance.checked_add(amount).ok_or(TokenError::Overflow)?;
        let supply = supply.checked_add(amount).ok_or(TokenError::Overflow)?;
        env.storage().persistent().set(&key, &balance);
        env.storage().instance().set(&DataKey::TotalSupply, &supply);

        MintEvent { to, amount }.publish(&env);
        Ok(())
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        env.storage()
            .persistent()
            .get(&DataKey::Balance(id))
            .unwrap_or(0)
    }

    pub fn total_supply(env: Env) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::TotalSupply)
            .unwrap_or(0)
    }

    pub fn minter(env: Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::Minter)
    }

    pub fn admin(env: Env) -> Address {
        Self::admin_addr(&env)
    }

    pub fn name(env: Env) -> String {
        env.storage()
            .instance()
            .get(&DataKey::Name)
            .unwrap_or_else(|| panic_with_error!(&env, TokenError::NotInitialized))
    }

    pub fn symbol(env: Env) -> String {
        env.storage()
            .instance()
            .get(&DataKey::Symbol)
            .unwrap_or_else(|| panic_with_error!(&env, TokenError::NotInitialized))
    }

    pub fn decimals(_env: Env) -> u32 {
        DECIMALS
    }
}

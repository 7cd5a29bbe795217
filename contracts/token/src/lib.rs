#![no_std]
use lcfarm_shared::{extend_instance_ttl, BALANCE_BUMP_AMOUNT, BALANCE_LIFETIME_THRESHOLD};
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, log, symbol_short, Address, Env, String,
};


// Data Types
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenMetadata {
    pub decimals: u32,
    pub name: String,
    pub symbol: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowanceKey {
    pub from: Address,
    pub spender: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

// Storage Keys
#[contracttype]
pub enum DataKey {
    Owner,
    Metadata,
    TotalSupply,
    Minter(Address),
    Balance(Address),
    Allowance(AllowanceKey),
}

// Error Types
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    NotMinter = 4,
    InvalidAmount = 5,
    InsufficientBalance = 6,
    InsufficientAllowance = 7,
    InvalidExpiration = 8,
    ArithmeticOverflow = 9,
}

// Events
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MinterChangedEvent {
    pub minter: Address,
    pub enabled: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferredEvent {
    pub previous_owner: Address,
    pub new_owner: Address,
}

#[contract]
pub struct RewardToken;

#[contractimpl]
impl RewardToken {
    /// Initialize the token. The owner manages the minter allowlist but is not
    /// a minter until it adds itself.
    pub fn initialize(
        env: Env,
        owner: Address,
        decimals: u32,
        name: String,
        symbol: String,
    ) -> Result<(), TokenError> {
        if env.storage().instance().has(&DataKey::Owner) {
            return Err(TokenError::AlreadyInitialized);
        }

        owner.require_auth();

        env.storage().instance().set(&DataKey::Owner, &owner);
        env.storage().instance().set(
            &DataKey::Metadata,
            &TokenMetadata {
                decimals,
                name,
                symbol,
            },
        );
        env.storage().instance().set(&DataKey::TotalSupply, &0i128);
        extend_instance_ttl(&env);

        log!(&env, "LC token initialized by owner: {}", owner);

        Ok(())
    }

    /// Mint new supply. Only addresses on the minter allowlist may call this.
    pub fn mint(env: Env, minter: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        minter.require_auth();
        check_non_negative(amount)?;

        if !Self::is_minter(env.clone(), minter.clone()) {
            return Err(TokenError::NotMinter);
        }

        receive_balance(&env, &to, amount)?;

        let supply = Self::total_supply(env.clone())
            .checked_add(amount)
            .ok_or(TokenError::ArithmeticOverflow)?;
        env.storage().instance().set(&DataKey::TotalSupply, &supply);
        extend_instance_ttl(&env);

        env.events()
            .publish((symbol_short!("mint"), minter, to.clone()), amount);

        log!(&env, "Minted {} LC to {}", amount, to);

        Ok(())
    }

    pub fn add_minter(env: Env, owner: Address, minter: Address) -> Result<(), TokenError> {
        require_owner(&env, &owner)?;

        env.storage()
            .persistent()
            .set(&DataKey::Minter(minter.clone()), &true);
        extend_instance_ttl(&env);

        env.events().publish(
            (symbol_short!("minter"),),
            MinterChangedEvent {
                minter: minter.clone(),
                enabled: true,
            },
        );

        log!(&env, "Minter added: {}", minter);

        Ok(())
    }

    pub fn remove_minter(env: Env, owner: Address, minter: Address) -> Result<(), TokenError> {
        require_owner(&env, &owner)?;

        env.storage()
            .persistent()
            .remove(&DataKey::Minter(minter.clone()));
        extend_instance_ttl(&env);

        env.events().publish(
            (symbol_short!("minter"),),
            MinterChangedEvent {
                minter: minter.clone(),
                enabled: false,
            },
        );

        log!(&env, "Minter removed: {}", minter);

        Ok(())
    }

    pub fn is_minter(env: Env, account: Address) -> bool {
        env.storage()
            .persistent()
            .get(&DataKey::Minter(account))
            .unwrap_or(false)
    }

    pub fn owner(env: Env) -> Result<Address, TokenError> {
        env.storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(TokenError::NotInitialized)
    }

    /// Hand the minter allowlist over, typically to the chef at deployment.
    pub fn transfer_ownership(
        env: Env,
        owner: Address,
        new_owner: Address,
    ) -> Result<(), TokenError> {
        require_owner(&env, &owner)?;

        env.storage().instance().set(&DataKey::Owner, &new_owner);
        extend_instance_ttl(&env);

        env.events().publish(
            (symbol_short!("owner"),),
            OwnershipTransferredEvent {
                previous_owner: owner.clone(),
                new_owner: new_owner.clone(),
            },
        );

        log!(&env, "Ownership transferred from {} to {}", owner, new_owner);

        Ok(())
    }

    pub fn total_supply(env: Env) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::TotalSupply)
            .unwrap_or(0)
    }

    // SEP-41 token surface

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        read_allowance(&env, &from, &spender).amount
    }

    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), TokenError> {
        from.require_auth();
        check_non_negative(amount)?;

        let current = env.ledger().sequence();
        if amount > 0 && expiration_ledger < current {
            return Err(TokenError::InvalidExpiration);
        }
        let live_for = expiration_ledger.saturating_sub(current);
        if live_for > env.storage().max_ttl() {
            return Err(TokenError::InvalidExpiration);
        }

        let key = DataKey::Allowance(AllowanceKey {
            from: from.clone(),
            spender: spender.clone(),
        });
        env.storage().temporary().set(
            &key,
            &AllowanceValue {
                amount,
                expiration_ledger,
            },
        );
        if amount > 0 {
            env.storage().temporary().extend_ttl(&key, live_for, live_for);
        }

        env.events().publish(
            (symbol_short!("approve"), from, spender),
            (amount, expiration_ledger),
        );

        Ok(())
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        read_balance(&env, &id)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        from.require_auth();
        check_non_negative(amount)?;

        spend_balance(&env, &from, amount)?;
        receive_balance(&env, &to, amount)?;
        extend_instance_ttl(&env);

        env.events()
            .publish((symbol_short!("transfer"), from, to), amount);

        Ok(())
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        spender.require_auth();
        check_non_negative(amount)?;

        spend_allowance(&env, &from, &spender, amount)?;
        spend_balance(&env, &from, amount)?;
        receive_balance(&env, &to, amount)?;
        extend_instance_ttl(&env);

        env.events()
            .publish((symbol_short!("transfer"), from, to), amount);

        Ok(())
    }

    pub fn burn(env: Env, from: Address, amount: i128) -> Result<(), TokenError> {
        from.require_auth();
        check_non_negative(amount)?;

        spend_balance(&env, &from, amount)?;
        reduce_supply(&env, amount)?;

        env.events().publish((symbol_short!("burn"), from), amount);

        Ok(())
    }

    pub fn burn_from(
        env: Env,
        spender: Address,
        from: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        spender.require_auth();
        check_non_negative(amount)?;

        spend_allowance(&env, &from, &spender, amount)?;
        spend_balance(&env, &from, amount)?;
        reduce_supply(&env, amount)?;

        env.events().publish((symbol_short!("burn"), from), amount);

        Ok(())
    }

    pub fn decimals(env: Env) -> Result<u32, TokenError> {
        Ok(read_metadata(&env)?.decimals)
    }

    pub fn name(env: Env) -> Result<String, TokenError> {
        Ok(read_metadata(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, TokenError> {
        Ok(read_metadata(&env)?.symbol)
    }
}

// Internal helper functions
fn require_owner(env: &Env, caller: &Address) -> Result<(), TokenError> {
    caller.require_auth();

    let owner: Address = env
        .storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(TokenError::NotInitialized)?;

    if owner != *caller {
        return Err(TokenError::Unauthorized);
    }

    Ok(())
}

fn check_non_negative(amount: i128) -> Result<(), TokenError> {
    if amount < 0 {
        return Err(TokenError::InvalidAmount);
    }
    Ok(())
}

fn read_metadata(env: &Env) -> Result<TokenMetadata, TokenError> {
    env.storage()
        .instance()
        .get(&DataKey::Metadata)
        .ok_or(TokenError::NotInitialized)
}

fn read_balance(env: &Env, id: &Address) -> i128 {
    let key = DataKey::Balance(id.clone());
    match env.storage().persistent().get::<DataKey, i128>(&key) {
        Some(balance) => {
            env.storage()
                .persistent()
                .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
            balance
        }
        None => 0,
    }
}

fn write_balance(env: &Env, id: &Address, amount: i128) {
    let key = DataKey::Balance(id.clone());
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

fn receive_balance(env: &Env, id: &Address, amount: i128) -> Result<(), TokenError> {
    let balance = read_balance(env, id)
        .checked_add(amount)
        .ok_or(TokenError::ArithmeticOverflow)?;
    write_balance(env, id, balance);
    Ok(())
}

fn spend_balance(env: &Env, id: &Address, amount: i128) -> Result<(), TokenError> {
    let balance = read_balance(env, id);
    if balance < amount {
        return Err(TokenError::InsufficientBalance);
    }
    write_balance(env, id, balance - amount);
    Ok(())
}

fn read_allowance(env: &Env, from: &Address, spender: &Address) -> AllowanceValue {
    let key = DataKey::Allowance(AllowanceKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    match env.storage().temporary().get::<DataKey, AllowanceValue>(&key) {
        Some(allowance) if allowance.expiration_ledger >= env.ledger().sequence() => allowance,
        Some(allowance) => AllowanceValue {
            amount: 0,
            expiration_ledger: allowance.expiration_ledger,
        },
        None => AllowanceValue {
            amount: 0,
            expiration_ledger: 0,
        },
    }
}

fn spend_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), TokenError> {
    let allowance = read_allowance(env, from, spender);
    if allowance.amount < amount {
        return Err(TokenError::InsufficientAllowance);
    }
    if amount > 0 {
        let key = DataKey::Allowance(AllowanceKey {
            from: from.clone(),
            spender: spender.clone(),
        });
        env.storage().temporary().set(
            &key,
            &AllowanceValue {
                amount: allowance.amount - amount,
                expiration_ledger: allowance.expiration_ledger,
            },
        );
    }
    Ok(())
}

fn reduce_supply(env: &Env, amount: i128) -> Result<(), TokenError> {
    let supply: i128 = env
        .storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0);
    let supply = supply
        .checked_sub(amount)
        .ok_or(TokenError::ArithmeticOverflow)?;
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
    Ok(())
}

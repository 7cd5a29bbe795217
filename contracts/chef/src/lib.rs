#![no_std]

mod access;
mod bonus;
mod error;
mod events;
mod fees;
mod pool;
mod storage;
mod types;


use lcfarm_shared::{
    extend_instance_ttl, scaled_mul, validate_non_negative, validate_rate, DEFAULT_MAX_POOLS,
    MAX_BONUSES, RATE_DENOMINATOR,
};
use soroban_sdk::{contract, contractimpl, log, token, Address, Env, Vec};

pub use error::ChefError;
pub use events::{
    BonusAddedEvent, BonusInjectedEvent, DepositEvent, EmergencyWithdrawEvent, FeeWithdrawnEvent,
    PoolAddedEvent, PoolWeightEvent, ReferralClaimedEvent, ReferralEvent, RewardRateEvent,
    RoleEvent, WithdrawEvent,
};
pub use types::{
    BonusInfo, ChefConfig, ChefParams, FeeBalance, FeeLockTier, PoolInfo, Role, UserInfo,
};

/// Largest allocation or bonus weight a pool may carry
const MAX_WEIGHT: i128 = 1_000_000_000_000;

#[contract]
pub struct ChefContract;

#[contractimpl]
impl ChefContract {
    /// Initialize the chef. The chef must be added as a minter on
    /// `reward_token` before the first pool accrues.
    pub fn initialize(
        env: Env,
        owner: Address,
        reward_token: Address,
        dev_address: Address,
        ref_fee_address: Address,
        params: ChefParams,
    ) -> Result<(), ChefError> {
        // Check if already initialized
        if storage::has_config(&env) {
            return Err(ChefError::AlreadyInitialized);
        }

        owner.require_auth();

        // Validate parameters
        if !validate_non_negative(params.reward_per_block) {
            return Err(ChefError::InvalidConfiguration);
        }

        if !validate_rate(params.dev_fee_rate)
            || !validate_rate(params.ref_fee_rate)
            || params.dev_fee_rate + params.ref_fee_rate > RATE_DENOMINATOR
        {
            return Err(ChefError::InvalidConfiguration);
        }

        if !fees::validate_tiers(&params.fee_lock_tiers) {
            return Err(ChefError::InvalidConfiguration);
        }

        let config = ChefConfig {
            owner: owner.clone(),
            reward_token,
            dev_address,
            ref_fee_address,
            reward_per_block: params.reward_per_block,
            start_block: params.start_block,
            halving_period: params.halving_period,
            dev_fee_rate: params.dev_fee_rate,
            ref_fee_rate: params.ref_fee_rate,
            fee_lock_tiers: params.fee_lock_tiers,
            max_pools: if params.max_pools == 0 {
                DEFAULT_MAX_POOLS
            } else {
                params.max_pools
            },
        };

        storage::set_config(&env, &config);
        storage::set_total_alloc_point(&env, 0);
        storage::set_total_bonus_point(&env, 0);
        storage::set_pool_count(&env, 0);
        storage::set_bonus_count(&env, 0);
        extend_instance_ttl(&env);

        log!(&env, "Chef initialized by owner: {}, start block {}", owner, config.start_block);

        Ok(())
    }

    // ========== Pool Registry ==========

    /// Register a staking pool (owner only). Returns the new pool id.
    pub fn add_pool(
        env: Env,
        caller: Address,
        staked_token: Address,
        alloc_point: i128,
        bonus_point: i128,
        with_update: bool,
    ) -> Result<u32, ChefError> {
        let config = storage::get_config(&env)?;
        access::require_role(&env, &config, &caller, Role::Owner)?;

        validate_weight(alloc_point)?;
        validate_weight(bonus_point)?;

        let pool_id = storage::get_pool_count(&env);
        if pool_id >= config.max_pools {
            return Err(ChefError::InvalidWeight);
        }

        if with_update {
            pool::mass_update_pools(&env, &config)?;
        }

        let total_alloc = storage::get_total_alloc_point(&env)
            .checked_add(alloc_point)
            .ok_or(ChefError::ArithmeticOverflow)?;
        let total_bonus = storage::get_total_bonus_point(&env)
            .checked_add(bonus_point)
            .ok_or(ChefError::ArithmeticOverflow)?;

        let current = env.ledger().sequence();
        storage::set_pool(
            &env,
            pool_id,
            &PoolInfo {
                staked_token: staked_token.clone(),
                alloc_point,
                bonus_point,
                last_reward_block: current.max(config.start_block),
                acc_reward_per_share: 0,
                total_staked: 0,
                reward_minted: 0,
            },
        );
        storage::set_pool_count(&env, pool_id + 1);
        storage::set_total_alloc_point(&env, total_alloc);
        storage::set_total_bonus_point(&env, total_bonus);
        extend_instance_ttl(&env);

        events::publish_pool_added(
            &env,
            PoolAddedEvent {
                pool_id,
                staked_token: staked_token.clone(),
                alloc_point,
                bonus_point,
            },
        );

        log!(&env, "Pool {} added for {} with weight {}", pool_id, staked_token, alloc_point);

        Ok(pool_id)
    }

    /// Change a pool's share of emission (owner only).
    pub fn set_alloc_point(
        env: Env,
        caller: Address,
        pool_id: u32,
        alloc_point: i128,
        with_update: bool,
    ) -> Result<(), ChefError> {
        let config = storage::get_config(&env)?;
        access::require_role(&env, &config, &caller, Role::Owner)?;
        validate_weight(alloc_point)?;

        if with_update {
            pool::mass_update_pools(&env, &config)?;
        }

        let mut pool = storage::get_pool(&env, pool_id)?;
        let total = storage::get_total_alloc_point(&env)
            .checked_sub(pool.alloc_point)
            .and_then(|total| total.checked_add(alloc_point))
            .ok_or(ChefError::ArithmeticOverflow)?;

        pool.alloc_point = alloc_point;
        storage::set_pool(&env, pool_id, &pool);
        storage::set_total_alloc_point(&env, total);
        extend_instance_ttl(&env);

        events::publish_pool_weight(
            &env,
            PoolWeightEvent {
                pool_id,
                alloc_point,
                bonus_point: pool.bonus_point,
            },
        );

        log!(&env, "Pool {} weight set to {}", pool_id, alloc_point);

        Ok(())
    }

    /// Change a pool's share of bonus injections (owner only).
    pub fn set_bonus_point(
        env: Env,
        caller: Address,
        pool_id: u32,
        bonus_point: i128,
    ) -> Result<(), ChefError> {
        let config = storage::get_config(&env)?;
        access::require_role(&env, &config, &caller, Role::Owner)?;
        validate_weight(bonus_point)?;

        let mut pool = storage::get_pool(&env, pool_id)?;
        let total = storage::get_total_bonus_point(&env)
            .checked_sub(pool.bonus_point)
            .and_then(|total| total.checked_add(bonus_point))
            .ok_or(ChefError::ArithmeticOverflow)?;

        pool.bonus_point = bonus_point;
        storage::set_pool(&env, pool_id, &pool);
        storage::set_total_bonus_point(&env, total);
        extend_instance_ttl(&env);

        events::publish_pool_weight(
            &env,
            PoolWeightEvent {
                pool_id,
                alloc_point: pool.alloc_point,
                bonus_point,
            },
        );

        log!(&env, "Pool {} bonus weight set to {}", pool_id, bonus_point);

        Ok(())
    }

    /// Settle one pool to the current block. Safe to call any number of times.
    pub fn update_pool(env: Env, pool_id: u32) -> Result<PoolInfo, ChefError> {
        let config = storage::get_config(&env)?;
        let pool = pool::update_pool(&env, &config, pool_id)?;
        extend_instance_ttl(&env);
        Ok(pool)
    }

    pub fn mass_update_pools(env: Env) -> Result<(), ChefError> {
        let config = storage::get_config(&env)?;
        pool::mass_update_pools(&env, &config)?;
        extend_instance_ttl(&env);
        Ok(())
    }

    /// Change the per-block emission (owner only). Every pool is settled at the
    /// old rate first.
    pub fn set_reward_per_block(
        env: Env,
        caller: Address,
        reward_per_block: i128,
    ) -> Result<(), ChefError> {
        let mut config = storage::get_config(&env)?;
        access::require_role(&env, &config, &caller, Role::Owner)?;

        if !validate_non_negative(reward_per_block) {
            return Err(ChefError::InvalidAmount);
        }

        pool::mass_update_pools(&env, &config)?;

        let old_rate = config.reward_per_block;
        config.reward_per_block = reward_per_block;
        storage::set_config(&env, &config);
        extend_instance_ttl(&env);

        events::publish_reward_rate(
            &env,
            RewardRateEvent {
                old_rate,
                new_rate: reward_per_block,
            },
        );

        log!(&env, "Reward per block updated from {} to {}", old_rate, reward_per_block);

        Ok(())
    }

    // ========== Bonus Registry ==========

    /// Register a bonus asset (owner only). Returns the new bonus id.
    pub fn add_bonus(env: Env, caller: Address, bonus_token: Address) -> Result<u32, ChefError> {
        let config = storage::get_config(&env)?;
        access::require_role(&env, &config, &caller, Role::Owner)?;

        if storage::has_bonus_token(&env, &bonus_token) {
            return Err(ChefError::DuplicateBonus);
        }

        let bonus_id = storage::get_bonus_count(&env);
        if bonus_id >= MAX_BONUSES {
            return Err(ChefError::BonusLimitReached);
        }

        storage::set_bonus(
            &env,
            bonus_id,
            &BonusInfo {
                bonus_token: bonus_token.clone(),
                total_injected: 0,
                undistributed: 0,
            },
        );
        storage::set_bonus_token(&env, &bonus_token, bonus_id);
        storage::set_bonus_count(&env, bonus_id + 1);
        extend_instance_ttl(&env);

        events::publish_bonus_added(
            &env,
            BonusAddedEvent {
                bonus_id,
                bonus_token: bonus_token.clone(),
            },
        );

        log!(&env, "Bonus {} registered for {}", bonus_id, bonus_token);

        Ok(bonus_id)
    }

    /// Pull `amount` of a bonus asset from the caller and credit it pro-rata to
    /// stakers of bonus-weighted pools (owner or bonus operator). Returns the
    /// amount credited to stakers.
    pub fn update_bonus(
        env: Env,
        caller: Address,
        bonus_id: u32,
        amount: i128,
    ) -> Result<i128, ChefError> {
        let config = storage::get_config(&env)?;
        access::require_role(&env, &config, &caller, Role::BonusOperator)?;

        if amount < 0 {
            return Err(ChefError::InvalidAmount);
        }

        let mut bonus = storage::get_bonus(&env, bonus_id)?;
        let bonus_token = token::Client::new(&env, &bonus.bonus_token);
        let this = env.current_contract_address();
        check_can_pull(&bonus_token, &caller, &this, amount)?;

        pool::mass_update_pools(&env, &config)?;

        let credited = bonus::distribute(&env, bonus_id, &mut bonus, amount)?;
        storage::set_bonus(&env, bonus_id, &bonus);
        extend_instance_ttl(&env);

        if amount > 0 {
            bonus_token.transfer_from(&this, &caller, &this, &amount);
        }

        events::publish_bonus_injected(
            &env,
            BonusInjectedEvent {
                bonus_id,
                amount,
                distributed: credited,
                undistributed: bonus.undistributed,
            },
        );

        log!(&env, "Bonus {} injected {}, credited {}, held {}", bonus_id, amount, credited, bonus.undistributed);

        Ok(credited)
    }

    // ========== Staking ==========

    /// Stake `amount` into a pool, harvesting pending reward and bonuses.
    /// A zero amount only harvests. A referrer is only taken when the position
    /// is new, and the first one recorded for an account is permanent.
    pub fn deposit(
        env: Env,
        user: Address,
        pool_id: u32,
        amount: i128,
        referrer: Option<Address>,
    ) -> Result<(), ChefError> {
        user.require_auth();

        if amount < 0 {
            return Err(ChefError::InvalidAmount);
        }

        let config = storage::get_config(&env)?;
        let is_new_position = !storage::has_user(&env, pool_id, &user);
        let mut pool = pool::update_pool(&env, &config, pool_id)?;

        if is_new_position {
            if let Some(referrer) = referrer {
                record_referrer(&env, &user, &referrer);
            }
        }

        let staked_token = token::Client::new(&env, &pool.staked_token);
        let this = env.current_contract_address();
        check_can_pull(&staked_token, &user, &this, amount)?;

        let mut position = storage::get_user(&env, pool_id, &user);
        let old_amount = position.amount;
        let pending = pool::pending_of(&position, pool.acc_reward_per_share)?;

        position.amount = old_amount
            .checked_add(amount)
            .ok_or(ChefError::ArithmeticOverflow)?;
        position.reward_debt = scaled_mul(position.amount, pool.acc_reward_per_share)?;
        pool.total_staked = pool
            .total_staked
            .checked_add(amount)
            .ok_or(ChefError::ArithmeticOverflow)?;

        storage::set_user(&env, pool_id, &user, &position);
        storage::set_pool(&env, pool_id, &pool);
        let bonus_payouts = bonus::settle(&env, pool_id, &user, old_amount, position.amount)?;
        let reward = fees::settle_reward(&env, &config, &user, pending)?;
        extend_instance_ttl(&env);

        if amount > 0 {
            staked_token.transfer_from(&this, &user, &this, &amount);
        }
        pay_out(&env, &config, &user, reward, &bonus_payouts);

        events::publish_deposit(
            &env,
            DepositEvent {
                user: user.clone(),
                pool_id,
                amount,
                reward,
                block: env.ledger().sequence(),
            },
        );

        log!(&env, "User {} deposited {} into pool {}, harvested {}", user, amount, pool_id, reward);

        Ok(())
    }

    /// Unstake `amount` from a pool, harvesting pending reward and bonuses.
    /// A zero amount only harvests.
    pub fn withdraw(env: Env, user: Address, pool_id: u32, amount: i128) -> Result<(), ChefError> {
        user.require_auth();

        if amount < 0 {
            return Err(ChefError::InvalidAmount);
        }

        let config = storage::get_config(&env)?;
        storage::get_pool(&env, pool_id)?;
        let mut position = storage::get_user(&env, pool_id, &user);
        if amount > position.amount {
            return Err(ChefError::InsufficientStake);
        }

        let mut pool = pool::update_pool(&env, &config, pool_id)?;
        let old_amount = position.amount;
        let pending = pool::pending_of(&position, pool.acc_reward_per_share)?;

        position.amount = old_amount - amount;
        position.reward_debt = scaled_mul(position.amount, pool.acc_reward_per_share)?;
        pool.total_staked -= amount;

        storage::set_user(&env, pool_id, &user, &position);
        storage::set_pool(&env, pool_id, &pool);
        let bonus_payouts = bonus::settle(&env, pool_id, &user, old_amount, position.amount)?;
        let reward = fees::settle_reward(&env, &config, &user, pending)?;
        extend_instance_ttl(&env);

        if amount > 0 {
            let this = env.current_contract_address();
            token::Client::new(&env, &pool.staked_token).transfer(&this, &user, &amount);
        }
        pay_out(&env, &config, &user, reward, &bonus_payouts);

        events::publish_withdraw(
            &env,
            WithdrawEvent {
                user: user.clone(),
                pool_id,
                amount,
                reward,
                block: env.ledger().sequence(),
            },
        );

        log!(&env, "User {} withdrew {} from pool {}, harvested {}", user, amount, pool_id, reward);

        Ok(())
    }

    /// Return the whole stake without settling. Pending reward and bonuses
    /// are forfeited.
    pub fn emergency_withdraw(env: Env, user: Address, pool_id: u32) -> Result<i128, ChefError> {
        user.require_auth();

        let mut pool = storage::get_pool(&env, pool_id)?;
        let position = storage::get_user(&env, pool_id, &user);
        let amount = position.amount;

        pool.total_staked -= amount;
        storage::set_pool(&env, pool_id, &pool);
        storage::set_user(&env, pool_id, &user, &UserInfo::default());
        bonus::forfeit(&env, pool_id, &user);
        extend_instance_ttl(&env);

        if amount > 0 {
            let this = env.current_contract_address();
            token::Client::new(&env, &pool.staked_token).transfer(&this, &user, &amount);
        }

        events::publish_emergency_withdraw(
            &env,
            EmergencyWithdrawEvent {
                user: user.clone(),
                pool_id,
                amount,
            },
        );

        log!(&env, "User {} emergency withdrew {} from pool {}", user, amount, pool_id);

        Ok(amount)
    }

    // ========== Fees ==========

    /// Release the unlocked developer and referral-pool fees (owner or fee
    /// admin). Returns `(dev_amount, ref_amount)`.
    pub fn withdraw_dev_fee(env: Env, caller: Address) -> Result<(i128, i128), ChefError> {
        let config = storage::get_config(&env)?;
        access::require_role(&env, &config, &caller, Role::FeeAdmin)?;

        let current = env.ledger().sequence();
        let rate = fees::unlocked_rate(&config, current)?;

        let mut dev = storage::get_dev_fee(&env);
        let mut ref_pool = storage::get_ref_pool_fee(&env);
        let dev_amount = fees::release(&mut dev, rate)?;
        let ref_amount = fees::release(&mut ref_pool, rate)?;
        storage::set_dev_fee(&env, &dev);
        storage::set_ref_pool_fee(&env, &ref_pool);
        extend_instance_ttl(&env);

        let reward_token = token::Client::new(&env, &config.reward_token);
        let this = env.current_contract_address();
        if dev_amount > 0 {
            reward_token.transfer(&this, &config.dev_address, &dev_amount);
        }
        if ref_amount > 0 {
            reward_token.transfer(&this, &config.ref_fee_address, &ref_amount);
        }

        events::publish_fee_withdrawn(
            &env,
            FeeWithdrawnEvent {
                dev_amount,
                ref_amount,
                release_rate: rate,
                block: current,
            },
        );

        log!(&env, "Fees withdrawn at block {}: dev {}, referral pool {}", current, dev_amount, ref_amount);

        Ok((dev_amount, ref_amount))
    }

    /// Release a referrer's unlocked referral fees to the referrer.
    pub fn claim_referral_fee(env: Env, referrer: Address) -> Result<i128, ChefError> {
        referrer.require_auth();

        let config = storage::get_config(&env)?;
        let rate = fees::unlocked_rate(&config, env.ledger().sequence())?;

        let mut balance = storage::get_referral_fee(&env, &referrer);
        let amount = fees::release(&mut balance, rate)?;
        storage::set_referral_fee(&env, &referrer, &balance);
        extend_instance_ttl(&env);

        if amount > 0 {
            let this = env.current_contract_address();
            token::Client::new(&env, &config.reward_token).transfer(&this, &referrer, &amount);
        }

        events::publish_referral_claimed(
            &env,
            ReferralClaimedEvent {
                referrer: referrer.clone(),
                amount,
            },
        );

        log!(&env, "Referrer {} claimed {} in fees", referrer, amount);

        Ok(amount)
    }

    /// Move the developer fee destination. Only the current developer may call.
    pub fn set_dev_address(env: Env, caller: Address, new_dev: Address) -> Result<(), ChefError> {
        caller.require_auth();

        let mut config = storage::get_config(&env)?;
        if config.dev_address != caller {
            return Err(ChefError::Unauthorized);
        }

        config.dev_address = new_dev.clone();
        storage::set_config(&env, &config);
        extend_instance_ttl(&env);

        events::publish_dev_address(&env, caller, new_dev.clone());

        log!(&env, "Developer address set to: {}", new_dev);

        Ok(())
    }

    // ========== Access Control ==========

    pub fn grant_role(
        env: Env,
        caller: Address,
        role: Role,
        account: Address,
    ) -> Result<(), ChefError> {
        Self::change_role(&env, &caller, role, &account, true)
    }

    pub fn revoke_role(
        env: Env,
        caller: Address,
        role: Role,
        account: Address,
    ) -> Result<(), ChefError> {
        Self::change_role(&env, &caller, role, &account, false)
    }

    pub fn is_authorized(env: Env, caller: Address, role: Role) -> Result<bool, ChefError> {
        let config = storage::get_config(&env)?;
        Ok(access::is_authorized(&env, &config, &caller, &role))
    }

    // ========== Views ==========

    pub fn pool_length(env: Env) -> u32 {
        storage::get_pool_count(&env)
    }

    pub fn bonus_length(env: Env) -> u32 {
        storage::get_bonus_count(&env)
    }

    pub fn pool_info(env: Env, pool_id: u32) -> Result<PoolInfo, ChefError> {
        storage::get_pool(&env, pool_id)
    }

    pub fn bonus_info(env: Env, bonus_id: u32) -> Result<BonusInfo, ChefError> {
        storage::get_bonus(&env, bonus_id)
    }

    pub fn pool_bonus_per_share(env: Env, pool_id: u32, bonus_id: u32) -> i128 {
        storage::get_pool_bonus_acc(&env, pool_id, bonus_id)
    }

    pub fn user_info(env: Env, pool_id: u32, user: Address) -> UserInfo {
        storage::get_user(&env, pool_id, &user)
    }

    pub fn user_bonus_debt(env: Env, pool_id: u32, bonus_id: u32, user: Address) -> i128 {
        storage::get_user_bonus_debt(&env, pool_id, bonus_id, &user)
    }

    /// Gross reward a user would harvest now, before fees.
    pub fn pending_reward(env: Env, pool_id: u32, user: Address) -> Result<i128, ChefError> {
        let config = storage::get_config(&env)?;
        let pool = storage::get_pool(&env, pool_id)?;
        let acc = pool::projected_acc_reward_per_share(&env, &config, &pool)?;
        pool::pending_of(&storage::get_user(&env, pool_id, &user), acc)
    }

    /// Pending amount of every bonus stream, indexed by bonus id.
    pub fn pending_bonus(env: Env, pool_id: u32, user: Address) -> Result<Vec<i128>, ChefError> {
        storage::get_pool(&env, pool_id)?;
        bonus::pending(&env, pool_id, &user)
    }

    pub fn total_alloc_point(env: Env) -> i128 {
        storage::get_total_alloc_point(&env)
    }

    pub fn total_bonus_point(env: Env) -> i128 {
        storage::get_total_bonus_point(&env)
    }

    pub fn start_block(env: Env) -> Result<u32, ChefError> {
        Ok(storage::get_config(&env)?.start_block)
    }

    pub fn reward_per_block(env: Env) -> Result<i128, ChefError> {
        Ok(storage::get_config(&env)?.reward_per_block)
    }

    /// Total emission over blocks `[from, to)` across all pools.
    pub fn emission_between(env: Env, from: u32, to: u32) -> Result<i128, ChefError> {
        let config = storage::get_config(&env)?;
        pool::emission_between(&config, from, to)
    }

    pub fn get_config(env: Env) -> Result<ChefConfig, ChefError> {
        storage::get_config(&env)
    }

    pub fn referrer_of(env: Env, user: Address) -> Option<Address> {
        storage::get_referrer(&env, &user)
    }

    pub fn dev_fee_balance(env: Env) -> FeeBalance {
        storage::get_dev_fee(&env)
    }

    pub fn ref_pool_fee_balance(env: Env) -> FeeBalance {
        storage::get_ref_pool_fee(&env)
    }

    pub fn referral_fee_balance(env: Env, referrer: Address) -> FeeBalance {
        storage::get_referral_fee(&env, &referrer)
    }

    // Internal helper functions
    fn change_role(
        env: &Env,
        caller: &Address,
        role: Role,
        account: &Address,
        granted: bool,
    ) -> Result<(), ChefError> {
        let config = storage::get_config(env)?;
        access::require_role(env, &config, caller, Role::Owner)?;

        // Ownership is fixed at initialization
        if role == Role::Owner {
            return Err(ChefError::InvalidConfiguration);
        }

        storage::set_role(env, &role, account, granted);
        extend_instance_ttl(env);

        events::publish_role(
            env,
            RoleEvent {
                role,
                account: account.clone(),
                granted,
            },
        );

        log!(env, "Role change for {}: granted = {}", account, granted);

        Ok(())
    }
}

fn validate_weight(weight: i128) -> Result<(), ChefError> {
    if !(0..=MAX_WEIGHT).contains(&weight) {
        return Err(ChefError::InvalidWeight);
    }
    Ok(())
}

/// First write wins across pools; self-referral is ignored.
fn record_referrer(env: &Env, user: &Address, referrer: &Address) {
    if referrer == user || storage::get_referrer(env, user).is_some() {
        return;
    }
    storage::set_referrer(env, user, referrer);

    events::publish_referral(
        env,
        ReferralEvent {
            user: user.clone(),
            referrer: referrer.clone(),
        },
    );

    log!(env, "Referrer {} recorded for {}", referrer, user);
}

/// Surface the collaborator's shortfall before attempting `transfer_from`.
fn check_can_pull(
    token: &token::Client,
    from: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), ChefError> {
    if amount == 0 {
        return Ok(());
    }
    if token.balance(from) < amount {
        return Err(ChefError::InsufficientBalance);
    }
    if token.allowance(from, spender) < amount {
        return Err(ChefError::InsufficientApproval);
    }
    Ok(())
}

fn pay_out(
    env: &Env,
    config: &ChefConfig,
    user: &Address,
    reward: i128,
    bonus_payouts: &Vec<(Address, i128)>,
) {
    let this = env.current_contract_address();
    if reward > 0 {
        token::Client::new(env, &config.reward_token).transfer(&this, user, &reward);
    }
    for (bonus_token, amount) in bonus_payouts.iter() {
        token::Client::new(env, &bonus_token).transfer(&this, user, &amount);
    }
}

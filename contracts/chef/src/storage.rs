use lcfarm_shared::{BALANCE_BUMP_AMOUNT, BALANCE_LIFETIME_THRESHOLD};
use soroban_sdk::{contracttype, Address, Env};

use crate::error::ChefError;
use crate::types::{BonusInfo, ChefConfig, FeeBalance, PoolInfo, Role, UserInfo};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserKey {
    pub pool_id: u32,
    pub user: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolBonusKey {
    pub pool_id: u32,
    pub bonus_id: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserBonusKey {
    pub pool_id: u32,
    pub bonus_id: u32,
    pub user: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleKey {
    pub role: Role,
    pub account: Address,
}

// Storage Keys
#[contracttype]
pub enum DataKey {
    Config,
    TotalAllocPoint,
    TotalBonusPoint,
    PoolCount,
    BonusCount,
    DevFee,
    RefPoolFee,
    Pool(u32),
    Bonus(u32),
    BonusToken(Address),
    PoolBonusAcc(PoolBonusKey),
    User(UserKey),
    UserBonusDebt(UserBonusKey),
    Referrer(Address),
    ReferralFee(Address),
    Role(RoleKey),
}

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

// ========== Config ==========

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<ChefConfig, ChefError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(ChefError::NotInitialized)
}

pub fn set_config(env: &Env, config: &ChefConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

// ========== Global weights and counters ==========

pub fn get_total_alloc_point(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalAllocPoint)
        .unwrap_or(0)
}

pub fn set_total_alloc_point(env: &Env, total: i128) {
    env.storage().instance().set(&DataKey::TotalAllocPoint, &total);
}

pub fn get_total_bonus_point(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalBonusPoint)
        .unwrap_or(0)
}

pub fn set_total_bonus_point(env: &Env, total: i128) {
    env.storage().instance().set(&DataKey::TotalBonusPoint, &total);
}

pub fn get_pool_count(env: &Env) -> u32 {
    env.storage().instance().get(&DataKey::PoolCount).unwrap_or(0)
}

pub fn set_pool_count(env: &Env, count: u32) {
    env.storage().instance().set(&DataKey::PoolCount, &count);
}

pub fn get_bonus_count(env: &Env) -> u32 {
    env.storage().instance().get(&DataKey::BonusCount).unwrap_or(0)
}

pub fn set_bonus_count(env: &Env, count: u32) {
    env.storage().instance().set(&DataKey::BonusCount, &count);
}

// ========== Pools ==========

pub fn get_pool(env: &Env, pool_id: u32) -> Result<PoolInfo, ChefError> {
    env.storage()
        .persistent()
        .get(&DataKey::Pool(pool_id))
        .ok_or(ChefError::PoolNotFound)
}

pub fn set_pool(env: &Env, pool_id: u32, pool: &PoolInfo) {
    let key = DataKey::Pool(pool_id);
    env.storage().persistent().set(&key, pool);
    bump_persistent(env, &key);
}

// ========== Bonuses ==========

pub fn get_bonus(env: &Env, bonus_id: u32) -> Result<BonusInfo, ChefError> {
    env.storage()
        .persistent()
        .get(&DataKey::Bonus(bonus_id))
        .ok_or(ChefError::BonusNotFound)
}

pub fn set_bonus(env: &Env, bonus_id: u32, bonus: &BonusInfo) {
    let key = DataKey::Bonus(bonus_id);
    env.storage().persistent().set(&key, bonus);
    bump_persistent(env, &key);
}

pub fn has_bonus_token(env: &Env, token: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::BonusToken(token.clone()))
}

pub fn set_bonus_token(env: &Env, token: &Address, bonus_id: u32) {
    let key = DataKey::BonusToken(token.clone());
    env.storage().persistent().set(&key, &bonus_id);
    bump_persistent(env, &key);
}

pub fn get_pool_bonus_acc(env: &Env, pool_id: u32, bonus_id: u32) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::PoolBonusAcc(PoolBonusKey { pool_id, bonus_id }))
        .unwrap_or(0)
}

pub fn set_pool_bonus_acc(env: &Env, pool_id: u32, bonus_id: u32, acc: i128) {
    let key = DataKey::PoolBonusAcc(PoolBonusKey { pool_id, bonus_id });
    env.storage().persistent().set(&key, &acc);
    bump_persistent(env, &key);
}

// ========== User ledger ==========

pub fn get_user(env: &Env, pool_id: u32, user: &Address) -> UserInfo {
    env.storage()
        .persistent()
        .get(&DataKey::User(UserKey {
            pool_id,
            user: user.clone(),
        }))
        .unwrap_or_default()
}

pub fn has_user(env: &Env, pool_id: u32, user: &Address) -> bool {
    env.storage().persistent().has(&DataKey::User(UserKey {
        pool_id,
        user: user.clone(),
    }))
}

pub fn set_user(env: &Env, pool_id: u32, user: &Address, info: &UserInfo) {
    let key = DataKey::User(UserKey {
        pool_id,
        user: user.clone(),
    });
    env.storage().persistent().set(&key, info);
    bump_persistent(env, &key);
}

pub fn get_user_bonus_debt(env: &Env, pool_id: u32, bonus_id: u32, user: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::UserBonusDebt(UserBonusKey {
            pool_id,
            bonus_id,
            user: user.clone(),
        }))
        .unwrap_or(0)
}

pub fn set_user_bonus_debt(env: &Env, pool_id: u32, bonus_id: u32, user: &Address, debt: i128) {
    let key = DataKey::UserBonusDebt(UserBonusKey {
        pool_id,
        bonus_id,
        user: user.clone(),
    });
    env.storage().persistent().set(&key, &debt);
    bump_persistent(env, &key);
}

// ========== Referrals ==========

pub fn get_referrer(env: &Env, user: &Address) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::Referrer(user.clone()))
}

pub fn set_referrer(env: &Env, user: &Address, referrer: &Address) {
    let key = DataKey::Referrer(user.clone());
    env.storage().persistent().set(&key, referrer);
    bump_persistent(env, &key);
}

// ========== Fee balances ==========

pub fn get_dev_fee(env: &Env) -> FeeBalance {
    env.storage()
        .instance()
        .get(&DataKey::DevFee)
        .unwrap_or_default()
}

pub fn set_dev_fee(env: &Env, balance: &FeeBalance) {
    env.storage().instance().set(&DataKey::DevFee, balance);
}

pub fn get_ref_pool_fee(env: &Env) -> FeeBalance {
    env.storage()
        .instance()
        .get(&DataKey::RefPoolFee)
        .unwrap_or_default()
}

pub fn set_ref_pool_fee(env: &Env, balance: &FeeBalance) {
    env.storage().instance().set(&DataKey::RefPoolFee, balance);
}

pub fn get_referral_fee(env: &Env, referrer: &Address) -> FeeBalance {
    env.storage()
        .persistent()
        .get(&DataKey::ReferralFee(referrer.clone()))
        .unwrap_or_default()
}

pub fn set_referral_fee(env: &Env, referrer: &Address, balance: &FeeBalance) {
    let key = DataKey::ReferralFee(referrer.clone());
    env.storage().persistent().set(&key, balance);
    bump_persistent(env, &key);
}

// ========== Roles ==========

pub fn has_role(env: &Env, role: &Role, account: &Address) -> bool {
    env.storage().persistent().has(&DataKey::Role(RoleKey {
        role: role.clone(),
        account: account.clone(),
    }))
}

pub fn set_role(env: &Env, role: &Role, account: &Address, granted: bool) {
    let key = DataKey::Role(RoleKey {
        role: role.clone(),
        account: account.clone(),
    });
    if granted {
        env.storage().persistent().set(&key, &true);
        bump_persistent(env, &key);
    } else {
        env.storage().persistent().remove(&key);
    }
}

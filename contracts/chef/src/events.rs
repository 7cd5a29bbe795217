use soroban_sdk::{contracttype, symbol_short, Address, Env};

use crate::types::Role;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositEvent {
    pub user: Address,
    pub pool_id: u32,
    pub amount: i128,
    pub reward: i128,
    pub block: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawEvent {
    pub user: Address,
    pub pool_id: u32,
    pub amount: i128,
    pub reward: i128,
    pub block: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmergencyWithdrawEvent {
    pub user: Address,
    pub pool_id: u32,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolAddedEvent {
    pub pool_id: u32,
    pub staked_token: Address,
    pub alloc_point: i128,
    pub bonus_point: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolWeightEvent {
    pub pool_id: u32,
    pub alloc_point: i128,
    pub bonus_point: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BonusAddedEvent {
    pub bonus_id: u32,
    pub bonus_token: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BonusInjectedEvent {
    pub bonus_id: u32,
    pub amount: i128,
    pub distributed: i128,
    pub undistributed: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeWithdrawnEvent {
    pub dev_amount: i128,
    pub ref_amount: i128,
    pub release_rate: u32,
    pub block: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReferralEvent {
    pub user: Address,
    pub referrer: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReferralClaimedEvent {
    pub referrer: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardRateEvent {
    pub old_rate: i128,
    pub new_rate: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleEvent {
    pub role: Role,
    pub account: Address,
    pub granted: bool,
}

pub fn publish_deposit(env: &Env, event: DepositEvent) {
    env.events().publish((symbol_short!("deposit"),), event);
}

pub fn publish_withdraw(env: &Env, event: WithdrawEvent) {
    env.events().publish((symbol_short!("withdraw"),), event);
}

pub fn publish_emergency_withdraw(env: &Env, event: EmergencyWithdrawEvent) {
    env.events().publish((symbol_short!("emergency"),), event);
}

pub fn publish_pool_added(env: &Env, event: PoolAddedEvent) {
    env.events().publish((symbol_short!("pool_add"),), event);
}

pub fn publish_pool_weight(env: &Env, event: PoolWeightEvent) {
    env.events().publish((symbol_short!("pool_set"),), event);
}

pub fn publish_bonus_added(env: &Env, event: BonusAddedEvent) {
    env.events().publish((symbol_short!("bonus_add"),), event);
}

pub fn publish_bonus_injected(env: &Env, event: BonusInjectedEvent) {
    env.events().publish((symbol_short!("bonus_inj"),), event);
}

pub fn publish_fee_withdrawn(env: &Env, event: FeeWithdrawnEvent) {
    env.events().publish((symbol_short!("fee_wd"),), event);
}

pub fn publish_referral(env: &Env, event: ReferralEvent) {
    env.events().publish((symbol_short!("referral"),), event);
}

pub fn publish_referral_claimed(env: &Env, event: ReferralClaimedEvent) {
    env.events().publish((symbol_short!("ref_claim"),), event);
}

pub fn publish_reward_rate(env: &Env, event: RewardRateEvent) {
    env.events().publish((symbol_short!("rate"),), event);
}

pub fn publish_role(env: &Env, event: RoleEvent) {
    env.events().publish((symbol_short!("role"),), event);
}

pub fn publish_dev_address(env: &Env, old: Address, new: Address) {
    env.events().publish((symbol_short!("dev_addr"),), (old, new));
}

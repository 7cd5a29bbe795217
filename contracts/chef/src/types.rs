use soroban_sdk::{contracttype, Address, Vec};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Role {
    Owner,
    FeeAdmin,
    BonusOperator,
}

/// One step of the fee release schedule. `unlock_after` counts blocks from
/// the start block; `release_rate` is the cumulative share (parts per million)
/// withdrawable once the step opens.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeLockTier {
    pub unlock_after: u32,
    pub release_rate: u32,
}

/// Deployment parameters passed to `initialize`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ChefParams {
    pub reward_per_block: i128,
    pub start_block: u32,
    pub halving_period: u32, // 0 disables halving
    pub dev_fee_rate: u32,   // Parts per million of each harvested reward
    pub ref_fee_rate: u32,   // Parts per million of each harvested reward
    pub fee_lock_tiers: Vec<FeeLockTier>,
    pub max_pools: u32, // 0 selects the default cap
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ChefConfig {
    pub owner: Address,
    pub reward_token: Address,
    pub dev_address: Address,
    pub ref_fee_address: Address,
    pub reward_per_block: i128,
    pub start_block: u32,
    pub halving_period: u32,
    pub dev_fee_rate: u32,
    pub ref_fee_rate: u32,
    pub fee_lock_tiers: Vec<FeeLockTier>,
    pub max_pools: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolInfo {
    pub staked_token: Address,
    pub alloc_point: i128,
    pub bonus_point: i128,
    pub last_reward_block: u32,
    pub acc_reward_per_share: i128, // Scaled by ACC_PRECISION
    pub total_staked: i128,
    pub reward_minted: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BonusInfo {
    pub bonus_token: Address,
    pub total_injected: i128,
    pub undistributed: i128, // Held until a bonus-eligible pool has stakers
}

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UserInfo {
    pub amount: i128,
    pub reward_debt: i128,
}

/// Lifetime fee owed to one beneficiary and how much of it was released.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FeeBalance {
    pub accrued: i128,
    pub paid: i128,
}

impl FeeBalance {
    pub fn outstanding(&self) -> i128 {
        self.accrued - self.paid
    }
}

//! Pool accumulator settlement and the block emission schedule.

use lcfarm_shared::{mul_div, scaled_div, scaled_mul};
use soroban_sdk::{contractclient, Address, Env};

use crate::error::ChefError;
use crate::storage;
use crate::types::{ChefConfig, PoolInfo, UserInfo};

/// Minting capability of the LC token; the chef must be on its minter allowlist.
#[allow(dead_code)]
#[contractclient(name = "MintClient")]
pub trait MintInterface {
    fn mint(env: Env, minter: Address, to: Address, amount: i128);
}

/// Reward emitted over blocks `[from, to)`. The per-block rate halves every
/// `halving_period` blocks counted from the start block.
pub fn emission_between(config: &ChefConfig, from: u32, to: u32) -> Result<i128, ChefError> {
    let from = from.max(config.start_block);
    if to <= from {
        return Ok(0);
    }

    if config.halving_period == 0 {
        return config
            .reward_per_block
            .checked_mul((to - from) as i128)
            .ok_or(ChefError::ArithmeticOverflow);
    }

    let mut total: i128 = 0;
    let mut cursor = from;
    while cursor < to {
        let epoch = (cursor - config.start_block) / config.halving_period;
        if epoch >= 127 {
            break;
        }
        let rate = config.reward_per_block >> epoch;
        if rate == 0 {
            break;
        }

        let epoch_end = config
            .start_block
            .saturating_add((epoch + 1).saturating_mul(config.halving_period));
        let segment_end = epoch_end.min(to);
        let segment = rate
            .checked_mul((segment_end - cursor) as i128)
            .ok_or(ChefError::ArithmeticOverflow)?;
        total = total
            .checked_add(segment)
            .ok_or(ChefError::ArithmeticOverflow)?;
        cursor = segment_end;
    }

    Ok(total)
}

/// This pool's weighted share of emission since its last settlement.
fn pool_reward(
    config: &ChefConfig,
    pool: &PoolInfo,
    total_alloc_point: i128,
    current: u32,
) -> Result<i128, ChefError> {
    if pool.total_staked == 0 || pool.alloc_point == 0 || total_alloc_point == 0 {
        return Ok(0);
    }
    let emitted = emission_between(config, pool.last_reward_block, current)?;
    Ok(mul_div(emitted, pool.alloc_point, total_alloc_point)?)
}

/// Bring a pool's accumulator current, minting its reward into custody.
/// An empty pool only advances `last_reward_block`.
pub fn update_pool(env: &Env, config: &ChefConfig, pool_id: u32) -> Result<PoolInfo, ChefError> {
    let mut pool = storage::get_pool(env, pool_id)?;
    let current = env.ledger().sequence();
    if current <= pool.last_reward_block {
        return Ok(pool);
    }

    let reward = pool_reward(config, &pool, storage::get_total_alloc_point(env), current)?;
    if reward > 0 {
        let per_share = scaled_div(reward, pool.total_staked)?;
        pool.acc_reward_per_share = pool
            .acc_reward_per_share
            .checked_add(per_share)
            .ok_or(ChefError::ArithmeticOverflow)?;
        pool.reward_minted = pool
            .reward_minted
            .checked_add(reward)
            .ok_or(ChefError::ArithmeticOverflow)?;
    }
    pool.last_reward_block = current;
    storage::set_pool(env, pool_id, &pool);

    if reward > 0 {
        mint_to_custody(env, config, reward)?;
    }

    Ok(pool)
}

pub fn mass_update_pools(env: &Env, config: &ChefConfig) -> Result<(), ChefError> {
    for pool_id in 0..storage::get_pool_count(env) {
        update_pool(env, config, pool_id)?;
    }
    Ok(())
}

/// Accumulator value `update_pool` would produce at the current block.
pub fn projected_acc_reward_per_share(
    env: &Env,
    config: &ChefConfig,
    pool: &PoolInfo,
) -> Result<i128, ChefError> {
    let current = env.ledger().sequence();
    if current <= pool.last_reward_block {
        return Ok(pool.acc_reward_per_share);
    }

    let reward = pool_reward(config, pool, storage::get_total_alloc_point(env), current)?;
    if reward == 0 {
        return Ok(pool.acc_reward_per_share);
    }
    pool.acc_reward_per_share
        .checked_add(scaled_div(reward, pool.total_staked)?)
        .ok_or(ChefError::ArithmeticOverflow)
}

/// Reward earned by a position since its last settlement.
pub fn pending_of(position: &UserInfo, acc_reward_per_share: i128) -> Result<i128, ChefError> {
    let accumulated = scaled_mul(position.amount, acc_reward_per_share)?;
    // Debt was taken at a lower or equal accumulator, so this never goes negative
    Ok((accumulated - position.reward_debt).max(0))
}

fn mint_to_custody(env: &Env, config: &ChefConfig, amount: i128) -> Result<(), ChefError> {
    let this = env.current_contract_address();
    match MintClient::new(env, &config.reward_token).try_mint(&this, &this, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(ChefError::MintRejected),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use soroban_sdk::{testutils::Address as _, vec, Env};

    fn config(env: &Env, reward_per_block: i128, start_block: u32, halving_period: u32) -> ChefConfig {
        let someone = Address::generate(env);
        ChefConfig {
            owner: someone.clone(),
            reward_token: someone.clone(),
            dev_address: someone.clone(),
            ref_fee_address: someone,
            reward_per_block,
            start_block,
            halving_period,
            dev_fee_rate: 0,
            ref_fee_rate: 0,
            fee_lock_tiers: vec![env],
            max_pools: 1,
        }
    }

    #[test]
    fn test_emission_without_halving() {
        let env = Env::default();
        let config = config(&env, 1000, 100, 0);

        assert_eq!(emission_between(&config, 150, 200).unwrap(), 50_000);
        // Nothing accrues before the start block
        assert_eq!(emission_between(&config, 0, 100).unwrap(), 0);
        assert_eq!(emission_between(&config, 50, 110).unwrap(), 10_000);
        assert_eq!(emission_between(&config, 200, 200).unwrap(), 0);
    }

    #[test]
    fn test_emission_across_halvings() {
        let env = Env::default();
        let config = config(&env, 1000, 100, 10);

        // Blocks 105..110 at 1000, 110..120 at 500, 120..125 at 250
        assert_eq!(emission_between(&config, 105, 125).unwrap(), 5000 + 5000 + 1250);
    }

    #[test]
    fn test_emission_stops_when_rate_halves_to_zero() {
        let env = Env::default();
        let config = config(&env, 4, 0, 1);

        // 4 + 2 + 1, then zero forever
        assert_eq!(emission_between(&config, 0, 1_000_000).unwrap(), 7);
    }

    #[test]
    fn test_pending_of_position() {
        let position = UserInfo {
            amount: 20,
            reward_debt: 10_000,
        };
        assert_eq!(pending_of(&position, 2_500_000_000_000_000).unwrap(), 40_000);
        assert_eq!(pending_of(&UserInfo::default(), 2_500_000_000_000_000).unwrap(), 0);
    }
}

//! Developer/referrer fee split and the tiered fee release schedule.

use lcfarm_shared::{mul_div, validate_rate, RATE_DENOMINATOR};
use soroban_sdk::{Address, Env, Vec};

use crate::error::ChefError;
use crate::storage;
use crate::types::{ChefConfig, FeeBalance, FeeLockTier};

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FeeSplit {
    pub user_share: i128,
    pub dev_fee: i128,
    pub ref_fee: i128,
}

pub fn split_reward(config: &ChefConfig, pending: i128) -> Result<FeeSplit, ChefError> {
    let denominator = RATE_DENOMINATOR as i128;
    let dev_fee = mul_div(pending, config.dev_fee_rate as i128, denominator)?;
    let ref_fee = mul_div(pending, config.ref_fee_rate as i128, denominator)?;
    Ok(FeeSplit {
        user_share: pending - dev_fee - ref_fee,
        dev_fee,
        ref_fee,
    })
}

/// Split a harvested reward and book the fee shares. The referrer share goes to
/// the user's recorded referrer, or to the referral pool when there is none.
/// Returns the part owed to the user.
pub fn settle_reward(
    env: &Env,
    config: &ChefConfig,
    user: &Address,
    pending: i128,
) -> Result<i128, ChefError> {
    if pending <= 0 {
        return Ok(0);
    }
    let split = split_reward(config, pending)?;

    if split.dev_fee > 0 {
        let mut dev = storage::get_dev_fee(env);
        accrue(&mut dev, split.dev_fee)?;
        storage::set_dev_fee(env, &dev);
    }

    if split.ref_fee > 0 {
        match storage::get_referrer(env, user) {
            Some(referrer) => {
                let mut balance = storage::get_referral_fee(env, &referrer);
                accrue(&mut balance, split.ref_fee)?;
                storage::set_referral_fee(env, &referrer, &balance);
            }
            None => {
                let mut pool = storage::get_ref_pool_fee(env);
                accrue(&mut pool, split.ref_fee)?;
                storage::set_ref_pool_fee(env, &pool);
            }
        }
    }

    Ok(split.user_share)
}

fn accrue(balance: &mut FeeBalance, amount: i128) -> Result<(), ChefError> {
    balance.accrued = balance
        .accrued
        .checked_add(amount)
        .ok_or(ChefError::ArithmeticOverflow)?;
    Ok(())
}

/// Tiers must open at strictly increasing offsets, release non-decreasing
/// cumulative fractions, and end fully released.
pub fn validate_tiers(tiers: &Vec<FeeLockTier>) -> bool {
    let mut previous: Option<FeeLockTier> = None;
    for tier in tiers.iter() {
        if !validate_rate(tier.release_rate) {
            return false;
        }
        if let Some(prev) = &previous {
            if tier.unlock_after <= prev.unlock_after || tier.release_rate < prev.release_rate {
                return false;
            }
        }
        previous = Some(tier);
    }
    matches!(previous, Some(last) if last.release_rate == RATE_DENOMINATOR)
}

/// Cumulative fraction of fees withdrawable at `current`.
pub fn unlocked_rate(config: &ChefConfig, current: u32) -> Result<u32, ChefError> {
    let mut rate: Option<u32> = None;
    for tier in config.fee_lock_tiers.iter() {
        let opens_at = config.start_block.saturating_add(tier.unlock_after);
        if current >= opens_at {
            rate = Some(tier.release_rate);
        }
    }
    rate.ok_or(ChefError::StillLocked)
}

/// Release the unlocked part of a balance. A fully unlocked balance is flushed
/// and reset.
pub fn release(balance: &mut FeeBalance, rate: u32) -> Result<i128, ChefError> {
    if rate >= RATE_DENOMINATOR {
        let amount = balance.outstanding();
        *balance = FeeBalance::default();
        return Ok(amount);
    }

    let vested = mul_div(balance.accrued, rate as i128, RATE_DENOMINATOR as i128)?;
    let amount = (vested - balance.paid).max(0);
    balance.paid += amount;
    Ok(amount)
}

#[cfg(test)]
mod test {
    use super::*;
    use soroban_sdk::{testutils::Address as _, vec, Env};

    fn config(env: &Env, tiers: Vec<FeeLockTier>) -> ChefConfig {
        let someone = Address::generate(env);
        ChefConfig {
            owner: someone.clone(),
            reward_token: someone.clone(),
            dev_address: someone.clone(),
            ref_fee_address: someone,
            reward_per_block: 1000,
            start_block: 100,
            halving_period: 0,
            dev_fee_rate: 90_000,
            ref_fee_rate: 10_000,
            fee_lock_tiers: tiers,
            max_pools: 1,
        }
    }

    fn tier(unlock_after: u32, release_rate: u32) -> FeeLockTier {
        FeeLockTier {
            unlock_after,
            release_rate,
        }
    }

    #[test]
    fn test_split_reward() {
        let env = Env::default();
        let config = config(&env, vec![&env, tier(0, RATE_DENOMINATOR)]);

        let split = split_reward(&config, 50_000).unwrap();
        assert_eq!(split.dev_fee, 4_500);
        assert_eq!(split.ref_fee, 500);
        assert_eq!(split.user_share, 45_000);
    }

    #[test]
    fn test_validate_tiers() {
        let env = Env::default();

        assert!(validate_tiers(&vec![&env, tier(100, RATE_DENOMINATOR)]));
        assert!(validate_tiers(&vec![
            &env,
            tier(50, 250_000),
            tier(100, RATE_DENOMINATOR)
        ]));
        // Empty, not fully released, out of order, shrinking
        assert!(!validate_tiers(&vec![&env]));
        assert!(!validate_tiers(&vec![&env, tier(100, 500_000)]));
        assert!(!validate_tiers(&vec![
            &env,
            tier(100, 250_000),
            tier(100, RATE_DENOMINATOR)
        ]));
        assert!(!validate_tiers(&vec![
            &env,
            tier(50, 600_000),
            tier(100, 500_000),
            tier(150, RATE_DENOMINATOR)
        ]));
    }

    #[test]
    fn test_unlocked_rate_follows_tiers() {
        let env = Env::default();
        let config = config(
            &env,
            vec![&env, tier(50, 250_000), tier(100, RATE_DENOMINATOR)],
        );

        assert_eq!(unlocked_rate(&config, 149), Err(ChefError::StillLocked));
        assert_eq!(unlocked_rate(&config, 150), Ok(250_000));
        assert_eq!(unlocked_rate(&config, 199), Ok(250_000));
        assert_eq!(unlocked_rate(&config, 200), Ok(RATE_DENOMINATOR));
    }

    #[test]
    fn test_partial_then_full_release() {
        let mut balance = FeeBalance {
            accrued: 1000,
            paid: 0,
        };

        assert_eq!(release(&mut balance, 250_000).unwrap(), 250);
        // Same tier again releases nothing new
        assert_eq!(release(&mut balance, 250_000).unwrap(), 0);

        balance.accrued += 200;
        assert_eq!(release(&mut balance, 250_000).unwrap(), 50);

        assert_eq!(release(&mut balance, RATE_DENOMINATOR).unwrap(), 900);
        assert_eq!(balance, FeeBalance::default());
    }
}

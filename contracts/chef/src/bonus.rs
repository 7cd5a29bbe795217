//! Externally funded bonus streams layered on top of primary emission.

use lcfarm_shared::{mul_div, scaled_div, scaled_mul};
use soroban_sdk::{Address, Env, Vec};

use crate::error::ChefError;
use crate::storage;
use crate::types::BonusInfo;

/// Pools receiving an injection and their share. Pools split by bonus weight;
/// with no weighted pool the primary pool takes everything.
fn fan_out(env: &Env, distributable: i128) -> Result<Vec<(u32, i128)>, ChefError> {
    let mut targets = Vec::new(env);
    let pool_count = storage::get_pool_count(env);
    if pool_count == 0 {
        return Ok(targets);
    }

    let total_bonus_point = storage::get_total_bonus_point(env);
    if total_bonus_point == 0 {
        targets.push_back((0u32, distributable));
        return Ok(targets);
    }

    for pool_id in 0..pool_count {
        let pool = storage::get_pool(env, pool_id)?;
        if pool.bonus_point > 0 {
            let share = mul_div(distributable, pool.bonus_point, total_bonus_point)?;
            targets.push_back((pool_id, share));
        }
    }
    Ok(targets)
}

/// Credit `amount` plus any held-back balance to eligible pools' accumulators.
/// Shares destined for pools without stakers stay in `undistributed`.
/// Returns the amount credited.
pub fn distribute(
    env: &Env,
    bonus_id: u32,
    bonus: &mut BonusInfo,
    amount: i128,
) -> Result<i128, ChefError> {
    let distributable = amount
        .checked_add(bonus.undistributed)
        .ok_or(ChefError::ArithmeticOverflow)?;

    let mut credited: i128 = 0;
    for (pool_id, share) in fan_out(env, distributable)?.iter() {
        if share <= 0 {
            continue;
        }
        let pool = storage::get_pool(env, pool_id)?;
        if pool.total_staked == 0 {
            continue;
        }

        let acc = storage::get_pool_bonus_acc(env, pool_id, bonus_id)
            .checked_add(scaled_div(share, pool.total_staked)?)
            .ok_or(ChefError::ArithmeticOverflow)?;
        storage::set_pool_bonus_acc(env, pool_id, bonus_id, acc);
        credited += share;
    }

    bonus.total_injected = bonus
        .total_injected
        .checked_add(amount)
        .ok_or(ChefError::ArithmeticOverflow)?;
    bonus.undistributed = distributable - credited;
    Ok(credited)
}

/// Settle every bonus stream of a pool for a position moving from `old_amount`
/// to `new_amount`. Debts are rewritten here; the returned payouts
/// (bonus token, amount) are transferred by the caller afterwards.
pub fn settle(
    env: &Env,
    pool_id: u32,
    user: &Address,
    old_amount: i128,
    new_amount: i128,
) -> Result<Vec<(Address, i128)>, ChefError> {
    let mut payouts = Vec::new(env);
    for bonus_id in 0..storage::get_bonus_count(env) {
        let acc = storage::get_pool_bonus_acc(env, pool_id, bonus_id);
        if acc == 0 {
            continue;
        }

        let debt = storage::get_user_bonus_debt(env, pool_id, bonus_id, user);
        let pending = (scaled_mul(old_amount, acc)? - debt).max(0);
        storage::set_user_bonus_debt(env, pool_id, bonus_id, user, scaled_mul(new_amount, acc)?);

        if pending > 0 {
            let bonus = storage::get_bonus(env, bonus_id)?;
            payouts.push_back((bonus.bonus_token, pending));
        }
    }
    Ok(payouts)
}

/// Zero a position's bonus debts without paying anything out.
pub fn forfeit(env: &Env, pool_id: u32, user: &Address) {
    for bonus_id in 0..storage::get_bonus_count(env) {
        if storage::get_user_bonus_debt(env, pool_id, bonus_id, user) != 0 {
            storage::set_user_bonus_debt(env, pool_id, bonus_id, user, 0);
        }
    }
}

/// Pending amount of every bonus stream, indexed by bonus id.
pub fn pending(env: &Env, pool_id: u32, user: &Address) -> Result<Vec<i128>, ChefError> {
    let amount = storage::get_user(env, pool_id, user).amount;
    let mut result = Vec::new(env);
    for bonus_id in 0..storage::get_bonus_count(env) {
        let acc = storage::get_pool_bonus_acc(env, pool_id, bonus_id);
        let debt = storage::get_user_bonus_debt(env, pool_id, bonus_id, user);
        result.push_back((scaled_mul(amount, acc)? - debt).max(0));
    }
    Ok(result)
}

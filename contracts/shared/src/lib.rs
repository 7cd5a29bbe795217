//! Shared math and constants used across the LC Farm contracts.
//! Keeps the chef and the LC token agreeing on precision and storage lifetimes.
#![no_std]
use soroban_sdk::Env;

pub mod math;

pub use math::{mul_div, scaled_div, scaled_mul, MathError};

// ============================================================================
// Constants
// ============================================================================

/// Fixed-point scale applied to every per-share accumulator
pub const ACC_PRECISION: i128 = 1_000_000_000_000;

/// Denominator for fee rates and lock-tier release fractions (parts per million)
pub const RATE_DENOMINATOR: u32 = 1_000_000;

/// Upper bound on registered bonus entries, each settled on every deposit/withdraw
pub const MAX_BONUSES: u32 = 16;

/// Default cap on registered pools when the deployer passes zero
pub const DEFAULT_MAX_POOLS: u32 = 64;

/// Ledgers closed per day at a ~5 second close time
pub const DAY_IN_LEDGERS: u32 = 17_280;

pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const BALANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const BALANCE_LIFETIME_THRESHOLD: u32 = BALANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

// ============================================================================
// Utility Functions
// ============================================================================

/// Keep the calling contract's instance storage alive
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Validate that a rate is within 0..=100% (parts per million)
pub fn validate_rate(rate: u32) -> bool {
    rate <= RATE_DENOMINATOR
}

/// Validate that an amount is not negative
pub fn validate_non_negative(amount: i128) -> bool {
    amount >= 0
}

//! Checked fixed-point helpers for per-share accumulators.
//!
//! Every helper truncates toward zero, so accruals are never over-credited.
//! Overflow and division by zero surface as [`MathError`] instead of wrapping.

use crate::ACC_PRECISION;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MathError {
    Overflow,
    DivisionByZero,
}

/// `a * b / ACC_PRECISION`, e.g. staked amount times accumulator.
pub fn scaled_mul(a: i128, b: i128) -> Result<i128, MathError> {
    mul_div(a, b, ACC_PRECISION)
}

/// `a * ACC_PRECISION / b`, e.g. reward per unit of staked supply.
pub fn scaled_div(a: i128, b: i128) -> Result<i128, MathError> {
    mul_div(a, ACC_PRECISION, b)
}

/// `a * b / c` with the product checked before the division.
pub fn mul_div(a: i128, b: i128, c: i128) -> Result<i128, MathError> {
    if c == 0 {
        return Err(MathError::DivisionByZero);
    }
    a.checked_mul(b)
        .ok_or(MathError::Overflow)?
        .checked_div(c)
        .ok_or(MathError::Overflow)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_scaled_round_trip_truncates_down() {
        // 50_000 reward over 20 staked
        let per_share = scaled_div(50_000, 20).unwrap();
        assert_eq!(per_share, 2_500_000_000_000_000);
        assert_eq!(scaled_mul(20, per_share).unwrap(), 50_000);

        // 100 over 3 loses the remainder, never gains
        let per_share = scaled_div(100, 3).unwrap();
        assert_eq!(per_share, 33_333_333_333_333);
        assert_eq!(scaled_mul(3, per_share).unwrap(), 99);
    }

    #[test]
    fn test_mul_div_rejects_overflow() {
        assert_eq!(mul_div(i128::MAX, 2, 1), Err(MathError::Overflow));
        assert_eq!(scaled_div(i128::MAX / 2, 1), Err(MathError::Overflow));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(scaled_div(10, 0), Err(MathError::DivisionByZero));
        assert_eq!(mul_div(10, 10, 0), Err(MathError::DivisionByZero));
    }

    #[test]
    fn test_weight_split() {
        // 1000 per block for 50 blocks, pool holds 1000 of 3000 weight
        assert_eq!(mul_div(50_000, 1000, 3000).unwrap(), 16_666);
    }
}

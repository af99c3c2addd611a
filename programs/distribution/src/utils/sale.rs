//! Pure validation rules for sale allocations.

use anchor_lang::prelude::*;

use crate::constants::MAX_BONUS_RATIO_BPS;
use crate::error::DistributionError;

/// Enforces `bonus / purchased <= MAX_BONUS_RATIO_BPS / 10_000`, in
/// integers so the ratio is exact at the boundary.
pub fn check_bonus_ratio(purchased: u64, bonus: u64) -> Result<()> {
    let lhs = (bonus as u128)
        .checked_mul(10_000)
        .ok_or(DistributionError::MathOverflow)?;
    let rhs = (purchased as u128)
        .checked_mul(MAX_BONUS_RATIO_BPS as u128)
        .ok_or(DistributionError::MathOverflow)?;
    require!(lhs <= rhs, DistributionError::BonusRatioExceeded);
    Ok(())
}

/// Returns `purchased + bonus` after checking the supplied funds cover
/// exactly that total.
pub fn checked_sale_total(purchased: u64, bonus: u64, funds: u64) -> Result<u64> {
    let total = purchased
        .checked_add(bonus)
        .ok_or(DistributionError::MathOverflow)?;
    require!(funds == total, DistributionError::ValueMismatch);
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bonus_at_exact_ceiling_passes() {
        // 40% of the purchase, to the unit.
        assert!(check_bonus_ratio(100, 40).is_ok());
        assert!(check_bonus_ratio(1_000_000, 400_000).is_ok());
        assert!(check_bonus_ratio(100, 0).is_ok());
    }

    #[test]
    fn bonus_one_unit_over_ceiling_fails() {
        assert_eq!(
            check_bonus_ratio(100, 41).unwrap_err(),
            Error::from(DistributionError::BonusRatioExceeded)
        );
        assert_eq!(
            check_bonus_ratio(1_000_000, 400_001).unwrap_err(),
            Error::from(DistributionError::BonusRatioExceeded)
        );
    }

    #[test]
    fn bonus_without_purchase_fails() {
        assert_eq!(
            check_bonus_ratio(0, 1).unwrap_err(),
            Error::from(DistributionError::BonusRatioExceeded)
        );
    }

    #[test]
    fn sale_total_requires_exact_funds() {
        assert_eq!(checked_sale_total(100, 35, 135).unwrap(), 135);
        assert_eq!(
            checked_sale_total(100, 35, 134).unwrap_err(),
            Error::from(DistributionError::ValueMismatch)
        );
        assert_eq!(
            checked_sale_total(100, 35, 136).unwrap_err(),
            Error::from(DistributionError::ValueMismatch)
        );
    }

    #[test]
    fn sale_total_overflow_is_rejected() {
        assert_eq!(
            checked_sale_total(u64::MAX, 1, u64::MAX).unwrap_err(),
            Error::from(DistributionError::MathOverflow)
        );
    }
}

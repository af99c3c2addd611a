use anchor_lang::prelude::*;

use crate::error::DistributionError;
use crate::state::Category;
use crate::utils::release;

/// Per-beneficiary vesting record PDA, seeds `[b"vesting", beneficiary]`.
///
/// Two independently vested tracks (balance, bonus) gate on the same
/// `start_ts`. Presence is tracked by the explicit `initialized` flag, never
/// by a sentinel timestamp: a record voided by reassignment stays
/// initialized so the address can never receive a project allocation again.
#[account]
pub struct VestingRecord {
    pub beneficiary: Pubkey,
    pub category: Category,
    /// Set once, at first allocation.
    pub start_ts: i64,
    pub balance_initial: u64,
    pub balance_claimed: u64,
    pub balance_remaining: u64,
    pub bonus_initial: u64,
    pub bonus_claimed: u64,
    pub bonus_remaining: u64,
    /// Terminal once true.
    pub revoked: bool,
    pub initialized: bool,
}

impl VestingRecord {
    pub const SIZE: usize =
        32 + // beneficiary
        1 +  // category
        8 +  // start_ts
        8 * 6 + // amounts
        1 +  // revoked
        1;   // initialized

    /// A record still carrying amounts. Voided records (reassignment
    /// sources) stay initialized but drop to zero on both tracks.
    pub fn is_active(&self) -> bool {
        self.initialized && (self.balance_initial > 0 || self.bonus_initial > 0)
    }

    /// Fully claimed on both tracks; a resting sub-state of Active.
    pub fn is_exhausted(&self) -> bool {
        self.is_active() && self.balance_remaining == 0 && self.bonus_remaining == 0
    }

    /// First allocation onto this record.
    pub fn open(
        &mut self,
        beneficiary: Pubkey,
        category: Category,
        start_ts: i64,
        amount: u64,
        bonus: u64,
    ) {
        self.beneficiary = beneficiary;
        self.category = category;
        self.start_ts = start_ts;
        self.balance_initial = amount;
        self.balance_claimed = 0;
        self.balance_remaining = amount;
        self.bonus_initial = bonus;
        self.bonus_claimed = 0;
        self.bonus_remaining = bonus;
        self.revoked = false;
        self.initialized = true;
    }

    /// Sale categories are additive: later sale allocations of either
    /// variant merge into the one existing record. Project and revoked
    /// records never accumulate.
    pub fn accumulate_sale(&mut self, purchased: u64, bonus: u64) -> Result<()> {
        require!(
            self.category.is_sale(),
            DistributionError::DuplicateAllocation
        );
        require!(!self.revoked, DistributionError::Revoked);

        self.balance_initial = self
            .balance_initial
            .checked_add(purchased)
            .ok_or(DistributionError::MathOverflow)?;
        self.balance_remaining = self
            .balance_remaining
            .checked_add(purchased)
            .ok_or(DistributionError::MathOverflow)?;
        self.bonus_initial = self
            .bonus_initial
            .checked_add(bonus)
            .ok_or(DistributionError::MathOverflow)?;
        self.bonus_remaining = self
            .bonus_remaining
            .checked_add(bonus)
            .ok_or(DistributionError::MathOverflow)?;
        Ok(())
    }

    /// Releasable amounts on (balance, bonus) at `now`, per the category's
    /// floor-period vesting terms.
    pub fn releasable_at(&self, now: i64) -> Result<(u64, u64)> {
        let elapsed = release::elapsed_months(now, self.start_ts);
        let balance = release::releasable_amount(
            self.balance_initial,
            self.balance_claimed,
            self.category.duration_months(),
            elapsed,
        )?;
        let bonus = release::releasable_amount(
            self.bonus_initial,
            self.bonus_claimed,
            self.category.bonus_duration_months(),
            elapsed,
        )?;
        Ok((balance, bonus))
    }

    /// Books a withdrawal of already-computed releasable amounts.
    pub fn apply_withdraw(&mut self, balance_part: u64, bonus_part: u64) -> Result<()> {
        self.balance_claimed = self
            .balance_claimed
            .checked_add(balance_part)
            .ok_or(DistributionError::MathOverflow)?;
        self.balance_remaining = self
            .balance_remaining
            .checked_sub(balance_part)
            .ok_or(DistributionError::MathOverflow)?;
        self.bonus_claimed = self
            .bonus_claimed
            .checked_add(bonus_part)
            .ok_or(DistributionError::MathOverflow)?;
        self.bonus_remaining = self
            .bonus_remaining
            .checked_sub(bonus_part)
            .ok_or(DistributionError::MathOverflow)?;
        Ok(())
    }

    /// Terminates future vesting: books `payout` (the vested-but-unclaimed
    /// balance) as claimed, returns the forfeited remainder (the rest of the
    /// balance track plus the entire bonus track), and zeroes both tracks.
    pub fn apply_revoke(&mut self, payout: u64) -> Result<u64> {
        let balance_left = self
            .balance_remaining
            .checked_sub(payout)
            .ok_or(DistributionError::MathOverflow)?;
        let forfeited = balance_left
            .checked_add(self.bonus_remaining)
            .ok_or(DistributionError::MathOverflow)?;

        self.balance_claimed = self
            .balance_claimed
            .checked_add(payout)
            .ok_or(DistributionError::MathOverflow)?;
        self.balance_remaining = 0;
        self.bonus_remaining = 0;
        self.revoked = true;
        Ok(forfeited)
    }

    /// Voids the source record after reassignment. Amounts and start go to
    /// zero; `initialized` is kept so the key stays burned for project
    /// allocations.
    pub fn void_for_reassignment(&mut self) {
        self.start_ts = 0;
        self.balance_initial = 0;
        self.balance_claimed = 0;
        self.balance_remaining = 0;
        self.bonus_initial = 0;
        self.bonus_claimed = 0;
        self.bonus_remaining = 0;
    }
}

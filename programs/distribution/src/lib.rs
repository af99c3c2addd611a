//! Token distribution and vesting ledger.
//!
//! Allocates a fixed, pre-minted supply to named beneficiary categories and
//! releases it over 30-day periods under per-category vesting terms, with
//! revocation, beneficiary reassignment and dual-track (balance + bonus)
//! sale vesting.

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::{Category, SaleVariant};

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod distribution {
    use super::*;

    /// Creates the ledger state and token vault; the payer becomes owner.
    pub fn initialize(ctx: Context<Initialize>, open_ts: i64) -> Result<()> {
        instructions::initialize(ctx, open_ts)
    }

    /// Allocates `amount` from a vesting project pool to the beneficiary,
    /// opening their vesting record.
    pub fn allocate_project(
        ctx: Context<AllocateProject>,
        category: Category,
        amount: u64,
    ) -> Result<()> {
        instructions::allocate_project(ctx, category, amount)
    }

    /// Pays `amount` from an instant-payout project pool straight to the
    /// beneficiary's token account; no vesting record is created.
    pub fn allocate_instant(
        ctx: Context<AllocateInstant>,
        category: Category,
        amount: u64,
    ) -> Result<()> {
        instructions::allocate_instant(ctx, category, amount)
    }

    /// Allocates a purchased amount plus bonus from the sale pool, creating
    /// or accumulating onto the beneficiary's sale record.
    pub fn allocate_sale(
        ctx: Context<AllocateSale>,
        variant: SaleVariant,
        purchased: u64,
        bonus: u64,
        funds: u64,
    ) -> Result<()> {
        instructions::allocate_sale(ctx, variant, purchased, bonus, funds)
    }

    /// Releases everything vested-but-unclaimed on both tracks to the
    /// signing beneficiary.
    pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
        instructions::withdraw(ctx)
    }

    /// Terminates a revocable record: pays out the vested remainder, moves
    /// the rest into the revoked pool.
    pub fn revoke(ctx: Context<Revoke>) -> Result<()> {
        instructions::revoke(ctx)
    }

    /// Redistributes previously revoked funds to any destination.
    pub fn transfer_revoked(ctx: Context<TransferRevoked>, amount: u64) -> Result<()> {
        instructions::transfer_revoked(ctx, amount)
    }

    /// Moves an un-withdrawn record to a new beneficiary key (lost-key
    /// recovery); the source record is voided.
    pub fn reassign_beneficiary(ctx: Context<ReassignBeneficiary>, to: Pubkey) -> Result<()> {
        instructions::reassign_beneficiary(ctx, to)
    }

    /// Hands the single administrative principal to a new key.
    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        instructions::transfer_ownership(ctx, new_owner)
    }
}

// Cross-component sequences over the state layer, exercising the same
// composition the instruction handlers perform (reserve + record mutation in
// one transaction) without a runtime.
#[cfg(test)]
mod ledger_tests {
    use super::constants::SECONDS_PER_MONTH;
    use super::error::DistributionError;
    use super::state::{Category, DistributionState, Pool, SaleVariant, VestingRecord};
    use anchor_lang::prelude::*;

    const OPEN_TS: i64 = 1_700_000_000;

    fn state() -> DistributionState {
        DistributionState {
            mint: Pubkey::new_unique(),
            owner: Pubkey::new_unique(),
            open_ts: OPEN_TS,
            project_distributed: [0; Pool::PROJECT_COUNT],
            sale_distributed: 0,
            revoked_amount: 0,
        }
    }

    fn blank_record() -> VestingRecord {
        VestingRecord {
            beneficiary: Pubkey::default(),
            category: Category::Team,
            start_ts: 0,
            balance_initial: 0,
            balance_claimed: 0,
            balance_remaining: 0,
            bonus_initial: 0,
            bonus_claimed: 0,
            bonus_remaining: 0,
            revoked: false,
            initialized: false,
        }
    }

    fn allocate(
        st: &mut DistributionState,
        record: &mut VestingRecord,
        beneficiary: Pubkey,
        category: Category,
        amount: u64,
    ) -> Result<()> {
        require!(!record.initialized, DistributionError::DuplicateAllocation);
        st.reserve(category.pool(), amount)?;
        record.open(beneficiary, category, OPEN_TS, amount, 0);
        Ok(())
    }

    fn allocate_sale(
        st: &mut DistributionState,
        record: &mut VestingRecord,
        beneficiary: Pubkey,
        variant: SaleVariant,
        purchased: u64,
        bonus: u64,
        now: i64,
    ) -> Result<()> {
        st.reserve(Pool::Sale, purchased + bonus)?;
        if record.is_active() {
            record.accumulate_sale(purchased, bonus)
        } else {
            record.open(beneficiary, variant.category(), now, purchased, bonus);
            Ok(())
        }
    }

    #[test]
    fn pools_never_exceed_capacity_across_sequences() {
        let mut st = state();
        let mut r1 = blank_record();
        let mut r2 = blank_record();

        allocate(&mut st, &mut r1, Pubkey::new_unique(), Category::Team, 240).unwrap();
        allocate(
            &mut st,
            &mut r2,
            Pubkey::new_unique(),
            Category::SeedContributors,
            500,
        )
        .unwrap();

        for pool in [
            Pool::Team,
            Pool::SeedContributors,
            Pool::Founders,
            Pool::Advisors,
            Pool::Consultants,
            Pool::Other,
            Pool::Sale,
        ] {
            assert!(st.distributed_of(pool) <= pool.capacity());
        }
        assert_eq!(st.distributed_of(Pool::Team), 240);
        assert_eq!(st.distributed_of(Pool::SeedContributors), 500);
    }

    #[test]
    fn duplicate_project_allocation_is_rejected_even_when_exhausted() {
        let mut st = state();
        let mut record = blank_record();
        let beneficiary = Pubkey::new_unique();

        allocate(&mut st, &mut record, beneficiary, Category::SeedContributors, 500).unwrap();

        // Drain the record completely.
        let t5 = OPEN_TS + 5 * SECONDS_PER_MONTH;
        let (b, _) = record.releasable_at(t5).unwrap();
        record.apply_withdraw(b, 0).unwrap();
        assert!(record.is_exhausted());

        let err = allocate(&mut st, &mut record, beneficiary, Category::Team, 100).unwrap_err();
        assert_eq!(err, Error::from(DistributionError::DuplicateAllocation));
        assert_eq!(st.distributed_of(Pool::Team), 0);
    }

    #[test]
    fn revoke_then_redistribute_conserves_supply() {
        let mut st = state();
        let mut record = blank_record();
        record.open(Pubkey::new_unique(), Category::Team, OPEN_TS, 240, 0);
        st.reserve(Pool::Team, 240).unwrap();

        // 3 periods claimed, 4th elapsed unclaimed.
        let t3 = OPEN_TS + 3 * SECONDS_PER_MONTH;
        let (b, _) = record.releasable_at(t3).unwrap();
        record.apply_withdraw(b, 0).unwrap();

        let t4 = OPEN_TS + 4 * SECONDS_PER_MONTH;
        let (payout, _) = record.releasable_at(t4).unwrap();
        let forfeited = record.apply_revoke(payout).unwrap();
        st.add_revoked(forfeited).unwrap();

        // 240 = 30 claimed + 10 revocation payout + 200 revoked pool.
        assert_eq!(record.balance_claimed, 40);
        assert_eq!(st.revoked_amount, 200);
        assert_eq!(record.balance_claimed + st.revoked_amount, 240);

        st.take_revoked(50).unwrap();
        assert_eq!(st.revoked_amount, 150);
    }

    #[test]
    fn reassignment_moves_record_and_burns_source() {
        let mut source = blank_record();
        let mut destination = blank_record();
        source.open(Pubkey::new_unique(), Category::Founders, OPEN_TS, 1_000, 0);

        assert_eq!(source.balance_claimed, 0);
        let to = Pubkey::new_unique();
        destination.open(
            to,
            source.category,
            source.start_ts,
            source.balance_initial,
            source.bonus_initial,
        );
        source.void_for_reassignment();

        assert_eq!(destination.balance_initial, 1_000);
        assert_eq!(destination.start_ts, OPEN_TS);
        assert!(!source.is_active());
        assert!(source.initialized);

        // A withdrawn record can no longer be reassigned.
        let t1 = OPEN_TS + SECONDS_PER_MONTH;
        let (b, _) = destination.releasable_at(t1).unwrap();
        destination.apply_withdraw(b, 0).unwrap();
        assert!(destination.balance_claimed > 0);
    }

    #[test]
    fn sale_after_reassignment_void_restarts_the_schedule() {
        let mut st = state();
        let mut record = blank_record();
        let beneficiary = Pubkey::new_unique();

        allocate_sale(
            &mut st,
            &mut record,
            beneficiary,
            SaleVariant::Private,
            500,
            0,
            OPEN_TS,
        )
        .unwrap();
        record.void_for_reassignment();
        assert!(record.initialized);
        assert!(!record.is_active());

        // A later purchase on the voided record must open a fresh schedule
        // anchored at its own time, not inherit the zeroed start.
        let later = OPEN_TS + 7 * SECONDS_PER_MONTH;
        allocate_sale(
            &mut st,
            &mut record,
            beneficiary,
            SaleVariant::Private,
            1_000,
            0,
            later,
        )
        .unwrap();
        assert_eq!(record.start_ts, later);
        assert_eq!(record.balance_initial, 1_000);

        // Nothing is releasable inside the first period of the new schedule.
        assert_eq!(record.releasable_at(later + 1).unwrap(), (0, 0));
        let (balance, _) = record
            .releasable_at(later + 2 * SECONDS_PER_MONTH)
            .unwrap();
        assert_eq!(balance, 400); // 1000 * 2/5
    }

    #[test]
    fn instant_categories_bypass_the_record_store() {
        let mut st = state();
        let record = blank_record();

        // Instant categories pay the beneficiary directly; only the pool
        // accounting moves and no record is ever opened for them.
        for category in [Category::Advisors, Category::Consultants, Category::Other] {
            assert!(category.is_instant());
            st.reserve(category.pool(), 100).unwrap();
        }
        for category in [
            Category::Team,
            Category::SeedContributors,
            Category::Founders,
        ] {
            assert!(!category.is_instant());
        }
        assert!(!record.initialized);
        assert_eq!(st.distributed_of(Pool::Advisors), 100);
        assert_eq!(st.distributed_of(Pool::Consultants), 100);
        assert_eq!(st.distributed_of(Pool::Other), 100);
    }

    #[test]
    fn sale_flow_accumulates_and_vests_both_tracks() {
        let mut st = state();
        let mut record = blank_record();
        let beneficiary = Pubkey::new_unique();

        st.reserve(Pool::Sale, 135).unwrap();
        record.open(beneficiary, Category::PrivateSale, OPEN_TS, 100, 35);
        st.reserve(Pool::Sale, 55).unwrap();
        record.accumulate_sale(50, 5).unwrap();

        assert_eq!(st.sale_distributed, 190);
        assert_eq!(record.balance_initial, 150);
        assert_eq!(record.bonus_initial, 40);

        // Both tracks gate on the same start and vest over 5 periods.
        let t2 = OPEN_TS + 2 * SECONDS_PER_MONTH;
        let (balance, bonus) = record.releasable_at(t2).unwrap();
        assert_eq!(balance, 60); // 150 * 2/5
        assert_eq!(bonus, 16); // 40 * 2/5
        record.apply_withdraw(balance, bonus).unwrap();
        assert_eq!(
            record.balance_claimed + record.balance_remaining,
            record.balance_initial
        );
        assert_eq!(
            record.bonus_claimed + record.bonus_remaining,
            record.bonus_initial
        );
    }
}

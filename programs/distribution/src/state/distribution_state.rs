use anchor_lang::prelude::*;

use crate::error::DistributionError;
use crate::state::Pool;

/// Singleton ledger state PDA: supply pool registry, revoked pool scalar,
/// owner identity and the allocation window.
#[account]
pub struct DistributionState {
    /// Token mint.
    pub mint: Pubkey,
    /// Privileged administrative principal.
    pub owner: Pubkey,
    /// Allocation window opening timestamp (Unix seconds). All allocation
    /// instructions fail before this time; no restriction after.
    pub open_ts: i64,
    /// Distributed counters per project pool, indexed by `Pool` order.
    pub project_distributed: [u64; Pool::PROJECT_COUNT],
    /// Distributed counter for the shared sale pool.
    pub sale_distributed: u64,
    /// Aggregate balance recovered from revocations, not attached to any
    /// beneficiary.
    pub revoked_amount: u64,
}

impl DistributionState {
    pub const SIZE: usize =
        32 + // mint
        32 + // owner
        8 +  // open_ts
        8 * Pool::PROJECT_COUNT + // project_distributed
        8 +  // sale_distributed
        8;   // revoked_amount

    pub fn distributed_of(&self, pool: Pool) -> u64 {
        match pool.project_index() {
            Some(i) => self.project_distributed[i],
            None => self.sale_distributed,
        }
    }

    pub fn remaining_of(&self, pool: Pool) -> u64 {
        pool.capacity().saturating_sub(self.distributed_of(pool))
    }

    /// Atomically checks `distributed + amount <= capacity` and increments
    /// the counter. No partial reservation.
    pub fn reserve(&mut self, pool: Pool, amount: u64) -> Result<()> {
        let next = self
            .distributed_of(pool)
            .checked_add(amount)
            .ok_or(DistributionError::MathOverflow)?;
        require!(next <= pool.capacity(), DistributionError::PoolExhausted);
        match pool.project_index() {
            Some(i) => self.project_distributed[i] = next,
            None => self.sale_distributed = next,
        }
        Ok(())
    }

    pub fn add_revoked(&mut self, amount: u64) -> Result<()> {
        self.revoked_amount = self
            .revoked_amount
            .checked_add(amount)
            .ok_or(DistributionError::MathOverflow)?;
        Ok(())
    }

    pub fn take_revoked(&mut self, amount: u64) -> Result<()> {
        require!(
            amount <= self.revoked_amount,
            DistributionError::InsufficientRevokedBalance
        );
        self.revoked_amount -= amount;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_state() -> DistributionState {
        DistributionState {
            mint: Pubkey::default(),
            owner: Pubkey::default(),
            open_ts: 0,
            project_distributed: [0; Pool::PROJECT_COUNT],
            sale_distributed: 0,
            revoked_amount: 0,
        }
    }

    #[test]
    fn reserve_up_to_capacity() {
        let mut st = empty_state();
        let cap = Pool::Advisors.capacity();

        st.reserve(Pool::Advisors, cap - 1).unwrap();
        assert_eq!(st.distributed_of(Pool::Advisors), cap - 1);
        assert_eq!(st.remaining_of(Pool::Advisors), 1);

        st.reserve(Pool::Advisors, 1).unwrap();
        assert_eq!(st.distributed_of(Pool::Advisors), cap);
        assert_eq!(st.remaining_of(Pool::Advisors), 0);
    }

    #[test]
    fn reserve_beyond_capacity_fails_without_mutation() {
        let mut st = empty_state();
        st.reserve(Pool::Team, 500).unwrap();

        let err = st.reserve(Pool::Team, Pool::Team.capacity()).unwrap_err();
        assert_eq!(err, Error::from(DistributionError::PoolExhausted));
        assert_eq!(st.distributed_of(Pool::Team), 500);
    }

    #[test]
    fn sale_pool_has_its_own_counter() {
        let mut st = empty_state();
        st.reserve(Pool::Sale, 1_000).unwrap();
        assert_eq!(st.sale_distributed, 1_000);
        assert!(st.project_distributed.iter().all(|&d| d == 0));
    }

    #[test]
    fn revoked_pool_accounting() {
        let mut st = empty_state();
        st.add_revoked(200).unwrap();
        st.take_revoked(50).unwrap();
        assert_eq!(st.revoked_amount, 150);

        let err = st.take_revoked(151).unwrap_err();
        assert_eq!(
            err,
            Error::from(DistributionError::InsufficientRevokedBalance)
        );
        assert_eq!(st.revoked_amount, 150);
    }
}

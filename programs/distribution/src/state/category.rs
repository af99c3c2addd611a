use anchor_lang::prelude::*;

use crate::constants::*;

/// A capacity-bounded source of tokens. Six project pools plus one sale
/// pool shared by both sale categories.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pool {
    Team,
    SeedContributors,
    Founders,
    Advisors,
    Consultants,
    Other,
    Sale,
}

impl Pool {
    /// Number of project pools (everything except `Sale`).
    pub const PROJECT_COUNT: usize = 6;

    /// Immutable capacity, a protocol constant.
    pub fn capacity(self) -> u64 {
        match self {
            Pool::Team => TEAM_POOL_CAPACITY,
            Pool::SeedContributors => SEED_CONTRIBUTORS_POOL_CAPACITY,
            Pool::Founders => FOUNDERS_POOL_CAPACITY,
            Pool::Advisors => ADVISORS_POOL_CAPACITY,
            Pool::Consultants => CONSULTANTS_POOL_CAPACITY,
            Pool::Other => OTHER_POOL_CAPACITY,
            Pool::Sale => SALE_POOL_CAPACITY,
        }
    }

    /// Index into the per-project-pool distributed counters; `None` for the
    /// sale pool, which has its own counter.
    pub fn project_index(self) -> Option<usize> {
        match self {
            Pool::Team => Some(0),
            Pool::SeedContributors => Some(1),
            Pool::Founders => Some(2),
            Pool::Advisors => Some(3),
            Pool::Consultants => Some(4),
            Pool::Other => Some(5),
            Pool::Sale => None,
        }
    }
}

/// Beneficiary category. Carries the vesting terms (pool, durations,
/// revocability) as data so handlers and the release engine can switch on
/// it exhaustively instead of branching on ids.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Team,
    SeedContributors,
    Founders,
    Advisors,
    Consultants,
    Other,
    PrivateSale,
    PublicSale,
}

/// Sale entry point variant.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaleVariant {
    Private,
    Public,
}

impl SaleVariant {
    pub fn category(self) -> Category {
        match self {
            SaleVariant::Private => Category::PrivateSale,
            SaleVariant::Public => Category::PublicSale,
        }
    }
}

impl Category {
    pub fn pool(self) -> Pool {
        match self {
            Category::Team => Pool::Team,
            Category::SeedContributors => Pool::SeedContributors,
            Category::Founders => Pool::Founders,
            Category::Advisors => Pool::Advisors,
            Category::Consultants => Pool::Consultants,
            Category::Other => Pool::Other,
            Category::PrivateSale | Category::PublicSale => Pool::Sale,
        }
    }

    /// Balance-track vesting duration in 30-day periods. Zero means fully
    /// vested immediately.
    pub fn duration_months(self) -> u32 {
        match self {
            Category::Team => TEAM_VESTING_MONTHS,
            Category::SeedContributors => SEED_CONTRIBUTORS_VESTING_MONTHS,
            Category::Founders => FOUNDERS_VESTING_MONTHS,
            Category::Advisors | Category::Consultants | Category::Other => 0,
            Category::PrivateSale => PRIVATE_SALE_VESTING_MONTHS,
            Category::PublicSale => PUBLIC_SALE_VESTING_MONTHS,
        }
    }

    /// Bonus-track vesting duration. Only sale categories carry a bonus.
    pub fn bonus_duration_months(self) -> u32 {
        match self {
            Category::PrivateSale => PRIVATE_SALE_BONUS_VESTING_MONTHS,
            Category::PublicSale => PUBLIC_SALE_BONUS_VESTING_MONTHS,
            _ => 0,
        }
    }

    /// Only the long-duration project categories may be revoked.
    pub fn revocable(self) -> bool {
        matches!(self, Category::Team | Category::Founders)
    }

    pub fn is_sale(self) -> bool {
        matches!(self, Category::PrivateSale | Category::PublicSale)
    }

    /// Instant-payout project categories: paid directly, no record created.
    pub fn is_instant(self) -> bool {
        !self.is_sale() && self.duration_months() == 0
    }
}

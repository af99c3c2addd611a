//! Protocol constants. Pool capacities and vesting terms are fixed at
//! deployment and never configurable at runtime.

/// Base units per whole token (9 decimals).
pub const TOKEN_UNIT: u64 = 1_000_000_000;

/// Seconds per vesting period: a fixed 30-day month, not a calendar month.
pub const SECONDS_PER_MONTH: i64 = 30 * 86_400;

/// Project pool capacities, in base units.
pub const TEAM_POOL_CAPACITY: u64 = 65_424_000 * TOKEN_UNIT;
pub const SEED_CONTRIBUTORS_POOL_CAPACITY: u64 = 36_000_000 * TOKEN_UNIT;
pub const FOUNDERS_POOL_CAPACITY: u64 = 15_000_000 * TOKEN_UNIT;
pub const ADVISORS_POOL_CAPACITY: u64 = 122_100 * TOKEN_UNIT;
pub const CONSULTANTS_POOL_CAPACITY: u64 = 1_891_300 * TOKEN_UNIT;
pub const OTHER_POOL_CAPACITY: u64 = 16_562_600 * TOKEN_UNIT;

/// Single sale pool shared by the private and public sale categories.
pub const SALE_POOL_CAPACITY: u64 = 165_000_000 * TOKEN_UNIT;

/// Vesting durations per category, in 30-day periods. Zero means fully
/// vested immediately.
pub const TEAM_VESTING_MONTHS: u32 = 24;
pub const SEED_CONTRIBUTORS_VESTING_MONTHS: u32 = 5;
pub const FOUNDERS_VESTING_MONTHS: u32 = 24;

/// Sale vesting policy: (balance track, bonus track) durations per variant.
/// These are explicit policy parameters, not derived values.
pub const PRIVATE_SALE_VESTING_MONTHS: u32 = 5;
pub const PRIVATE_SALE_BONUS_VESTING_MONTHS: u32 = 5;
pub const PUBLIC_SALE_VESTING_MONTHS: u32 = 0;
pub const PUBLIC_SALE_BONUS_VESTING_MONTHS: u32 = 0;

/// Ceiling on the sale bonus relative to the purchased amount, in basis
/// points (40%).
pub const MAX_BONUS_RATIO_BPS: u64 = 4_000;

//! Linear release engine over fixed 30-day periods.
//!
//! Only whole elapsed periods count: a partial period earns nothing, and the
//! floor must be exact. Handlers read the clock once and pass `now` down, so
//! everything here is deterministic.

use crate::constants::SECONDS_PER_MONTH;
use crate::error::DistributionError;

use anchor_lang::prelude::*;

/// Whole 30-day periods elapsed since `start_ts`; zero before the start.
pub fn elapsed_months(now: i64, start_ts: i64) -> u32 {
    if now < start_ts {
        return 0;
    }
    let periods = (now - start_ts) / SECONDS_PER_MONTH;
    u32::try_from(periods).unwrap_or(u32::MAX)
}

/// Amount vested out of `initial` after `elapsed` periods of a
/// `duration_months`-period schedule. Zero duration means fully vested.
pub fn vested_amount(initial: u64, duration_months: u32, elapsed: u32) -> Result<u64> {
    if duration_months == 0 {
        return Ok(initial);
    }
    let m = elapsed.min(duration_months);
    let v = (initial as u128)
        .checked_mul(m as u128)
        .ok_or(DistributionError::MathOverflow)?
        / (duration_months as u128);
    u64::try_from(v).map_err(|_| DistributionError::MathOverflow.into())
}

/// Vested-but-unclaimed amount, floored at zero.
pub fn releasable_amount(
    initial: u64,
    claimed: u64,
    duration_months: u32,
    elapsed: u32,
) -> Result<u64> {
    let vested = vested_amount(initial, duration_months, elapsed)?;
    Ok(vested.saturating_sub(claimed))
}

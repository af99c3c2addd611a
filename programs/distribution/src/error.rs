use anchor_lang::prelude::*;

/// Custom error codes for the distribution program.
#[error_code]
pub enum DistributionError {
    #[msg("Unauthorized: caller is not allowed to perform this operation")]
    Unauthorized,

    #[msg("Allocation window is not open yet")]
    WindowNotOpen,

    #[msg("Supply pool capacity exceeded")]
    PoolExhausted,

    #[msg("Beneficiary already has a vesting record")]
    DuplicateAllocation,

    #[msg("Invalid allocation (must be > 0)")]
    InvalidAllocation,

    #[msg("Invalid category for this operation")]
    InvalidCategory,

    #[msg("Bonus exceeds the configured ratio of the purchased amount")]
    BonusRatioExceeded,

    #[msg("Supplied funds do not equal purchased plus bonus amounts")]
    ValueMismatch,

    #[msg("No vesting record exists for this beneficiary")]
    NoRecord,

    #[msg("Vesting record is revoked")]
    Revoked,

    #[msg("Vesting record is already revoked")]
    AlreadyRevoked,

    #[msg("Nothing releasable on either track")]
    NothingReleasable,

    #[msg("Category is not revocable")]
    CategoryNotRevocable,

    #[msg("Insufficient revoked pool balance")]
    InsufficientRevokedBalance,

    #[msg("Record has prior withdrawals and cannot be reassigned")]
    AlreadyWithdrawn,

    #[msg("Destination already has a vesting record")]
    DestinationOccupied,

    #[msg("Invalid timestamp")]
    InvalidTimestamp,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Math overflow")]
    MathOverflow,
}

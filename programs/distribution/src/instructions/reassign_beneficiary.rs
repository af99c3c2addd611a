use anchor_lang::prelude::*;

use crate::error::DistributionError;
use crate::state::{DistributionState, VestingRecord};

pub fn reassign_beneficiary(ctx: Context<ReassignBeneficiary>, to: Pubkey) -> Result<()> {
    require!(to != Pubkey::default(), DistributionError::InvalidPubkey);

    let st = &ctx.accounts.distribution_state;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        st.owner,
        DistributionError::Unauthorized
    );

    let source = &mut ctx.accounts.from_record;
    require!(source.is_active(), DistributionError::NoRecord);
    require!(!source.revoked, DistributionError::AlreadyRevoked);
    require!(
        source.balance_claimed == 0 && source.bonus_claimed == 0,
        DistributionError::AlreadyWithdrawn
    );

    let destination = &mut ctx.accounts.to_record;
    require!(
        !destination.initialized,
        DistributionError::DestinationOccupied
    );

    // Move, not duplicate: the destination takes over the full record, the
    // source is voided but stays as history.
    destination.open(
        to,
        source.category,
        source.start_ts,
        source.balance_initial,
        source.bonus_initial,
    );
    source.void_for_reassignment();

    emit!(BeneficiaryReassigned {
        from: ctx.accounts.from.key(),
        to,
        balance_initial: destination.balance_initial,
        bonus_initial: destination.bonus_initial,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(to: Pubkey)]
pub struct ReassignBeneficiary<'info> {
    #[account(seeds = [b"distribution"], bump)]
    pub distribution_state: Account<'info, DistributionState>,

    #[account(
        mut,
        seeds = [b"vesting", from.key().as_ref()],
        bump
    )]
    pub from_record: Account<'info, VestingRecord>,

    /// CHECK: source wallet, record seed only.
    pub from: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + VestingRecord::SIZE,
        seeds = [b"vesting", to.as_ref()],
        bump
    )]
    pub to_record: Account<'info, VestingRecord>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct BeneficiaryReassigned {
    pub from: Pubkey,
    pub to: Pubkey,
    pub balance_initial: u64,
    pub bonus_initial: u64,
}

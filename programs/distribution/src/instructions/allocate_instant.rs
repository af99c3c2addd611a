use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::DistributionError;
use crate::state::{Category, DistributionState};

use super::allocate_project::ProjectAllocated;

pub fn allocate_instant(
    ctx: Context<AllocateInstant>,
    category: Category,
    amount: u64,
) -> Result<()> {
    let st = &mut ctx.accounts.distribution_state;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        st.owner,
        DistributionError::Unauthorized
    );
    require!(category.is_instant(), DistributionError::InvalidCategory);
    require!(amount > 0, DistributionError::InvalidAllocation);

    let now = Clock::get()?.unix_timestamp;
    require!(now >= st.open_ts, DistributionError::WindowNotOpen);

    require_keys_eq!(
        ctx.accounts.owner_token_account.mint,
        st.mint,
        DistributionError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.owner_token_account.owner,
        ctx.accounts.owner.key(),
        DistributionError::InvalidTokenAccount
    );
    require_keys_eq!(
        ctx.accounts.beneficiary_token_account.mint,
        st.mint,
        DistributionError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.beneficiary_token_account.owner,
        ctx.accounts.beneficiary.key(),
        DistributionError::InvalidTokenAccount
    );

    // An address that already holds a vesting record cannot also take a
    // project payout; repeated instant payouts are fine since they never
    // create the record account.
    require!(
        ctx.accounts.vesting_record.data_is_empty(),
        DistributionError::DuplicateAllocation
    );

    st.reserve(category.pool(), amount)?;

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.owner_token_account.to_account_info(),
                to: ctx.accounts.beneficiary_token_account.to_account_info(),
                authority: ctx.accounts.owner.to_account_info(),
            },
        ),
        amount,
    )?;

    emit!(ProjectAllocated {
        beneficiary: ctx.accounts.beneficiary.key(),
        category,
        amount,
        instant: true,
        pool_distributed: st.distributed_of(category.pool()),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct AllocateInstant<'info> {
    #[account(mut, seeds = [b"distribution"], bump)]
    pub distribution_state: Account<'info, DistributionState>,

    /// CHECK: record PDA for the beneficiary, only read for existence;
    /// instant payouts never create it.
    #[account(seeds = [b"vesting", beneficiary.key().as_ref()], bump)]
    pub vesting_record: UncheckedAccount<'info>,

    /// CHECK: beneficiary wallet, used as the record seed and payout target.
    pub beneficiary: UncheckedAccount<'info>,

    #[account(mut)]
    pub beneficiary_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub owner_token_account: Account<'info, TokenAccount>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

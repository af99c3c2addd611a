use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::DistributionError;
use crate::state::{Category, DistributionState, VestingRecord};

pub fn allocate_project(
    ctx: Context<AllocateProject>,
    category: Category,
    amount: u64,
) -> Result<()> {
    let st = &mut ctx.accounts.distribution_state;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        st.owner,
        DistributionError::Unauthorized
    );
    // Sale categories go through allocate_sale, instant-payout categories
    // through allocate_instant.
    require!(
        !category.is_sale() && !category.is_instant(),
        DistributionError::InvalidCategory
    );
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

    // Project categories are strictly single-shot per address: any existing
    // record, in any state, blocks a new project allocation.
    let record = &mut ctx.accounts.vesting_record;
    require!(!record.initialized, DistributionError::DuplicateAllocation);

    st.reserve(category.pool(), amount)?;

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.owner_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.owner.to_account_info(),
            },
        ),
        amount,
    )?;
    record.open(ctx.accounts.beneficiary.key(), category, now, amount, 0);

    emit!(ProjectAllocated {
        beneficiary: ctx.accounts.beneficiary.key(),
        category,
        amount,
        instant: false,
        pool_distributed: st.distributed_of(category.pool()),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct AllocateProject<'info> {
    #[account(mut, seeds = [b"distribution"], bump)]
    pub distribution_state: Account<'info, DistributionState>,

    #[account(
        mut,
        seeds = [b"vault", distribution_state.key().as_ref()],
        bump,
        constraint = vault.mint == distribution_state.mint @ DistributionError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + VestingRecord::SIZE,
        seeds = [b"vesting", beneficiary.key().as_ref()],
        bump
    )]
    pub vesting_record: Account<'info, VestingRecord>,

    /// CHECK: beneficiary wallet, used as the record seed.
    pub beneficiary: UncheckedAccount<'info>,

    #[account(mut)]
    pub owner_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct ProjectAllocated {
    pub beneficiary: Pubkey,
    pub category: Category,
    pub amount: u64,
    pub instant: bool,
    pub pool_distributed: u64,
}

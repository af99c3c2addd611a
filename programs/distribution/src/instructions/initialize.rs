use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::error::DistributionError;
use crate::state::{DistributionState, Pool};

pub fn initialize(ctx: Context<Initialize>, open_ts: i64) -> Result<()> {
    require!(open_ts > 0, DistributionError::InvalidTimestamp);

    let st = &mut ctx.accounts.distribution_state;
    st.mint = ctx.accounts.mint.key();
    st.owner = ctx.accounts.owner.key();
    st.open_ts = open_ts;
    st.project_distributed = [0; Pool::PROJECT_COUNT];
    st.sale_distributed = 0;
    st.revoked_amount = 0;

    emit!(DistributionInitialized {
        mint: st.mint,
        owner: st.owner,
        open_ts,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + DistributionState::SIZE,
        seeds = [b"distribution"],
        bump
    )]
    pub distribution_state: Account<'info, DistributionState>,

    #[account(
        init,
        payer = owner,
        token::mint = mint,
        token::authority = distribution_state,
        seeds = [b"vault", distribution_state.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct DistributionInitialized {
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub open_ts: i64,
}

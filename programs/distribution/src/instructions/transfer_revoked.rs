use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::DistributionError;
use crate::state::DistributionState;

pub fn transfer_revoked(ctx: Context<TransferRevoked>, amount: u64) -> Result<()> {
    require!(amount > 0, DistributionError::InvalidConfig);

    // Capture the AccountInfo before taking mutable borrows.
    let distribution_state_ai = ctx.accounts.distribution_state.to_account_info();
    let distribution_state_bump = ctx.bumps.distribution_state;

    let st = &mut ctx.accounts.distribution_state;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        st.owner,
        DistributionError::Unauthorized
    );
    require_keys_eq!(
        ctx.accounts.destination_token_account.mint,
        st.mint,
        DistributionError::InvalidTokenMint
    );

    st.take_revoked(amount)?;

    require!(
        ctx.accounts.vault.amount >= amount,
        DistributionError::InsufficientVaultBalance
    );

    let signer_seeds: &[&[&[u8]]] = &[&[b"distribution", &[distribution_state_bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.destination_token_account.to_account_info(),
                authority: distribution_state_ai,
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(RevokedFundsTransferred {
        destination: ctx.accounts.destination_token_account.owner,
        amount,
        revoked_amount: st.revoked_amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct TransferRevoked<'info> {
    #[account(mut, seeds = [b"distribution"], bump)]
    pub distribution_state: Account<'info, DistributionState>,

    #[account(
        mut,
        seeds = [b"vault", distribution_state.key().as_ref()],
        bump,
        constraint = vault.mint == distribution_state.mint @ DistributionError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub destination_token_account: Account<'info, TokenAccount>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct RevokedFundsTransferred {
    pub destination: Pubkey,
    pub amount: u64,
    pub revoked_amount: u64,
}

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::DistributionError;
use crate::state::{DistributionState, VestingRecord};

pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
    let record = &mut ctx.accounts.vesting_record;
    require!(record.is_active(), DistributionError::NoRecord);
    require_keys_eq!(
        ctx.accounts.beneficiary.key(),
        record.beneficiary,
        DistributionError::Unauthorized
    );
    require!(!record.revoked, DistributionError::Revoked);

    require_keys_eq!(
        ctx.accounts.beneficiary_token_account.mint,
        ctx.accounts.distribution_state.mint,
        DistributionError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.beneficiary_token_account.owner,
        ctx.accounts.beneficiary.key(),
        DistributionError::InvalidTokenAccount
    );

    let now = Clock::get()?.unix_timestamp;
    let (balance_part, bonus_part) = record.releasable_at(now)?;
    let total = balance_part
        .checked_add(bonus_part)
        .ok_or(DistributionError::MathOverflow)?;
    require!(total > 0, DistributionError::NothingReleasable);

    require!(
        ctx.accounts.vault.amount >= total,
        DistributionError::InsufficientVaultBalance
    );

    let signer_seeds: &[&[&[u8]]] = &[&[b"distribution", &[ctx.bumps.distribution_state]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.beneficiary_token_account.to_account_info(),
                authority: ctx.accounts.distribution_state.to_account_info(),
            },
            signer_seeds,
        ),
        total,
    )?;

    record.apply_withdraw(balance_part, bonus_part)?;

    emit!(FundsWithdrawn {
        beneficiary: record.beneficiary,
        balance_amount: balance_part,
        bonus_amount: bonus_part,
        balance_claimed: record.balance_claimed,
        bonus_claimed: record.bonus_claimed,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(seeds = [b"distribution"], bump)]
    pub distribution_state: Account<'info, DistributionState>,

    #[account(
        mut,
        seeds = [b"vault", distribution_state.key().as_ref()],
        bump,
        constraint = vault.mint == distribution_state.mint @ DistributionError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [b"vesting", beneficiary.key().as_ref()],
        bump
    )]
    pub vesting_record: Account<'info, VestingRecord>,

    #[account(mut)]
    pub beneficiary_token_account: Account<'info, TokenAccount>,

    pub beneficiary: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct FundsWithdrawn {
    pub beneficiary: Pubkey,
    pub balance_amount: u64,
    pub bonus_amount: u64,
    pub balance_claimed: u64,
    pub bonus_claimed: u64,
}

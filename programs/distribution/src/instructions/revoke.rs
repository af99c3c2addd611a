use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::DistributionError;
use crate::state::{Category, DistributionState, VestingRecord};

pub fn revoke(ctx: Context<Revoke>) -> Result<()> {
    // Capture the AccountInfo before taking mutable borrows.
    let distribution_state_ai = ctx.accounts.distribution_state.to_account_info();
    let distribution_state_bump = ctx.bumps.distribution_state;

    let st = &mut ctx.accounts.distribution_state;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        st.owner,
        DistributionError::Unauthorized
    );

    let record = &mut ctx.accounts.vesting_record;
    require!(record.is_active(), DistributionError::NoRecord);
    require!(!record.revoked, DistributionError::AlreadyRevoked);
    require!(
        record.category.revocable(),
        DistributionError::CategoryNotRevocable
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

    // Pay out whatever is vested but unclaimed, exactly as a final withdraw
    // would; everything else is forfeited into the revoked pool.
    let now = Clock::get()?.unix_timestamp;
    let (payout, _) = record.releasable_at(now)?;

    if payout > 0 {
        require!(
            ctx.accounts.vault.amount >= payout,
            DistributionError::InsufficientVaultBalance
        );
        let signer_seeds: &[&[&[u8]]] = &[&[b"distribution", &[distribution_state_bump]]];
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.vault.to_account_info(),
                    to: ctx.accounts.beneficiary_token_account.to_account_info(),
                    authority: distribution_state_ai,
                },
                signer_seeds,
            ),
            payout,
        )?;
    }

    let forfeited = record.apply_revoke(payout)?;
    st.add_revoked(forfeited)?;

    emit!(VestingRevoked {
        beneficiary: record.beneficiary,
        category: record.category,
        payout,
        forfeited,
        revoked_amount: st.revoked_amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Revoke<'info> {
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
        mut,
        seeds = [b"vesting", beneficiary.key().as_ref()],
        bump
    )]
    pub vesting_record: Account<'info, VestingRecord>,

    /// CHECK: beneficiary wallet, record seed and payout target.
    pub beneficiary: UncheckedAccount<'info>,

    #[account(mut)]
    pub beneficiary_token_account: Account<'info, TokenAccount>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct VestingRevoked {
    pub beneficiary: Pubkey,
    pub category: Category,
    pub payout: u64,
    pub forfeited: u64,
    pub revoked_amount: u64,
}

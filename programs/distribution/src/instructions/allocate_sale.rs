use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::DistributionError;
use crate::state::{DistributionState, Pool, SaleVariant, VestingRecord};
use crate::utils::sale::{check_bonus_ratio, checked_sale_total};

pub fn allocate_sale(
    ctx: Context<AllocateSale>,
    variant: SaleVariant,
    purchased: u64,
    bonus: u64,
    funds: u64,
) -> Result<()> {
    let st = &mut ctx.accounts.distribution_state;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        st.owner,
        DistributionError::Unauthorized
    );
    require!(purchased > 0, DistributionError::InvalidAllocation);

    let now = Clock::get()?.unix_timestamp;
    require!(now >= st.open_ts, DistributionError::WindowNotOpen);

    check_bonus_ratio(purchased, bonus)?;
    let total = checked_sale_total(purchased, bonus, funds)?;

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

    st.reserve(Pool::Sale, total)?;

    // A record voided by reassignment stays initialized but carries no
    // amounts; sale-wise it counts as "no record" and vesting restarts at
    // `now`. Only a live record accumulates.
    let record = &mut ctx.accounts.vesting_record;
    if record.is_active() {
        // Sale categories are additive: either variant merges into the one
        // existing sale record for this address.
        record.accumulate_sale(purchased, bonus)?;
    } else {
        record.open(
            ctx.accounts.beneficiary.key(),
            variant.category(),
            now,
            purchased,
            bonus,
        );
    }

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.owner_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.owner.to_account_info(),
            },
        ),
        total,
    )?;

    emit!(SaleAllocated {
        beneficiary: ctx.accounts.beneficiary.key(),
        variant,
        purchased,
        bonus,
        balance_initial: record.balance_initial,
        bonus_initial: record.bonus_initial,
        sale_distributed: st.sale_distributed,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct AllocateSale<'info> {
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
pub struct SaleAllocated {
    pub beneficiary: Pubkey,
    pub variant: SaleVariant,
    pub purchased: u64,
    pub bonus: u64,
    pub balance_initial: u64,
    pub bonus_initial: u64,
    pub sale_distributed: u64,
}

use anchor_lang::prelude::*;

use crate::error::DistributionError;
use crate::state::DistributionState;

pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
    require!(new_owner != Pubkey::default(), DistributionError::InvalidPubkey);

    let distribution_state_key = ctx.accounts.distribution_state.key();
    let st = &mut ctx.accounts.distribution_state;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        st.owner,
        DistributionError::Unauthorized
    );

    // The new owner must be able to sign: block the known program PDAs and
    // the program id itself.
    require!(
        new_owner != distribution_state_key,
        DistributionError::InvalidConfig
    );
    require!(new_owner != crate::ID, DistributionError::InvalidConfig);
    let (vault_pda, _) =
        Pubkey::find_program_address(&[b"vault", distribution_state_key.as_ref()], &crate::ID);
    require!(new_owner != vault_pda, DistributionError::InvalidConfig);

    let previous = st.owner;
    st.owner = new_owner;

    emit!(OwnershipTransferred {
        previous_owner: previous,
        new_owner,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    #[account(mut, seeds = [b"distribution"], bump)]
    pub distribution_state: Account<'info, DistributionState>,

    pub owner: Signer<'info>,
}

#[event]
pub struct OwnershipTransferred {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}

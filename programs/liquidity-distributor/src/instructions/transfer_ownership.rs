use anchor_lang::prelude::*;
use crate::constants::DISTRIBUTOR_SEED;
use crate::states::Distributor;

#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    /// Current owner
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [DISTRIBUTOR_SEED],
        bump = distributor.bump
    )]
    pub distributor: Account<'info, Distributor>,
}

impl<'info> TransferOwnership<'info> {
    pub fn handle(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        let caller = ctx.accounts.owner.key();
        let previous_owner = ctx.accounts.distributor.transfer_ownership(&caller, new_owner)?;

        msg!("Ownership transferred from {} to {}", previous_owner, new_owner);

        emit!(crate::events::OwnershipTransferred {
            previous_owner,
            new_owner,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}

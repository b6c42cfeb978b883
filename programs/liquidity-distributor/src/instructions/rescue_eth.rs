use anchor_lang::prelude::*;
use crate::constants::{DISTRIBUTOR_SEED, NATIVE_VAULT_SEED};
use crate::states::Distributor;
use crate::vault::sweep_native_vault;

/// Owner-only sweep of the whole native vault
#[derive(Accounts)]
pub struct RescueEth<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        seeds = [DISTRIBUTOR_SEED],
        bump = distributor.bump
    )]
    pub distributor: Account<'info, Distributor>,

    #[account(
        mut,
        seeds = [NATIVE_VAULT_SEED],
        bump = distributor.native_vault_bump
    )]
    pub native_vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> RescueEth<'info> {
    pub fn handle(ctx: Context<RescueEth>) -> Result<()> {
        let owner = ctx.accounts.owner.key();
        ctx.accounts.distributor.assert_owner(&owner)?;

        msg!("Rescuing native vault to owner: {}", owner);

        // Rent reserve included: the vault ends at exactly zero
        let vault_bump = [ctx.accounts.distributor.native_vault_bump];
        let amount = sweep_native_vault(
            &ctx.accounts.system_program.to_account_info(),
            &ctx.accounts.native_vault.to_account_info(),
            &ctx.accounts.owner.to_account_info(),
            &[NATIVE_VAULT_SEED, &vault_bump],
        )?;
        msg!("Rescued {} lamports", amount);

        emit!(crate::events::NativeRescued {
            owner,
            amount,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}

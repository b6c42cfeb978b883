use anchor_lang::prelude::*;
use crate::constants::DISTRIBUTOR_SEED;
use crate::events::{
    LiquidityModeUpdated, LpTokenHolderUpdated, RecipientsUpdated, RouterUpdated,
    SlippageUpdated, TokenAddressUpdated,
};
use crate::states::{Distributor, LiquidityMode};

/// Shared accounts for every owner-only configuration setter
#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [DISTRIBUTOR_SEED],
        bump = distributor.bump
    )]
    pub distributor: Account<'info, Distributor>,
}

impl<'info> UpdateConfig<'info> {
    pub fn update_recipients(ctx: Context<UpdateConfig>, recipient1: Pubkey, recipient2: Pubkey) -> Result<()> {
        let caller = ctx.accounts.owner.key();
        let (old_recipient1, old_recipient2) =
            ctx.accounts.distributor.update_recipients(&caller, recipient1, recipient2)?;

        msg!("Recipients updated: {} / {}", recipient1, recipient2);

        emit!(RecipientsUpdated {
            old_recipient1,
            old_recipient2,
            new_recipient1: recipient1,
            new_recipient2: recipient2,
            timestamp: Clock::get()?.unix_timestamp,
        });
        Ok(())
    }

    pub fn update_token_address(ctx: Context<UpdateConfig>, token_mint: Pubkey) -> Result<()> {
        let caller = ctx.accounts.owner.key();
        let old_token_mint = ctx.accounts.distributor.update_token_mint(&caller, token_mint)?;

        msg!("Token mint updated: {} -> {}", old_token_mint, token_mint);

        emit!(TokenAddressUpdated {
            old_token_mint,
            new_token_mint: token_mint,
            timestamp: Clock::get()?.unix_timestamp,
        });
        Ok(())
    }

    pub fn update_uniswap_router(ctx: Context<UpdateConfig>, router: Pubkey) -> Result<()> {
        let caller = ctx.accounts.owner.key();
        let old_router = ctx.accounts.distributor.update_router(&caller, router)?;

        msg!("Router updated: {} -> {}", old_router, router);

        emit!(RouterUpdated {
            old_router,
            new_router: router,
            timestamp: Clock::get()?.unix_timestamp,
        });
        Ok(())
    }

    pub fn update_lp_token_holder(ctx: Context<UpdateConfig>, holder: Pubkey) -> Result<()> {
        let caller = ctx.accounts.owner.key();
        let old_lp_token_holder = ctx.accounts.distributor.update_lp_token_holder(&caller, holder)?;

        msg!("LP token holder updated: {} -> {}", old_lp_token_holder, holder);

        emit!(LpTokenHolderUpdated {
            old_lp_token_holder,
            new_lp_token_holder: holder,
            timestamp: Clock::get()?.unix_timestamp,
        });
        Ok(())
    }

    pub fn update_liquidity_mode(ctx: Context<UpdateConfig>, mode: LiquidityMode) -> Result<()> {
        let caller = ctx.accounts.owner.key();
        let old_mode = ctx.accounts.distributor.update_liquidity_mode(&caller, mode)?;

        msg!("Liquidity mode updated: {:?} -> {:?}", old_mode, mode);

        emit!(LiquidityModeUpdated {
            old_mode,
            new_mode: mode,
            timestamp: Clock::get()?.unix_timestamp,
        });
        Ok(())
    }

    pub fn update_slippage(ctx: Context<UpdateConfig>, slippage_bps: u16) -> Result<()> {
        let caller = ctx.accounts.owner.key();
        let old_slippage_bps = ctx.accounts.distributor.update_slippage(&caller, slippage_bps)?;

        msg!("Slippage updated: {} -> {} bps", old_slippage_bps, slippage_bps);

        emit!(SlippageUpdated {
            old_slippage_bps,
            new_slippage_bps: slippage_bps,
            timestamp: Clock::get()?.unix_timestamp,
        });
        Ok(())
    }
}

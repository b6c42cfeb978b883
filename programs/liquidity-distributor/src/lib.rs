use anchor_lang::prelude::*;

declare_id!("3Wfa1Dk4v9HQFJm4Vq1pK6tSdE7nG8rYbXcL2uMzTo5N");

pub mod instructions;
pub mod errors;
pub mod constants;
pub mod states;
pub mod events;
pub mod math;
pub mod router;
pub mod vault;
#[cfg(test)]
mod test_runtime;

pub use instructions::*;
pub use events::*;
pub use states::LiquidityMode;

#[program]
pub mod liquidity_distributor {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, params: InitializeParams) -> Result<()> {
        Initialize::handle(ctx, params)
    }

    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        TransferOwnership::handle(ctx, new_owner)
    }

    pub fn update_recipients(ctx: Context<UpdateConfig>, recipient1: Pubkey, recipient2: Pubkey) -> Result<()> {
        UpdateConfig::update_recipients(ctx, recipient1, recipient2)
    }

    pub fn update_token_address(ctx: Context<UpdateConfig>, token_mint: Pubkey) -> Result<()> {
        UpdateConfig::update_token_address(ctx, token_mint)
    }

    pub fn update_uniswap_router(ctx: Context<UpdateConfig>, router: Pubkey) -> Result<()> {
        UpdateConfig::update_uniswap_router(ctx, router)
    }

    pub fn update_lp_token_holder(ctx: Context<UpdateConfig>, holder: Pubkey) -> Result<()> {
        UpdateConfig::update_lp_token_holder(ctx, holder)
    }

    pub fn update_liquidity_mode(ctx: Context<UpdateConfig>, mode: LiquidityMode) -> Result<()> {
        UpdateConfig::update_liquidity_mode(ctx, mode)
    }

    pub fn update_slippage(ctx: Context<UpdateConfig>, slippage_bps: u16) -> Result<()> {
        UpdateConfig::update_slippage(ctx, slippage_bps)
    }

    pub fn deposit(ctx: Context<Deposit>, params: DepositParams) -> Result<()> {
        Deposit::handle(ctx, params)
    }

    /// Permissionless: anyone can trigger once the vault holds proceeds
    pub fn distribute_eth<'info>(
        ctx: Context<'_, '_, 'info, 'info, DistributeEth<'info>>,
        params: DistributeParams,
    ) -> Result<()> {
        DistributeEth::handle(ctx, params)
    }

    pub fn rescue_eth(ctx: Context<RescueEth>) -> Result<()> {
        RescueEth::handle(ctx)
    }
}

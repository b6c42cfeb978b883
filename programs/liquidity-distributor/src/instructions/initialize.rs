use anchor_lang::prelude::*;
use crate::constants::{DEFAULT_SLIPPAGE_BPS, DISTRIBUTOR_SEED, NATIVE_VAULT_SEED};
use crate::states::{Distributor, LiquidityMode};

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Deployer, becomes the owner and funds the accounts
    #[account(mut)]
    pub owner: Signer<'info>,

    /// Distributor configuration PDA
    #[account(
        init,
        payer = owner,
        space = Distributor::DISCRIMINATOR.len() + Distributor::INIT_SPACE,
        seeds = [DISTRIBUTOR_SEED],
        bump
    )]
    pub distributor: Account<'info, Distributor>,

    /// Lamport vault collecting native proceeds
    #[account(
        mut,
        seeds = [NATIVE_VAULT_SEED],
        bump
    )]
    pub native_vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct InitializeParams {
    pub token_mint: Pubkey,
    /// AMM router program
    pub router: Pubkey,
    pub recipient1: Pubkey,
    pub recipient2: Pubkey,
    pub lp_token_holder: Pubkey,
    pub liquidity_mode: LiquidityMode,
    /// Defaults to 1% when omitted
    pub slippage_bps: Option<u16>,
}

impl<'info> Initialize<'info> {
    pub fn handle(ctx: Context<Initialize>, params: InitializeParams) -> Result<()> {
        msg!("Initializing distributor for owner: {}", ctx.accounts.owner.key());

        let rent_reserve = Rent::get()?.minimum_balance(0);
        let slippage_bps = params.slippage_bps.unwrap_or(DEFAULT_SLIPPAGE_BPS);

        let distributor = &mut ctx.accounts.distributor;
        distributor.owner = ctx.accounts.owner.key();
        distributor.token_mint = params.token_mint;
        distributor.router = params.router;
        distributor.recipient1 = params.recipient1;
        distributor.recipient2 = params.recipient2;
        distributor.lp_token_holder = params.lp_token_holder;
        distributor.liquidity_mode = params.liquidity_mode;
        distributor.slippage_bps = slippage_bps;
        distributor.rent_reserve = rent_reserve;
        distributor.distribution_count = 0;
        distributor.total_native_distributed = 0;
        distributor.total_native_to_liquidity = 0;
        distributor.last_distribution_ts = 0;
        distributor.bump = ctx.bumps.distributor;
        distributor.native_vault_bump = ctx.bumps.native_vault;
        distributor.validate_config()?;

        // The vault may already hold pushed lamports; only top up the shortfall
        let top_up = rent_reserve.saturating_sub(ctx.accounts.native_vault.lamports());
        if top_up > 0 {
            anchor_lang::system_program::transfer(
                CpiContext::new(
                    ctx.accounts.system_program.to_account_info(),
                    anchor_lang::system_program::Transfer {
                        from: ctx.accounts.owner.to_account_info(),
                        to: ctx.accounts.native_vault.to_account_info(),
                    },
                ),
                top_up,
            )?;
        }

        msg!("Token mint: {}", params.token_mint);
        msg!("Router: {}", params.router);
        msg!("Recipients: {} / {}", params.recipient1, params.recipient2);
        msg!("LP token holder: {}", params.lp_token_holder);
        msg!("Liquidity mode: {:?}, slippage: {} bps", params.liquidity_mode, slippage_bps);
        msg!("Native vault rent reserve: {} lamports", rent_reserve);

        emit!(crate::events::DistributorInitialized {
            distributor: ctx.accounts.distributor.key(),
            owner: ctx.accounts.owner.key(),
            token_mint: params.token_mint,
            router: params.router,
            recipient1: params.recipient1,
            recipient2: params.recipient2,
            lp_token_holder: params.lp_token_holder,
            liquidity_mode: params.liquidity_mode,
            slippage_bps,
            rent_reserve,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}

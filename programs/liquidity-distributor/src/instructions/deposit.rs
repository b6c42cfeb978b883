use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::errors::ErrorCode;
use crate::constants::{DISTRIBUTOR_SEED, NATIVE_VAULT_SEED, TOKEN_VAULT_SEED};
use crate::states::Distributor;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct DepositParams {
    /// Lamports pushed into the native vault
    pub native_amount: u64,
    /// Tokens pushed into the token vault
    pub token_amount: u64,
}

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub depositor: Signer<'info>,

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

    #[account(address = distributor.token_mint @ ErrorCode::InvalidAddress)]
    pub token_mint: Box<Account<'info, Mint>>,

    #[account(
        init_if_needed,
        payer = depositor,
        seeds = [TOKEN_VAULT_SEED, token_mint.key().as_ref()],
        bump,
        token::mint = token_mint,
        token::authority = distributor
    )]
    pub token_vault: Box<Account<'info, TokenAccount>>,

    /// Only needed when depositing tokens
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = depositor
    )]
    pub depositor_token_account: Option<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> Deposit<'info> {
    pub fn handle(mut ctx: Context<Deposit>, params: DepositParams) -> Result<()> {
        msg!("Processing deposit from: {}", ctx.accounts.depositor.key());
        msg!("Native amount: {} lamports", params.native_amount);
        msg!("Token amount: {} units", params.token_amount);

        require!(
            params.native_amount > 0 || params.token_amount > 0,
            ErrorCode::InvalidDepositAmount
        );

        if params.native_amount > 0 {
            process_native_deposit(&ctx, params.native_amount)?;
        }

        if params.token_amount > 0 {
            process_token_deposit(&mut ctx, params.token_amount)?;
        }

        msg!("Deposit completed successfully!");

        emit!(crate::events::ProceedsDeposited {
            depositor: ctx.accounts.depositor.key(),
            native_amount: params.native_amount,
            token_amount: params.token_amount,
            native_vault_balance: ctx.accounts.native_vault.lamports(),
            token_vault_balance: ctx.accounts.token_vault.amount,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}

fn process_native_deposit(ctx: &Context<Deposit>, amount: u64) -> Result<()> {
    anchor_lang::system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            anchor_lang::system_program::Transfer {
                from: ctx.accounts.depositor.to_account_info(),
                to: ctx.accounts.native_vault.to_account_info(),
            },
        ),
        amount,
    )
}

fn process_token_deposit(ctx: &mut Context<Deposit>, amount: u64) -> Result<()> {
    let source = ctx
        .accounts
        .depositor_token_account
        .as_ref()
        .ok_or(ErrorCode::InvalidAddress)?;

    anchor_spl::token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            anchor_spl::token::Transfer {
                from: source.to_account_info(),
                to: ctx.accounts.token_vault.to_account_info(),
                authority: ctx.accounts.depositor.to_account_info(),
            },
        ),
        amount,
    )?;

    ctx.accounts.token_vault.reload()?;
    Ok(())
}

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::constants::{DEADLINE_WINDOW_SECS, DISTRIBUTOR_SEED, NATIVE_VAULT_SEED, TOKEN_VAULT_SEED};
use crate::errors::ErrorCode;
use crate::math::{
    apply_slippage, settle_liquidity, settle_swap, tokens_to_offer, DistributionPlan, LiquidityFill, SwapFill,
    VaultBalances,
};
use crate::router::{self, AddLiquidityNativeArgs, RouterAccounts, SwapExactNativeForTokensArgs};
use crate::states::Distributor;
use crate::vault::{token_balance, transfer_from_native_vault};

/// Permissionless split of the native vault between liquidity and the two recipients.
///
/// Pool-specific router accounts are passed as remaining accounts, in the
/// order the router expects them after its fixed accounts.
#[derive(Accounts)]
pub struct DistributeEth<'info> {
    /// Anyone may trigger; pays for the token vault if it does not exist yet
    #[account(mut)]
    pub caller: Signer<'info>,

    #[account(
        mut,
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
        payer = caller,
        seeds = [TOKEN_VAULT_SEED, token_mint.key().as_ref()],
        bump,
        token::mint = token_mint,
        token::authority = distributor
    )]
    pub token_vault: Box<Account<'info, TokenAccount>>,

    /// CHECK: AMM router program, validated against configuration
    #[account(
        executable,
        address = distributor.router @ ErrorCode::InvalidAddress
    )]
    pub router_program: UncheckedAccount<'info>,

    /// CHECK: Receiver of minted pool shares, validated against configuration
    #[account(address = distributor.lp_token_holder @ ErrorCode::InvalidAddress)]
    pub lp_token_holder: UncheckedAccount<'info>,

    /// CHECK: Beneficiary, validated against configuration
    #[account(
        mut,
        address = distributor.recipient1 @ ErrorCode::InvalidAddress
    )]
    pub recipient1: UncheckedAccount<'info>,

    /// CHECK: Beneficiary, validated against configuration; may equal recipient1
    #[account(
        mut,
        address = distributor.recipient2 @ ErrorCode::InvalidAddress
    )]
    pub recipient2: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct DistributeParams {
    /// Minimum tokens accepted from the pre-liquidity swap (unused in held-token mode)
    pub min_tokens_out: u64,
}

/// Accounts touched by the router legs and the payouts
pub(crate) struct DistributionAccounts<'a, 'info> {
    pub router: RouterAccounts<'a, 'info>,
    pub lp_token_holder: AccountInfo<'info>,
    pub recipient1: AccountInfo<'info>,
    pub recipient2: AccountInfo<'info>,
}

pub(crate) struct RouterTerms {
    pub slippage_bps: u16,
    pub min_tokens_out: u64,
    pub deadline: i64,
}

/// What the router legs actually moved, measured from vault balances
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct DistributionReceipt {
    pub swap: SwapFill,
    pub tokens_offered: u64,
    pub liquidity: LiquidityFill,
    pub liquidity_minted: u64,
}

impl DistributionReceipt {
    /// Lamports of the liquidity leg the router left in the vault, across both calls
    pub fn native_refunded(&self, plan: &DistributionPlan) -> u64 {
        plan.swap_native
            .saturating_sub(self.swap.native_spent)
            .saturating_add(self.liquidity.native_refunded)
    }
}

impl<'info> DistributeEth<'info> {
    pub fn handle(
        ctx: Context<'_, '_, 'info, 'info, DistributeEth<'info>>,
        params: DistributeParams,
    ) -> Result<()> {
        msg!("Distributing native proceeds, triggered by: {}", ctx.accounts.caller.key());

        let distributor = &ctx.accounts.distributor;
        let plan = DistributionPlan::new(
            ctx.accounts.native_vault.lamports(),
            distributor.rent_reserve,
            distributor.liquidity_mode,
        )?;

        msg!("Distributable: {} lamports", plan.distributable);
        msg!("Liquidity leg: {} lamports ({} swapped, {} paired)", plan.liquidity_native, plan.swap_native, plan.pair_native);
        msg!("Recipient share: {} lamports each", plan.recipient_share);
        msg!("Carried remainder: {} lamports", plan.remainder);

        let now = Clock::get()?.unix_timestamp;
        let terms = RouterTerms {
            slippage_bps: distributor.slippage_bps,
            min_tokens_out: params.min_tokens_out,
            deadline: now.checked_add(DEADLINE_WINDOW_SECS).ok_or(ErrorCode::MathOverflow)?,
        };

        let distributor_bump = [distributor.bump];
        let vault_bump = [distributor.native_vault_bump];
        let distributor_seeds: &[&[u8]] = &[DISTRIBUTOR_SEED, &distributor_bump];
        let vault_seeds: &[&[u8]] = &[NATIVE_VAULT_SEED, &vault_bump];

        let accounts = DistributionAccounts {
            router: RouterAccounts {
                router_program: ctx.accounts.router_program.to_account_info(),
                authority: distributor.to_account_info(),
                native_source: ctx.accounts.native_vault.to_account_info(),
                token_account: ctx.accounts.token_vault.to_account_info(),
                token_mint: ctx.accounts.token_mint.to_account_info(),
                token_program: ctx.accounts.token_program.to_account_info(),
                system_program: ctx.accounts.system_program.to_account_info(),
                remaining: ctx.remaining_accounts,
            },
            lp_token_holder: ctx.accounts.lp_token_holder.to_account_info(),
            recipient1: ctx.accounts.recipient1.to_account_info(),
            recipient2: ctx.accounts.recipient2.to_account_info(),
        };
        let receipt = execute_distribution(
            &accounts,
            &plan,
            &terms,
            &[distributor_seeds, vault_seeds],
            vault_seeds,
        )?;

        ctx.accounts.distributor.record_distribution(&plan, now)?;
        let native_refunded = receipt.native_refunded(&plan);
        msg!(
            "Distribution #{} completed, {} lamports carried, {} refunded by the router",
            ctx.accounts.distributor.distribution_count,
            plan.remainder,
            native_refunded
        );

        emit!(crate::events::NativeDistributed {
            caller: ctx.accounts.caller.key(),
            distributable: plan.distributable,
            liquidity_native: plan.liquidity_native,
            swapped_native: receipt.swap.native_spent,
            tokens_bought: receipt.swap.tokens_bought,
            tokens_offered: receipt.tokens_offered,
            native_paired: receipt.liquidity.native_paired,
            tokens_paired: receipt.liquidity.tokens_paired,
            native_refunded,
            liquidity_minted: receipt.liquidity_minted,
            lp_token_holder: ctx.accounts.lp_token_holder.key(),
            recipient1: ctx.accounts.recipient1.key(),
            recipient2: ctx.accounts.recipient2.key(),
            recipient_share: plan.recipient_share,
            carried_remainder: plan.remainder,
            distribution_count: ctx.accounts.distributor.distribution_count,
            timestamp: now,
        });

        Ok(())
    }
}

fn vault_balances(router: &RouterAccounts) -> Result<VaultBalances> {
    Ok(VaultBalances {
        native: router.native_source.lamports(),
        tokens: token_balance(&router.token_account)?,
    })
}

/// Runs the external calls of a distribution in order: the optional swap,
/// add-liquidity with the whole token vault, then both recipient payouts.
pub(crate) fn execute_distribution(
    accounts: &DistributionAccounts,
    plan: &DistributionPlan,
    terms: &RouterTerms,
    signer_seeds: &[&[&[u8]]],
    vault_seeds: &[&[u8]],
) -> Result<DistributionReceipt> {
    let router = &accounts.router;
    let mut receipt = DistributionReceipt::default();

    if plan.swap_native > 0 {
        let before = vault_balances(router)?;
        router::swap_exact_native_for_tokens(
            router,
            SwapExactNativeForTokensArgs {
                amount_in: plan.swap_native,
                amount_out_min: terms.min_tokens_out,
                deadline: terms.deadline,
            },
            signer_seeds,
        )?;
        receipt.swap = settle_swap(plan.swap_native, before, vault_balances(router)?)?;
        msg!("Swapped {} lamports for {} tokens", receipt.swap.native_spent, receipt.swap.tokens_bought);
    }

    let before = vault_balances(router)?;
    receipt.tokens_offered = tokens_to_offer(before.tokens)?;

    let outcome = router::add_liquidity_native(
        router,
        &accounts.lp_token_holder,
        AddLiquidityNativeArgs {
            amount_token_desired: receipt.tokens_offered,
            amount_token_min: 0,
            amount_native: plan.pair_native,
            amount_native_min: apply_slippage(plan.pair_native, terms.slippage_bps)?,
            deadline: terms.deadline,
        },
        signer_seeds,
    )?;
    receipt.liquidity = settle_liquidity(plan.pair_native, receipt.tokens_offered, before, vault_balances(router)?)?;
    receipt.liquidity_minted = outcome.map(|o| o.liquidity).unwrap_or_default();

    msg!(
        "Added liquidity: {} lamports + {} tokens, {} shares to {}",
        receipt.liquidity.native_paired,
        receipt.liquidity.tokens_paired,
        receipt.liquidity_minted,
        accounts.lp_token_holder.key()
    );

    for recipient in [&accounts.recipient1, &accounts.recipient2] {
        transfer_from_native_vault(
            &router.system_program,
            &router.native_source,
            recipient,
            plan.recipient_share,
            vault_seeds,
        )?;
    }

    Ok(receipt)
}

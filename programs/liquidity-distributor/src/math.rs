use anchor_lang::prelude::*;
use crate::constants::{BPS_DENOMINATOR, DISTRIBUTION_SHARES, MAX_SLIPPAGE_BPS};
use crate::errors::ErrorCode;
use crate::states::LiquidityMode;

/// Amounts staged before any external call of a distribution
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DistributionPlan {
    /// Vault balance above the rent reserve
    pub distributable: u64,
    /// Lamports routed to the pool, swap portion included
    pub liquidity_native: u64,
    /// Part of the liquidity leg swapped for tokens first
    pub swap_native: u64,
    /// Part of the liquidity leg paired with tokens
    pub pair_native: u64,
    /// Paid to each recipient
    pub recipient_share: u64,
    /// Left in the vault for the next call (at most 2 lamports)
    pub remainder: u64,
}

impl DistributionPlan {
    pub fn new(vault_lamports: u64, rent_reserve: u64, mode: LiquidityMode) -> Result<Self> {
        let distributable = vault_lamports.saturating_sub(rent_reserve);
        let share = distributable / DISTRIBUTION_SHARES;
        require!(share > 0, ErrorCode::NothingToDistribute);

        let remainder = distributable
            .checked_sub(share.checked_mul(DISTRIBUTION_SHARES).ok_or(ErrorCode::MathOverflow)?)
            .ok_or(ErrorCode::MathOverflow)?;

        let swap_native = match mode {
            LiquidityMode::SwapThenAdd => share / 2,
            LiquidityMode::HeldTokens => 0,
        };
        // a one-lamport leg cannot be split into a swap and a pairing
        require!(
            mode == LiquidityMode::HeldTokens || swap_native > 0,
            ErrorCode::NothingToDistribute
        );
        let pair_native = share - swap_native;

        Ok(Self {
            distributable,
            liquidity_native: share,
            swap_native,
            pair_native,
            recipient_share: share,
            remainder,
        })
    }

    /// Lamports leaving the vault if the router consumes the whole liquidity leg
    pub fn native_outflow(&self) -> Result<u64> {
        self.recipient_share
            .checked_mul(2)
            .and_then(|paid| paid.checked_add(self.liquidity_native))
            .ok_or_else(|| error!(ErrorCode::MathOverflow))
    }
}

/// Vault balances read on either side of a router call
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VaultBalances {
    pub native: u64,
    pub tokens: u64,
}

/// What the swap leg actually moved
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SwapFill {
    pub native_spent: u64,
    pub tokens_bought: u64,
}

/// What the add-liquidity leg actually moved
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LiquidityFill {
    pub native_paired: u64,
    pub tokens_paired: u64,
    /// Offered lamports the router left in the vault
    pub native_refunded: u64,
}

/// Measures a swap from vault balances; the router may never spend more than offered
pub fn settle_swap(native_offered: u64, before: VaultBalances, after: VaultBalances) -> Result<SwapFill> {
    let fill = SwapFill {
        native_spent: before.native.saturating_sub(after.native),
        tokens_bought: after.tokens.saturating_sub(before.tokens),
    };
    require!(fill.native_spent <= native_offered, ErrorCode::SwapFailed);
    Ok(fill)
}

/// Tokens offered to add-liquidity: the whole live vault balance, in either mode
pub fn tokens_to_offer(held_tokens: u64) -> Result<u64> {
    require!(held_tokens > 0, ErrorCode::LiquidityAdditionFailed);
    Ok(held_tokens)
}

/// Measures an add-liquidity call from vault balances. Unused lamports and
/// tokens stay in the vaults; consuming more than offered fails the call.
pub fn settle_liquidity(
    native_offered: u64,
    tokens_offered: u64,
    before: VaultBalances,
    after: VaultBalances,
) -> Result<LiquidityFill> {
    let native_paired = before.native.saturating_sub(after.native);
    let tokens_paired = before.tokens.saturating_sub(after.tokens);
    require!(native_paired <= native_offered, ErrorCode::LiquidityAdditionFailed);
    require!(tokens_paired <= tokens_offered, ErrorCode::LiquidityAdditionFailed);

    Ok(LiquidityFill {
        native_paired,
        tokens_paired,
        native_refunded: native_offered - native_paired,
    })
}

/// Lower bound accepted by the router for `amount` at `slippage_bps` tolerance
pub fn apply_slippage(amount: u64, slippage_bps: u16) -> Result<u64> {
    require!(slippage_bps <= MAX_SLIPPAGE_BPS, ErrorCode::InvalidSlippage);
    let kept = BPS_DENOMINATOR - slippage_bps as u64;
    let min = (amount as u128 * kept as u128) / BPS_DENOMINATOR as u128;
    u64::try_from(min).map_err(|_| error!(ErrorCode::MathOverflow))
}

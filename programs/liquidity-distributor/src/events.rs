use anchor_lang::prelude::*;

use crate::states::LiquidityMode;

/// Event emitted when the distributor is created
#[event]
pub struct DistributorInitialized {
    /// Distributor PDA
    pub distributor: Pubkey,
    /// Initial owner
    pub owner: Pubkey,
    /// Token whose proceeds are distributed
    pub token_mint: Pubkey,
    /// AMM router program
    pub router: Pubkey,
    pub recipient1: Pubkey,
    pub recipient2: Pubkey,
    /// Receiver of minted pool shares
    pub lp_token_holder: Pubkey,
    pub liquidity_mode: LiquidityMode,
    pub slippage_bps: u16,
    /// Lamports parked in the native vault to keep it rent exempt
    pub rent_reserve: u64,
    pub timestamp: i64,
}

#[event]
pub struct OwnershipTransferred {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct RecipientsUpdated {
    pub old_recipient1: Pubkey,
    pub old_recipient2: Pubkey,
    pub new_recipient1: Pubkey,
    pub new_recipient2: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct TokenAddressUpdated {
    pub old_token_mint: Pubkey,
    pub new_token_mint: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct RouterUpdated {
    pub old_router: Pubkey,
    pub new_router: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct LpTokenHolderUpdated {
    pub old_lp_token_holder: Pubkey,
    pub new_lp_token_holder: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct LiquidityModeUpdated {
    pub old_mode: LiquidityMode,
    pub new_mode: LiquidityMode,
    pub timestamp: i64,
}

#[event]
pub struct SlippageUpdated {
    pub old_slippage_bps: u16,
    pub new_slippage_bps: u16,
    pub timestamp: i64,
}

/// Event emitted when proceeds are pushed through the deposit instruction
#[event]
pub struct ProceedsDeposited {
    pub depositor: Pubkey,
    /// Lamports added to the native vault
    pub native_amount: u64,
    /// Tokens added to the token vault
    pub token_amount: u64,
    /// Native vault balance after the deposit
    pub native_vault_balance: u64,
    /// Token vault balance after the deposit
    pub token_vault_balance: u64,
    pub timestamp: i64,
}

/// Event emitted for each completed distribution
#[event]
pub struct NativeDistributed {
    /// Whoever triggered the distribution
    pub caller: Pubkey,
    /// Distributable balance `B` at the start of the call
    pub distributable: u64,
    /// Liquidity leg `s` (swap portion included)
    pub liquidity_native: u64,
    /// Lamports swapped for tokens before pairing (0 in held-token mode)
    pub swapped_native: u64,
    /// Tokens received from the swap
    pub tokens_bought: u64,
    /// Whole token vault balance offered to add-liquidity, held tokens included
    pub tokens_offered: u64,
    /// Lamports the router actually consumed when adding liquidity
    pub native_paired: u64,
    /// Tokens the router actually consumed when adding liquidity
    pub tokens_paired: u64,
    /// Liquidity-leg lamports the router did not consume; they stay in the vault
    pub native_refunded: u64,
    /// Pool shares minted to the holder, as reported by the router
    pub liquidity_minted: u64,
    pub lp_token_holder: Pubkey,
    pub recipient1: Pubkey,
    pub recipient2: Pubkey,
    /// Amount sent to each recipient
    pub recipient_share: u64,
    /// Split remainder (`B mod 3`) left in the vault for the next call
    pub carried_remainder: u64,
    pub distribution_count: u64,
    pub timestamp: i64,
}

/// Event emitted when the owner sweeps the native vault
#[event]
pub struct NativeRescued {
    pub owner: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

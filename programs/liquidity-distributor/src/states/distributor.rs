use anchor_lang::prelude::*;
use crate::constants::MAX_SLIPPAGE_BPS;
use crate::errors::ErrorCode;
use crate::math::DistributionPlan;

/// How the liquidity leg of a distribution obtains the token side of the pair
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub enum LiquidityMode {
    /// Swap half of the liquidity leg for tokens, then pair the other half with them
    #[default]
    SwapThenAdd,
    /// Pair the whole liquidity leg with the tokens already held in the token vault
    HeldTokens,
}

/// Singleton configuration and bookkeeping for the distributor
#[account]
#[derive(InitSpace)]
pub struct Distributor {
    /// Only account allowed to reconfigure or rescue
    pub owner: Pubkey,
    /// Token whose tax proceeds are distributed
    pub token_mint: Pubkey,
    /// AMM router program used for swaps and liquidity
    pub router: Pubkey,
    /// First beneficiary, receives one third of each distribution
    pub recipient1: Pubkey,
    /// Second beneficiary, receives one third of each distribution
    pub recipient2: Pubkey,
    /// Receiver of the pool shares minted by the router
    pub lp_token_holder: Pubkey,
    pub liquidity_mode: LiquidityMode,
    /// Tolerated shortfall on the native side of the liquidity call
    pub slippage_bps: u16,
    /// Lamports kept in the native vault so it stays rent exempt
    pub rent_reserve: u64,
    /// Completed distributions
    pub distribution_count: u64,
    /// Lamports ever split by `distribute_eth`
    pub total_native_distributed: u64,
    /// Lamports ever routed into the liquidity leg
    pub total_native_to_liquidity: u64,
    /// Timestamp of the last distribution
    pub last_distribution_ts: i64,
    /// Bump seed for the distributor PDA
    pub bump: u8,
    /// Bump seed for the native vault PDA
    pub native_vault_bump: u8,
}

impl Distributor {
    /// Checks every configured address and the slippage bound
    pub fn validate_config(&self) -> Result<()> {
        require_non_zero(&self.owner)?;
        require_non_zero(&self.token_mint)?;
        require_non_zero(&self.router)?;
        require_non_zero(&self.recipient1)?;
        require_non_zero(&self.recipient2)?;
        require_non_zero(&self.lp_token_holder)?;
        require!(self.slippage_bps <= MAX_SLIPPAGE_BPS, ErrorCode::InvalidSlippage);
        Ok(())
    }

    pub fn assert_owner(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.owner, ErrorCode::Unauthorized);
        Ok(())
    }

    /// Hands ownership to `new_owner`, returning the previous owner
    pub fn transfer_ownership(&mut self, caller: &Pubkey, new_owner: Pubkey) -> Result<Pubkey> {
        self.assert_owner(caller)?;
        require_non_zero(&new_owner)?;
        Ok(std::mem::replace(&mut self.owner, new_owner))
    }

    /// Overwrites both recipients; duplicates are allowed
    pub fn update_recipients(
        &mut self,
        caller: &Pubkey,
        recipient1: Pubkey,
        recipient2: Pubkey,
    ) -> Result<(Pubkey, Pubkey)> {
        self.assert_owner(caller)?;
        require_non_zero(&recipient1)?;
        require_non_zero(&recipient2)?;
        let old = (self.recipient1, self.recipient2);
        self.recipient1 = recipient1;
        self.recipient2 = recipient2;
        Ok(old)
    }

    pub fn update_token_mint(&mut self, caller: &Pubkey, token_mint: Pubkey) -> Result<Pubkey> {
        self.assert_owner(caller)?;
        require_non_zero(&token_mint)?;
        Ok(std::mem::replace(&mut self.token_mint, token_mint))
    }

    pub fn update_router(&mut self, caller: &Pubkey, router: Pubkey) -> Result<Pubkey> {
        self.assert_owner(caller)?;
        require_non_zero(&router)?;
        Ok(std::mem::replace(&mut self.router, router))
    }

    pub fn update_lp_token_holder(&mut self, caller: &Pubkey, holder: Pubkey) -> Result<Pubkey> {
        self.assert_owner(caller)?;
        require_non_zero(&holder)?;
        Ok(std::mem::replace(&mut self.lp_token_holder, holder))
    }

    pub fn update_liquidity_mode(&mut self, caller: &Pubkey, mode: LiquidityMode) -> Result<LiquidityMode> {
        self.assert_owner(caller)?;
        Ok(std::mem::replace(&mut self.liquidity_mode, mode))
    }

    pub fn update_slippage(&mut self, caller: &Pubkey, slippage_bps: u16) -> Result<u16> {
        self.assert_owner(caller)?;
        require!(slippage_bps <= MAX_SLIPPAGE_BPS, ErrorCode::InvalidSlippage);
        Ok(std::mem::replace(&mut self.slippage_bps, slippage_bps))
    }

    /// Folds a completed distribution into the lifetime statistics
    pub fn record_distribution(&mut self, plan: &DistributionPlan, timestamp: i64) -> Result<()> {
        let disbursed = plan.native_outflow()?;

        self.distribution_count = self.distribution_count
            .checked_add(1)
            .ok_or(ErrorCode::MathOverflow)?;

        self.total_native_distributed = self.total_native_distributed
            .checked_add(disbursed)
            .ok_or(ErrorCode::MathOverflow)?;

        self.total_native_to_liquidity = self.total_native_to_liquidity
            .checked_add(plan.liquidity_native)
            .ok_or(ErrorCode::MathOverflow)?;

        self.last_distribution_ts = timestamp;
        Ok(())
    }
}

fn require_non_zero(key: &Pubkey) -> Result<()> {
    require!(*key != Pubkey::default(), ErrorCode::InvalidAddress);
    Ok(())
}

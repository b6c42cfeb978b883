use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Caller is not the distributor owner")]
    Unauthorized,
    #[msg("Address must be non-zero and match the configured account")]
    InvalidAddress,
    #[msg("Native currency transfer was rejected")]
    TransferFailed,
    #[msg("Router rejected the add-liquidity call")]
    LiquidityAdditionFailed,
    #[msg("Router rejected the native-for-token swap")]
    SwapFailed,
    #[msg("Distributable balance too small to split")]
    NothingToDistribute,
    #[msg("Slippage must be at most 10000 bps")]
    InvalidSlippage,
    #[msg("Deposit must carry a non-zero amount")]
    InvalidDepositAmount,
    #[msg("Math overflow occurred during calculation")]
    MathOverflow,
}

// PDA Seeds
pub const DISTRIBUTOR_SEED: &[u8] = b"distributor";
pub const NATIVE_VAULT_SEED: &[u8] = b"native_vault";
pub const TOKEN_VAULT_SEED: &[u8] = b"token_vault";

// Split policy
pub const DISTRIBUTION_SHARES: u64 = 3; // liquidity, recipient1, recipient2

// Router call parameters
pub const BPS_DENOMINATOR: u64 = 10_000;
pub const MAX_SLIPPAGE_BPS: u16 = 10_000; // 100% = no native minimum
pub const DEFAULT_SLIPPAGE_BPS: u16 = 100; // 1%
pub const DEADLINE_WINDOW_SECS: i64 = 300; // 5 minutes

// Router instruction names (Anchor sighash namespace "global")
pub const ADD_LIQUIDITY_NATIVE_IX: &str = "add_liquidity_native";
pub const SWAP_EXACT_NATIVE_FOR_TOKENS_IX: &str = "swap_exact_native_for_tokens";

//! CPI bindings for the AMM router.
//!
//! The router is an external Anchor program. Calls are encoded as the
//! 8-byte `global:<name>` sighash followed by borsh arguments. The fixed
//! accounts come first; pool-specific accounts (pool state, reserves, LP
//! mint, the holder's LP token account, ...) are forwarded untouched from
//! the caller's remaining accounts.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hash;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::solana_program::program::{get_return_data, invoke_signed};

use crate::constants::{ADD_LIQUIDITY_NATIVE_IX, SWAP_EXACT_NATIVE_FOR_TOKENS_IX};
use crate::errors::ErrorCode;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct AddLiquidityNativeArgs {
    pub amount_token_desired: u64,
    pub amount_token_min: u64,
    pub amount_native: u64,
    pub amount_native_min: u64,
    pub deadline: i64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct SwapExactNativeForTokensArgs {
    pub amount_in: u64,
    pub amount_out_min: u64,
    pub deadline: i64,
}

/// Return data published by the router after adding liquidity
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AddLiquidityOutcome {
    pub amount_token: u64,
    pub amount_native: u64,
    pub liquidity: u64,
}

/// Accounts shared by every router call made from the distributor
pub struct RouterAccounts<'a, 'info> {
    pub router_program: AccountInfo<'info>,
    /// Distributor PDA, authority over the token vault
    pub authority: AccountInfo<'info>,
    /// Native vault PDA paying the lamports
    pub native_source: AccountInfo<'info>,
    /// Token vault, source for liquidity and destination for swaps
    pub token_account: AccountInfo<'info>,
    pub token_mint: AccountInfo<'info>,
    pub token_program: AccountInfo<'info>,
    pub system_program: AccountInfo<'info>,
    pub remaining: &'a [AccountInfo<'info>],
}

impl<'a, 'info> RouterAccounts<'a, 'info> {
    fn account_metas(&self, lp_recipient: Option<&AccountInfo<'info>>) -> Vec<AccountMeta> {
        let mut metas = vec![
            AccountMeta::new_readonly(self.authority.key(), true),
            AccountMeta::new(self.native_source.key(), true),
            AccountMeta::new(self.token_account.key(), false),
            AccountMeta::new_readonly(self.token_mint.key(), false),
        ];
        if let Some(recipient) = lp_recipient {
            metas.push(AccountMeta::new_readonly(recipient.key(), false));
        }
        metas.push(AccountMeta::new_readonly(self.token_program.key(), false));
        metas.push(AccountMeta::new_readonly(self.system_program.key(), false));
        metas.extend(self.remaining.iter().map(|account| {
            if account.is_writable {
                AccountMeta::new(account.key(), account.is_signer)
            } else {
                AccountMeta::new_readonly(account.key(), account.is_signer)
            }
        }));
        metas
    }

    fn account_infos(&self, lp_recipient: Option<&AccountInfo<'info>>) -> Vec<AccountInfo<'info>> {
        let mut infos = vec![
            self.authority.clone(),
            self.native_source.clone(),
            self.token_account.clone(),
            self.token_mint.clone(),
        ];
        if let Some(recipient) = lp_recipient {
            infos.push(recipient.clone());
        }
        infos.push(self.token_program.clone());
        infos.push(self.system_program.clone());
        infos.extend(self.remaining.iter().cloned());
        infos.push(self.router_program.clone());
        infos
    }
}

pub fn sighash(name: &str) -> [u8; 8] {
    let preimage = format!("global:{}", name);
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash(preimage.as_bytes()).to_bytes()[..8]);
    discriminator
}

pub fn instruction_data<T: AnchorSerialize>(name: &str, args: &T) -> Result<Vec<u8>> {
    let mut data = sighash(name).to_vec();
    args.serialize(&mut data)
        .map_err(|_| ProgramError::InvalidInstructionData)?;
    Ok(data)
}

/// Swaps `amount_in` lamports for tokens delivered to the token vault.
/// Any router failure surfaces as `SwapFailed`.
pub fn swap_exact_native_for_tokens(
    accounts: &RouterAccounts,
    args: SwapExactNativeForTokensArgs,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let ix = Instruction {
        program_id: accounts.router_program.key(),
        accounts: accounts.account_metas(None),
        data: instruction_data(SWAP_EXACT_NATIVE_FOR_TOKENS_IX, &args)?,
    };
    invoke_signed(&ix, &accounts.account_infos(None), signer_seeds).map_err(|err| {
        msg!("Router swap failed: {:?}", err);
        error!(ErrorCode::SwapFailed)
    })?;
    Ok(())
}

/// Pairs lamports with tokens from the vault, minting pool shares to `lp_recipient`.
/// Any router failure surfaces as `LiquidityAdditionFailed`.
pub fn add_liquidity_native<'info>(
    accounts: &RouterAccounts<'_, 'info>,
    lp_recipient: &AccountInfo<'info>,
    args: AddLiquidityNativeArgs,
    signer_seeds: &[&[&[u8]]],
) -> Result<Option<AddLiquidityOutcome>> {
    let ix = Instruction {
        program_id: accounts.router_program.key(),
        accounts: accounts.account_metas(Some(lp_recipient)),
        data: instruction_data(ADD_LIQUIDITY_NATIVE_IX, &args)?,
    };
    invoke_signed(&ix, &accounts.account_infos(Some(lp_recipient)), signer_seeds).map_err(|err| {
        msg!("Router add-liquidity failed: {:?}", err);
        error!(ErrorCode::LiquidityAdditionFailed)
    })?;
    Ok(parse_outcome(&accounts.router_program.key(), get_return_data()))
}

/// Decodes router return data, ignoring data set by any other program
pub fn parse_outcome(router: &Pubkey, return_data: Option<(Pubkey, Vec<u8>)>) -> Option<AddLiquidityOutcome> {
    match return_data {
        Some((program_id, data)) if program_id == *router => {
            AddLiquidityOutcome::deserialize(&mut data.as_slice()).ok()
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sighash_follows_anchor_convention() {
        let expected = hash(b"global:add_liquidity_native").to_bytes();
        assert_eq!(sighash(ADD_LIQUIDITY_NATIVE_IX), expected[..8]);
        assert_ne!(sighash(ADD_LIQUIDITY_NATIVE_IX), sighash(SWAP_EXACT_NATIVE_FOR_TOKENS_IX));
    }

    #[test]
    fn add_liquidity_data_is_discriminator_then_borsh_args() {
        let args = AddLiquidityNativeArgs {
            amount_token_desired: 500,
            amount_token_min: 0,
            amount_native: 3,
            amount_native_min: 2,
            deadline: -1,
        };
        let data = instruction_data(ADD_LIQUIDITY_NATIVE_IX, &args).unwrap();

        assert_eq!(data.len(), 8 + 5 * 8);
        assert_eq!(data[..8], sighash(ADD_LIQUIDITY_NATIVE_IX));
        assert_eq!(data[8..16], 500u64.to_le_bytes());
        assert_eq!(data[16..24], 0u64.to_le_bytes());
        assert_eq!(data[24..32], 3u64.to_le_bytes());
        assert_eq!(data[32..40], 2u64.to_le_bytes());
        assert_eq!(data[40..48], (-1i64).to_le_bytes());
    }

    #[test]
    fn lp_recipient_and_pool_accounts_are_forwarded() {
        let keys: Vec<Pubkey> = (0..9).map(|_| Pubkey::new_unique()).collect();
        let owner = Pubkey::new_unique();
        let mut lamports = [0u64; 9];
        let mut data: [[u8; 0]; 9] = [[]; 9];
        let mut infos: Vec<AccountInfo> = keys
            .iter()
            .zip(lamports.iter_mut())
            .zip(data.iter_mut())
            .map(|((key, lamports), data)| AccountInfo::new(key, false, false, lamports, data, &owner, false, 0))
            .collect();
        // pool state: writable, not a signer
        infos[8].is_writable = true;

        let (fixed, pool) = infos.split_at(8);
        let accounts = RouterAccounts {
            router_program: fixed[0].clone(),
            authority: fixed[1].clone(),
            native_source: fixed[2].clone(),
            token_account: fixed[3].clone(),
            token_mint: fixed[4].clone(),
            token_program: fixed[5].clone(),
            system_program: fixed[6].clone(),
            remaining: pool,
        };
        let holder = &fixed[7];

        let metas = accounts.account_metas(Some(holder));
        assert_eq!(metas.len(), 8);
        assert_eq!(metas[0], AccountMeta::new_readonly(keys[1], true));
        assert_eq!(metas[1], AccountMeta::new(keys[2], true));
        assert_eq!(metas[4], AccountMeta::new_readonly(keys[7], false));
        assert_eq!(metas[7], AccountMeta::new(keys[8], false));

        let swap_metas = accounts.account_metas(None);
        assert_eq!(swap_metas.len(), 7);
        assert!(swap_metas.iter().all(|meta| meta.pubkey != keys[7]));

        let infos = accounts.account_infos(Some(holder));
        assert_eq!(infos.len(), 9);
        assert_eq!(infos.last().map(|info| *info.key), Some(keys[0]));
    }

    #[test]
    fn outcome_only_trusted_from_router() {
        let router = Pubkey::new_unique();
        let outcome = AddLiquidityOutcome { amount_token: 7, amount_native: 3, liquidity: 42 };
        let mut bytes = Vec::new();
        outcome.serialize(&mut bytes).unwrap();

        assert_eq!(parse_outcome(&router, Some((router, bytes.clone()))), Some(outcome));
        assert_eq!(parse_outcome(&router, Some((Pubkey::new_unique(), bytes))), None);
        assert_eq!(parse_outcome(&router, Some((router, vec![1, 2, 3]))), None);
        assert_eq!(parse_outcome(&router, None), None);
    }
}

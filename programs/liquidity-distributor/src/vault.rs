use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;
use crate::errors::ErrorCode;

/// Moves lamports out of the native vault PDA, surfacing any rejection as `TransferFailed`
pub fn transfer_from_native_vault<'info>(
    system_program: &AccountInfo<'info>,
    native_vault: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    amount: u64,
    vault_seeds: &[&[u8]],
) -> Result<()> {
    anchor_lang::system_program::transfer(
        CpiContext::new_with_signer(
            system_program.clone(),
            anchor_lang::system_program::Transfer {
                from: native_vault.clone(),
                to: to.clone(),
            },
            &[vault_seeds],
        ),
        amount,
    )
    .map_err(|err| {
        msg!("Transfer of {} lamports to {} rejected: {:?}", amount, to.key(), err);
        error!(ErrorCode::TransferFailed)
    })
}

/// Empties the native vault into `to`, rent reserve included. Returns the amount moved.
pub fn sweep_native_vault<'info>(
    system_program: &AccountInfo<'info>,
    native_vault: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    vault_seeds: &[&[u8]],
) -> Result<u64> {
    let amount = native_vault.lamports();
    if amount > 0 {
        transfer_from_native_vault(system_program, native_vault, to, amount, vault_seeds)?;
    }
    Ok(amount)
}

/// Live token balance of a vault, read straight from account data
pub fn token_balance(token_account: &AccountInfo) -> Result<u64> {
    let data = token_account.try_borrow_data()?;
    let account = TokenAccount::try_deserialize(&mut &data[..])?;
    Ok(account.amount)
}

//! Off-chain stand-in for the runtime, used by unit tests that drive the CPI paths.
//!
//! Installs syscall stubs that execute system transfers and a constant-price
//! router against the `AccountInfo`s handed to `invoke_signed`. Per-test
//! state lives in thread locals, so tests running in parallel never share it.

use std::cell::RefCell;
use std::sync::Once;

use anchor_lang::prelude::*;
use anchor_lang::solana_program::entrypoint::ProgramResult;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::solana_program::program_stubs::{set_syscall_stubs, SyscallStubs};

use crate::constants::{ADD_LIQUIDITY_NATIVE_IX, SWAP_EXACT_NATIVE_FOR_TOKENS_IX};
use crate::router::{sighash, AddLiquidityNativeArgs, AddLiquidityOutcome, SwapExactNativeForTokensArgs};

pub const ROUTER_ID: Pubkey = Pubkey::new_from_array([7; 32]);
/// Tokens the pool pays per swapped lamport
pub const TOKENS_PER_LAMPORT: u64 = 100;
/// Pool shares minted per paired lamport
pub const SHARES_PER_LAMPORT: u64 = 10;

// SPL token account layout: mint, owner, amount, delegate, state, ...
const TOKEN_ACCOUNT_LEN: usize = 165;
const AMOUNT_OFFSET: usize = 64;
const STATE_OFFSET: usize = 108;

// Fixed router account positions, see `RouterAccounts::account_metas`
const NATIVE_SOURCE: usize = 1;
const TOKEN_ACCOUNT: usize = 2;
const LP_RECIPIENT: usize = 4;

#[derive(Clone, Copy, Debug, Default)]
pub struct RouterBehaviour {
    pub reject_swap: bool,
    pub reject_add: bool,
    /// Lamports add-liquidity takes instead of the offered amount
    pub native_taken: Option<u64>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouterLog {
    pub tokens_offered: Vec<u64>,
    pub shares_minted: Vec<(Pubkey, u64)>,
}

thread_local! {
    static BEHAVIOUR: RefCell<RouterBehaviour> = RefCell::new(RouterBehaviour::default());
    static LOG: RefCell<RouterLog> = RefCell::new(RouterLog::default());
    static REJECTING: RefCell<Vec<Pubkey>> = RefCell::new(Vec::new());
    static RETURN_DATA: RefCell<Option<(Pubkey, Vec<u8>)>> = RefCell::new(None);
}

static INSTALL: Once = Once::new();

/// Installs the stubs once per process and resets this thread's router state
pub fn install() {
    install_with(RouterBehaviour::default());
}

pub fn install_with(behaviour: RouterBehaviour) {
    INSTALL.call_once(|| {
        set_syscall_stubs(Box::new(Runtime));
    });
    BEHAVIOUR.with(|b| *b.borrow_mut() = behaviour);
    LOG.with(|l| *l.borrow_mut() = RouterLog::default());
    REJECTING.with(|r| r.borrow_mut().clear());
    RETURN_DATA.with(|d| *d.borrow_mut() = None);
}

/// Makes every system transfer into `key` fail
pub fn reject_transfers_to(key: Pubkey) {
    REJECTING.with(|r| r.borrow_mut().push(key));
}

pub fn router_log() -> RouterLog {
    LOG.with(|l| l.borrow().clone())
}

/// Owned backing storage for an `AccountInfo`
pub struct TestAccount {
    pub key: Pubkey,
    owner: Pubkey,
    lamports: u64,
    data: Vec<u8>,
    executable: bool,
}

impl TestAccount {
    pub fn wallet(lamports: u64) -> Self {
        Self::with_key(Pubkey::new_unique(), lamports)
    }

    pub fn with_key(key: Pubkey, lamports: u64) -> Self {
        Self {
            key,
            owner: anchor_lang::system_program::ID,
            lamports,
            data: Vec::new(),
            executable: false,
        }
    }

    pub fn program(key: Pubkey) -> Self {
        Self {
            key,
            owner: Pubkey::default(),
            lamports: 1,
            data: Vec::new(),
            executable: true,
        }
    }

    pub fn token_account(mint: &Pubkey, authority: &Pubkey, amount: u64) -> Self {
        let mut data = vec![0u8; TOKEN_ACCOUNT_LEN];
        data[..32].copy_from_slice(mint.as_ref());
        data[32..64].copy_from_slice(authority.as_ref());
        data[AMOUNT_OFFSET..AMOUNT_OFFSET + 8].copy_from_slice(&amount.to_le_bytes());
        data[STATE_OFFSET] = 1;
        Self {
            key: Pubkey::new_unique(),
            owner: anchor_spl::token::ID,
            lamports: 2_039_280,
            data,
            executable: false,
        }
    }

    pub fn info(&mut self) -> AccountInfo<'_> {
        AccountInfo::new(
            &self.key,
            false,
            true,
            &mut self.lamports,
            &mut self.data,
            &self.owner,
            self.executable,
            0,
        )
    }
}

struct Runtime;

impl SyscallStubs for Runtime {
    fn sol_invoke_signed(
        &self,
        instruction: &Instruction,
        account_infos: &[AccountInfo],
        _signers_seeds: &[&[&[u8]]],
    ) -> ProgramResult {
        if instruction.program_id == anchor_lang::system_program::ID {
            system_transfer(instruction, account_infos)
        } else if instruction.program_id == ROUTER_ID {
            route(instruction, account_infos)
        } else {
            Err(ProgramError::IncorrectProgramId)
        }
    }

    fn sol_get_return_data(&self) -> Option<(Pubkey, Vec<u8>)> {
        RETURN_DATA.with(|d| d.borrow().clone())
    }
}

fn find<'a, 'info>(
    infos: &'a [AccountInfo<'info>],
    instruction: &Instruction,
    position: usize,
) -> std::result::Result<&'a AccountInfo<'info>, ProgramError> {
    let key = instruction
        .accounts
        .get(position)
        .map(|meta| meta.pubkey)
        .ok_or(ProgramError::NotEnoughAccountKeys)?;
    infos
        .iter()
        .find(|info| *info.key == key)
        .ok_or(ProgramError::NotEnoughAccountKeys)
}

fn move_lamports(from: &AccountInfo, to: &AccountInfo, amount: u64) -> ProgramResult {
    {
        let mut from_lamports = from.try_borrow_mut_lamports()?;
        if **from_lamports < amount {
            return Err(ProgramError::InsufficientFunds);
        }
        **from_lamports -= amount;
    }
    **to.try_borrow_mut_lamports()? += amount;
    Ok(())
}

fn adjust_tokens(token_account: &AccountInfo, credit: u64, debit: u64) -> ProgramResult {
    let mut data = token_account.try_borrow_mut_data()?;
    let slot = &mut data[AMOUNT_OFFSET..AMOUNT_OFFSET + 8];
    let mut amount = [0u8; 8];
    amount.copy_from_slice(slot);
    let amount = u64::from_le_bytes(amount)
        .checked_add(credit)
        .and_then(|amount| amount.checked_sub(debit))
        .ok_or(ProgramError::InsufficientFunds)?;
    slot.copy_from_slice(&amount.to_le_bytes());
    Ok(())
}

fn system_transfer(instruction: &Instruction, infos: &[AccountInfo]) -> ProgramResult {
    // bincode SystemInstruction::Transfer: u32 tag 2, then u64 lamports
    let data = &instruction.data;
    if data.len() != 12 || data[..4] != 2u32.to_le_bytes() {
        return Err(ProgramError::InvalidInstructionData);
    }
    let mut lamports = [0u8; 8];
    lamports.copy_from_slice(&data[4..]);

    let from = find(infos, instruction, 0)?;
    let to = find(infos, instruction, 1)?;
    if REJECTING.with(|r| r.borrow().contains(to.key)) {
        return Err(ProgramError::InvalidAccountData);
    }
    move_lamports(from, to, u64::from_le_bytes(lamports))
}

fn route(instruction: &Instruction, infos: &[AccountInfo]) -> ProgramResult {
    let behaviour = BEHAVIOUR.with(|b| *b.borrow());
    let (discriminator, mut args) = instruction.data.split_at(8);
    let native_source = find(infos, instruction, NATIVE_SOURCE)?;
    let token_account = find(infos, instruction, TOKEN_ACCOUNT)?;

    if discriminator == sighash(SWAP_EXACT_NATIVE_FOR_TOKENS_IX) {
        let args = SwapExactNativeForTokensArgs::deserialize(&mut args)
            .map_err(|_| ProgramError::InvalidInstructionData)?;
        let tokens_out = args.amount_in * TOKENS_PER_LAMPORT;
        if behaviour.reject_swap || tokens_out < args.amount_out_min {
            return Err(ProgramError::Custom(1));
        }
        // pool reserve follows authority, source, token, mint, token program, system program
        let pool = find(infos, instruction, 6)?;
        move_lamports(native_source, pool, args.amount_in)?;
        adjust_tokens(token_account, tokens_out, 0)
    } else if discriminator == sighash(ADD_LIQUIDITY_NATIVE_IX) {
        let args = AddLiquidityNativeArgs::deserialize(&mut args)
            .map_err(|_| ProgramError::InvalidInstructionData)?;
        LOG.with(|l| l.borrow_mut().tokens_offered.push(args.amount_token_desired));

        let native = behaviour.native_taken.unwrap_or(args.amount_native);
        if behaviour.reject_add || args.amount_token_desired == 0 || native < args.amount_native_min {
            return Err(ProgramError::Custom(2));
        }
        let tokens = args.amount_token_desired.min(native * TOKENS_PER_LAMPORT);
        let pool = find(infos, instruction, 7)?;
        let lp_recipient = find(infos, instruction, LP_RECIPIENT)?;
        move_lamports(native_source, pool, native)?;
        adjust_tokens(token_account, 0, tokens)?;

        let liquidity = native * SHARES_PER_LAMPORT;
        LOG.with(|l| l.borrow_mut().shares_minted.push((*lp_recipient.key, liquidity)));

        let mut outcome = Vec::new();
        AddLiquidityOutcome { amount_token: tokens, amount_native: native, liquidity }
            .serialize(&mut outcome)
            .map_err(|_| ProgramError::InvalidInstructionData)?;
        RETURN_DATA.with(|d| *d.borrow_mut() = Some((ROUTER_ID, outcome)));
        Ok(())
    } else {
        Err(ProgramError::InvalidInstructionData)
    }
}

//! Client for the `sol_deposit` vault program.
//!
//! [`DepositContext`] carries the connection and program id explicitly.
//! Address derivation and instruction building are pure and usable offline.

pub mod amount;
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod instructions;

use anchor_lang::prelude::Pubkey;

pub use config::{Commitment, Config, Settings};
pub use context::DepositContext;
pub use error::{CliError, VaultFailure};

/// Vault PDA and bump for `owner` under `program_id`.
pub fn vault_address(program_id: &Pubkey, owner: &Pubkey) -> (Pubkey, u8) {
    sol_deposit::find_vault_address(owner, program_id)
}

use anchor_lang::prelude::*;

use crate::{VaultError, VAULT_SEED};

/// Per-owner vault. Lives at the PDA `[VAULT_SEED, owner]`.
///
/// `balance` tracks deposited lamports only. The account's lamports also hold
/// the rent-exempt reserve paid at creation, so the account always carries at
/// least `rent_minimum + balance`.
#[account]
pub struct VaultState {
    /// Owner allowed to move funds in and out. Fixed at creation.
    pub owner: Pubkey,
    /// Lamports deposited and not yet withdrawn
    pub balance: u64,
    /// Canonical bump of the vault PDA
    pub bump: u8,
    /// Unix timestamp of the last deposit, 0 before the first one
    pub last_deposit: i64,
}

impl VaultState {
    pub const LEN: usize = 8 + // discriminator
        32 + // owner
        8 + // balance
        1 + // bump
        8; // last_deposit

    /// Add `amount` to the tracked balance and return the new balance.
    pub fn credit(&mut self, amount: u64) -> Result<u64> {
        require!(amount > 0, VaultError::InvalidAmount);

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(VaultError::Overflow)?;
        Ok(self.balance)
    }

    /// Remove `amount` from the tracked balance and return the new balance.
    /// The balance is left untouched when the debit is rejected.
    pub fn debit(&mut self, amount: u64) -> Result<u64> {
        require!(amount > 0, VaultError::InvalidAmount);

        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(VaultError::InsufficientVaultBalance)?;
        Ok(self.balance)
    }
}

/// Derive the vault address for `owner` under `program_id`.
pub fn find_vault_address(owner: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_SEED, owner.as_ref()], program_id)
}

/// Reject a deposit the owner's system account cannot cover.
pub fn ensure_spendable(available: u64, amount: u64) -> Result<()> {
    require_gte!(available, amount, VaultError::InsufficientFunds);
    Ok(())
}

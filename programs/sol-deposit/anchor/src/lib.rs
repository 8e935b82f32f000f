use anchor_lang::prelude::*;

declare_id!("EL3Wpg3SVp5xqEW3SryBwmTsKBNR8Sg3VEfdvejmLMR9");

pub mod events;
pub mod instructions;
pub mod state;

pub use events::*;
pub use instructions::*;
pub use state::*;

/// Namespace tag for per-owner vault PDAs: `[VAULT_SEED, owner]`.
pub const VAULT_SEED: &[u8] = b"vault";

#[program]
pub mod sol_deposit {
    use super::*;

    /// Create the caller's vault with a zero balance.
    ///
    /// `init` refuses an address that is already in use, so a vault can only
    /// be created once per owner.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize(ctx)
    }

    /// Move `amount` lamports from the owner into their vault.
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit(ctx, amount)
    }

    /// Return `amount` lamports from the vault to its owner.
    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw(ctx, amount)
    }
}

#[error_code]
pub enum VaultError {
    /// Reserved: `init` on an existing vault fails in the System Program
    /// (code 0), which clients normalize to this variant.
    #[msg("Vault already initialized for this owner")]
    AlreadyInitialized,
    #[msg("Signer is not the vault owner")]
    InvalidSigner,
    #[msg("Amount must be greater than zero")]
    InvalidAmount,
    #[msg("Owner does not hold enough lamports for this deposit")]
    InsufficientFunds,
    #[msg("Withdrawal exceeds the vault balance")]
    InsufficientVaultBalance,
    /// Reserved: a missing vault fails Anchor deserialization (code 3012),
    /// which clients normalize to this variant.
    #[msg("Vault account does not exist")]
    AccountNotFound,
    #[msg("Integer overflow in balance calculation")]
    Overflow,
}

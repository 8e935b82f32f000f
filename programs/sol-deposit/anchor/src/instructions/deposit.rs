use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::events::DepositMade;
use crate::state::{ensure_spendable, VaultState};
use crate::{VaultError, VAULT_SEED};

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    /// Seeds come from the stored owner, so a foreign signer reaches the
    /// has_one check instead of a derivation mismatch.
    #[account(
        mut,
        seeds = [VAULT_SEED, vault.owner.as_ref()],
        bump = vault.bump,
        has_one = owner @ VaultError::InvalidSigner
    )]
    pub vault: Account<'info, VaultState>,

    pub system_program: Program<'info, System>,
}

pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    ensure_spendable(ctx.accounts.owner.lamports(), amount)?;

    let balance = ctx.accounts.vault.credit(amount)?;

    let cpi_ctx = CpiContext::new(
        ctx.accounts.system_program.to_account_info(),
        Transfer {
            from: ctx.accounts.owner.to_account_info(),
            to: ctx.accounts.vault.to_account_info(),
        },
    );
    system_program::transfer(cpi_ctx, amount)?;

    let timestamp = Clock::get()?.unix_timestamp;
    let vault = &mut ctx.accounts.vault;
    vault.last_deposit = timestamp;

    emit!(DepositMade {
        vault: vault.key(),
        owner: vault.owner,
        amount,
        balance,
        timestamp,
    });

    msg!("[sol-deposit] deposit amount={} balance={}", amount, balance);
    Ok(())
}

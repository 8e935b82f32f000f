use anchor_lang::prelude::*;

use crate::events::WithdrawMade;
use crate::state::VaultState;
use crate::{VaultError, VAULT_SEED};

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, vault.owner.as_ref()],
        bump = vault.bump,
        has_one = owner @ VaultError::InvalidSigner
    )]
    pub vault: Account<'info, VaultState>,

    pub system_program: Program<'info, System>,
}

/// The vault is owned by this program, so lamports leave it by direct debit
/// rather than through the System Program. `balance` never counts the rent
/// reserve, which keeps the account rent exempt.
pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    let balance = ctx.accounts.vault.debit(amount)?;

    **ctx.accounts.vault.to_account_info().try_borrow_mut_lamports()? -= amount;
    **ctx.accounts.owner.to_account_info().try_borrow_mut_lamports()? += amount;

    emit!(WithdrawMade {
        vault: ctx.accounts.vault.key(),
        owner: ctx.accounts.owner.key(),
        amount,
        balance,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("[sol-deposit] withdraw amount={} balance={}", amount, balance);
    Ok(())
}

use anchor_lang::prelude::*;

use crate::events::VaultInitialized;
use crate::state::VaultState;
use crate::VAULT_SEED;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    /// `init` fails while the address is in use, so a second initialize for
    /// the same owner aborts before any data is written.
    #[account(
        init,
        payer = owner,
        space = VaultState::LEN,
        seeds = [VAULT_SEED, owner.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, VaultState>,

    pub system_program: Program<'info, System>,
}

pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let vault = &mut ctx.accounts.vault;

    vault.owner = ctx.accounts.owner.key();
    vault.balance = 0;
    vault.bump = ctx.bumps.vault;
    vault.last_deposit = 0;

    emit!(VaultInitialized {
        vault: vault.key(),
        owner: vault.owner,
        bump: vault.bump,
    });

    msg!("[sol-deposit] vault initialized owner={} bump={}", vault.owner, vault.bump);
    Ok(())
}

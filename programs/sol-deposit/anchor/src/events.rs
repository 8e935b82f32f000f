use anchor_lang::prelude::*;

#[event]
pub struct VaultInitialized {
    pub vault: Pubkey,
    pub owner: Pubkey,
    pub bump: u8,
}

#[event]
pub struct DepositMade {
    pub vault: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub balance: u64,
    pub timestamp: i64,
}

#[event]
pub struct WithdrawMade {
    pub vault: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub balance: u64,
    pub timestamp: i64,
}

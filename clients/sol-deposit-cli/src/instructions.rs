//! Instruction builders. Pure: no RPC access.

use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::{system_program, InstructionData, ToAccountMetas};
use sol_deposit::{accounts, instruction};

use crate::vault_address;

pub fn initialize(program_id: &Pubkey, owner: &Pubkey) -> Instruction {
    let (vault, _) = vault_address(program_id, owner);
    Instruction {
        program_id: *program_id,
        accounts: accounts::Initialize {
            owner: *owner,
            vault,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: instruction::Initialize {}.data(),
    }
}

/// `vault_owner` selects the vault; `signer` is who signs. They differ only
/// when someone tries to move funds in a vault they do not own.
pub fn deposit(program_id: &Pubkey, vault_owner: &Pubkey, signer: &Pubkey, amount: u64) -> Instruction {
    let (vault, _) = vault_address(program_id, vault_owner);
    Instruction {
        program_id: *program_id,
        accounts: accounts::Deposit {
            owner: *signer,
            vault,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: instruction::Deposit { amount }.data(),
    }
}

pub fn withdraw(program_id: &Pubkey, vault_owner: &Pubkey, signer: &Pubkey, amount: u64) -> Instruction {
    let (vault, _) = vault_address(program_id, vault_owner);
    Instruction {
        program_id: *program_id,
        accounts: accounts::Withdraw {
            owner: *signer,
            vault,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: instruction::Withdraw { amount }.data(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_accounts() {
        let owner = Pubkey::new_unique();
        let ix = initialize(&sol_deposit::ID, &owner);

        assert_eq!(ix.program_id, sol_deposit::ID);
        assert_eq!(ix.accounts.len(), 3);
        assert_eq!(ix.accounts[0].pubkey, owner);
        assert!(ix.accounts[0].is_signer && ix.accounts[0].is_writable);
        assert_eq!(ix.accounts[1].pubkey, vault_address(&sol_deposit::ID, &owner).0);
        assert!(!ix.accounts[1].is_signer && ix.accounts[1].is_writable);
        assert_eq!(ix.accounts[2].pubkey, system_program::ID);
        assert!(!ix.accounts[2].is_writable);
        assert_eq!(ix.data.len(), 8);
    }

    #[test]
    fn amount_is_little_endian_after_discriminator() {
        let owner = Pubkey::new_unique();
        let dep = deposit(&sol_deposit::ID, &owner, &owner, 100);
        let wd = withdraw(&sol_deposit::ID, &owner, &owner, 40);

        assert_eq!(dep.data.len(), 16);
        assert_eq!(&dep.data[8..], &100u64.to_le_bytes());
        assert_eq!(&wd.data[8..], &40u64.to_le_bytes());
        assert_ne!(dep.data[..8], wd.data[..8]);
        assert_ne!(dep.data[..8], initialize(&sol_deposit::ID, &owner).data[..]);
    }

    #[test]
    fn foreign_signer_targets_owner_vault() {
        let owner = Pubkey::new_unique();
        let stranger = Pubkey::new_unique();
        let ix = withdraw(&sol_deposit::ID, &owner, &stranger, 10);

        assert_eq!(ix.accounts[0].pubkey, stranger);
        assert_eq!(ix.accounts[1].pubkey, vault_address(&sol_deposit::ID, &owner).0);
    }
}

use std::ops::Deref;

use anchor_client::{Client, Program};
use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::instruction::Instruction;
use log::{debug, info};
use sol_deposit::VaultState;
use solana_sdk::signature::{Signature, Signer};

use crate::error::{CliError, VaultFailure};
use crate::{instructions, vault_address};

/// Everything a call needs to reach the program: the RPC-backed program
/// handle and the program id. Built once and handed to each call.
pub struct DepositContext<C> {
    program: Program<C>,
    program_id: Pubkey,
}

impl<C: Deref<Target = impl Signer> + Clone> DepositContext<C> {
    pub fn new(client: &Client<C>, program_id: Pubkey) -> Result<Self, CliError> {
        let program = client.program(program_id)?;
        Ok(Self {
            program,
            program_id,
        })
    }

    pub fn program_id(&self) -> Pubkey {
        self.program_id
    }

    /// The payer signs every request and owns the vault being addressed.
    pub fn owner(&self) -> Pubkey {
        self.program.payer()
    }

    pub fn vault_address(&self) -> Pubkey {
        vault_address(&self.program_id, &self.owner()).0
    }

    pub fn initialize(&self) -> Result<Signature, CliError> {
        info!("initializing vault {}", self.vault_address());
        self.send(instructions::initialize(&self.program_id, &self.owner()))
    }

    pub fn deposit(&self, lamports: u64) -> Result<Signature, CliError> {
        let owner = self.owner();
        info!("depositing {} lamports into {}", lamports, self.vault_address());
        self.send(instructions::deposit(&self.program_id, &owner, &owner, lamports))
    }

    pub fn withdraw(&self, lamports: u64) -> Result<Signature, CliError> {
        let owner = self.owner();
        info!("withdrawing {} lamports from {}", lamports, self.vault_address());
        self.send(instructions::withdraw(&self.program_id, &owner, &owner, lamports))
    }

    /// Fetch and decode the owner's vault.
    pub fn vault(&self) -> Result<VaultState, CliError> {
        let address = self.vault_address();
        debug!("fetching vault {}", address);
        self.program
            .account::<VaultState>(address)
            .map_err(|err| match err {
                anchor_client::ClientError::AccountNotFound => {
                    CliError::Vault(VaultFailure::AccountNotFound)
                }
                other => CliError::from_client(other),
            })
    }

    fn send(&self, ix: Instruction) -> Result<Signature, CliError> {
        let signature = self
            .program
            .request()
            .instruction(ix)
            .send()
            .map_err(CliError::from_client)?;
        debug!("confirmed {}", signature);
        Ok(signature)
    }
}

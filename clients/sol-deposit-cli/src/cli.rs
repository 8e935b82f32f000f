use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{Commitment, Config};

#[derive(Debug, Parser)]
#[command(author, version, about = "Deposit and withdraw SOL through a per-owner vault")]
pub struct Cli {
    /// YAML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Path to the owner's keypair
    #[arg(short, long)]
    pub keypair: Option<String>,
    /// RPC URL
    #[arg(short, long)]
    pub rpc_url: Option<String>,
    /// Program id of the deployed vault program
    #[arg(short, long)]
    pub program_id: Option<String>,
    #[arg(long, value_enum)]
    pub commitment: Option<Commitment>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Create the vault for the keypair's owner
    Init,
    /// Deposit SOL into the vault
    Deposit {
        /// Amount in SOL, e.g. 0.5
        amount: String,
    },
    /// Withdraw SOL from the vault
    Withdraw {
        /// Amount in SOL, e.g. 0.5
        amount: String,
    },
    /// Show the vault balance
    Balance,
    /// Print the vault address without touching the network
    Address {
        /// Owner to derive for, defaults to the keypair's owner
        #[arg(long)]
        owner: Option<String>,
    },
}

impl Cli {
    /// Flag values as a config layer that overrides the file.
    pub fn overrides(&self) -> Config {
        Config {
            rpc_url: self.rpc_url.clone(),
            keypair: self.keypair.clone(),
            program_id: self.program_id.clone(),
            commitment: self.commitment,
        }
    }
}

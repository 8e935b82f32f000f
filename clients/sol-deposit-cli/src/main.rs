use std::rc::Rc;

use anchor_client::{Client, Cluster};
use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use sol_deposit_cli::amount::{lamports_to_sol, sol_to_lamports};
use sol_deposit_cli::cli::{Cli, Command};
use sol_deposit_cli::config::parse_pubkey;
use sol_deposit_cli::{vault_address, CliError, Config, DepositContext, Settings};
use solana_sdk::signature::{read_keypair_file, Keypair};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let file = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let settings = Settings::try_from(file.merge(cli.overrides()))?;

    if let Command::Address { owner: Some(owner) } = &cli.command {
        let owner = parse_pubkey(owner)?;
        let (vault, bump) = vault_address(&settings.program_id, &owner);
        println!("{} (bump {})", vault, bump);
        return Ok(());
    }

    let payer = Rc::new(read_keypair_file(&settings.keypair).map_err(|err| CliError::Keypair {
        path: settings.keypair.clone(),
        reason: err.to_string(),
    })?);

    let ctx = connect(&settings, payer)?;
    info!("owner {} program {}", ctx.owner(), ctx.program_id());

    match cli.command {
        Command::Init => {
            let signature = ctx.initialize()?;
            println!("Initialize transaction signature: {}", signature);
        }
        Command::Deposit { amount } => {
            let signature = ctx.deposit(sol_to_lamports(&amount)?)?;
            println!("Deposit transaction signature: {}", signature);
        }
        Command::Withdraw { amount } => {
            let signature = ctx.withdraw(sol_to_lamports(&amount)?)?;
            println!("Withdraw transaction signature: {}", signature);
        }
        Command::Balance => {
            let vault = ctx.vault()?;
            println!(
                "Vault balance: {} lamports ({} SOL)",
                vault.balance,
                lamports_to_sol(vault.balance)
            );
        }
        Command::Address { .. } => {
            let (vault, bump) = vault_address(&ctx.program_id(), &ctx.owner());
            println!("{} (bump {})", vault, bump);
        }
    }
    Ok(())
}

fn connect(settings: &Settings, payer: Rc<Keypair>) -> Result<DepositContext<Rc<Keypair>>> {
    let cluster: Cluster = settings
        .rpc_url
        .parse()
        .with_context(|| format!("invalid RPC URL {}", settings.rpc_url))?;
    let client = Client::new_with_options(cluster, payer, settings.commitment.into());
    Ok(DepositContext::new(&client, settings.program_id)?)
}

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anchor_lang::prelude::Pubkey;
use serde::Deserialize;
use solana_sdk::commitment_config::CommitmentConfig;

use crate::error::CliError;

pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8899";
pub const DEFAULT_KEYPAIR: &str = "~/.config/solana/id.json";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Commitment {
    Processed,
    #[default]
    Confirmed,
    Finalized,
}

impl From<Commitment> for CommitmentConfig {
    fn from(commitment: Commitment) -> Self {
        match commitment {
            Commitment::Processed => CommitmentConfig::processed(),
            Commitment::Confirmed => CommitmentConfig::confirmed(),
            Commitment::Finalized => CommitmentConfig::finalized(),
        }
    }
}

/// Optional settings, as read from the YAML file or collected from flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub rpc_url: Option<String>,
    pub keypair: Option<String>,
    pub program_id: Option<String>,
    pub commitment: Option<Commitment>,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CliError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CliError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|source| CliError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Values set in `overrides` win over values in `self`.
    pub fn merge(self, overrides: Config) -> Config {
        Config {
            rpc_url: overrides.rpc_url.or(self.rpc_url),
            keypair: overrides.keypair.or(self.keypair),
            program_id: overrides.program_id.or(self.program_id),
            commitment: overrides.commitment.or(self.commitment),
        }
    }
}

/// Fully resolved settings with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub rpc_url: String,
    pub keypair: PathBuf,
    pub program_id: Pubkey,
    pub commitment: Commitment,
}

impl TryFrom<Config> for Settings {
    type Error = CliError;

    fn try_from(config: Config) -> Result<Self, Self::Error> {
        let program_id = match config.program_id {
            Some(id) => parse_pubkey(&id)?,
            None => sol_deposit::ID,
        };
        let keypair = config.keypair.unwrap_or_else(|| DEFAULT_KEYPAIR.to_string());

        Ok(Settings {
            rpc_url: config
                .rpc_url
                .unwrap_or_else(|| DEFAULT_RPC_URL.to_string()),
            keypair: PathBuf::from(shellexpand::tilde(&keypair).into_owned()),
            program_id,
            commitment: config.commitment.unwrap_or_default(),
        })
    }
}

pub fn parse_pubkey(input: &str) -> Result<Pubkey, CliError> {
    Pubkey::from_str(input.trim()).map_err(|_| CliError::InvalidPubkey(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let settings = Settings::try_from(Config::default()).unwrap();
        assert_eq!(settings.rpc_url, DEFAULT_RPC_URL);
        assert_eq!(settings.program_id, sol_deposit::ID);
        assert_eq!(settings.commitment, Commitment::Confirmed);
        assert!(settings.keypair.ends_with(".config/solana/id.json"));
    }

    #[test]
    fn overrides_win_over_file_values() {
        let file = Config {
            rpc_url: Some("http://file:8899".into()),
            keypair: Some("/file/id.json".into()),
            program_id: None,
            commitment: Some(Commitment::Finalized),
        };
        let flags = Config {
            rpc_url: Some("http://flag:8899".into()),
            ..Config::default()
        };

        let merged = file.merge(flags);
        assert_eq!(merged.rpc_url.as_deref(), Some("http://flag:8899"));
        assert_eq!(merged.keypair.as_deref(), Some("/file/id.json"));
        assert_eq!(merged.commitment, Some(Commitment::Finalized));
    }

    #[test]
    fn bad_program_id_is_rejected() {
        let config = Config {
            program_id: Some("not-a-key".into()),
            ..Config::default()
        };
        assert!(matches!(
            Settings::try_from(config),
            Err(CliError::InvalidPubkey(_))
        ));
    }

    #[test]
    fn commitment_maps_to_rpc_config() {
        assert_eq!(
            CommitmentConfig::from(Commitment::Processed),
            CommitmentConfig::processed()
        );
        assert_eq!(
            CommitmentConfig::from(Commitment::default()),
            CommitmentConfig::confirmed()
        );
    }
}

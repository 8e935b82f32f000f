use std::path::PathBuf;

use sol_deposit::VaultError;
use thiserror::Error;

/// Why the program (or the runtime on its behalf) rejected a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VaultFailure {
    #[error("vault already initialized")]
    AlreadyInitialized,
    #[error("signer is not the vault owner")]
    InvalidSigner,
    #[error("amount must be greater than zero")]
    InvalidAmount,
    #[error("insufficient funds in the owner's wallet")]
    InsufficientFunds,
    #[error("withdrawal exceeds the vault balance")]
    InsufficientVaultBalance,
    #[error("vault account not found")]
    AccountNotFound,
    #[error("balance overflow")]
    Overflow,
}

// System Program `AccountAlreadyInUse`, raised by `init` on an existing vault.
const SYSTEM_ACCOUNT_IN_USE: u32 = 0;
// Anchor framework codes.
const ACCOUNT_NOT_SIGNER: u32 = 3010;
const ACCOUNT_NOT_INITIALIZED: u32 = 3012;

const CUSTOM_ERROR_MARKER: &str = "custom program error: 0x";

impl VaultFailure {
    /// Map a custom error code from a failed transaction to a failure kind.
    pub fn from_custom_code(code: u32) -> Option<Self> {
        let failure = match code {
            SYSTEM_ACCOUNT_IN_USE => Self::AlreadyInitialized,
            ACCOUNT_NOT_SIGNER => Self::InvalidSigner,
            ACCOUNT_NOT_INITIALIZED => Self::AccountNotFound,
            c if c == u32::from(VaultError::AlreadyInitialized) => Self::AlreadyInitialized,
            c if c == u32::from(VaultError::InvalidSigner) => Self::InvalidSigner,
            c if c == u32::from(VaultError::InvalidAmount) => Self::InvalidAmount,
            c if c == u32::from(VaultError::InsufficientFunds) => Self::InsufficientFunds,
            c if c == u32::from(VaultError::InsufficientVaultBalance) => {
                Self::InsufficientVaultBalance
            }
            c if c == u32::from(VaultError::AccountNotFound) => Self::AccountNotFound,
            c if c == u32::from(VaultError::Overflow) => Self::Overflow,
            _ => return None,
        };
        Some(failure)
    }

    /// Pull the `custom program error: 0x..` code out of an RPC error message.
    pub fn classify(message: &str) -> Option<Self> {
        let start = message.find(CUSTOM_ERROR_MARKER)? + CUSTOM_ERROR_MARKER.len();
        let hex: String = message[start..]
            .chars()
            .take_while(char::is_ascii_hexdigit)
            .collect();
        let code = u32::from_str_radix(&hex, 16).ok()?;
        Self::from_custom_code(code)
    }
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read config {}: {source}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid pubkey {0:?}")]
    InvalidPubkey(String),
    #[error("invalid SOL amount {input:?}: {reason}")]
    InvalidAmount { input: String, reason: &'static str },
    #[error("failed to read keypair {}: {reason}", path.display())]
    Keypair { path: PathBuf, reason: String },
    #[error("transaction rejected: {0}")]
    Vault(VaultFailure),
    #[error(transparent)]
    Client(#[from] anchor_client::ClientError),
}

impl CliError {
    /// Surface program rejections as [`CliError::Vault`], everything else as-is.
    pub fn from_client(err: anchor_client::ClientError) -> Self {
        match VaultFailure::classify(&err.to_string()) {
            Some(failure) => Self::Vault(failure),
            None => Self::Client(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn program_codes_follow_declaration_order() {
        assert_eq!(
            VaultFailure::from_custom_code(6000),
            Some(VaultFailure::AlreadyInitialized)
        );
        assert_eq!(
            VaultFailure::from_custom_code(6004),
            Some(VaultFailure::InsufficientVaultBalance)
        );
        assert_eq!(VaultFailure::from_custom_code(6006), Some(VaultFailure::Overflow));
        assert_eq!(VaultFailure::from_custom_code(6007), None);
    }

    #[test]
    fn runtime_codes_are_normalized() {
        assert_eq!(
            VaultFailure::from_custom_code(0),
            Some(VaultFailure::AlreadyInitialized)
        );
        assert_eq!(
            VaultFailure::from_custom_code(3010),
            Some(VaultFailure::InvalidSigner)
        );
        assert_eq!(
            VaultFailure::from_custom_code(3012),
            Some(VaultFailure::AccountNotFound)
        );
        assert_eq!(VaultFailure::from_custom_code(2003), None);
    }

    #[test]
    fn classify_reads_hex_code_from_message() {
        let msg = "RPC response error -32002: Transaction simulation failed: \
                   Error processing Instruction 0: custom program error: 0x1774 [5 log messages]";
        assert_eq!(
            VaultFailure::classify(msg),
            Some(VaultFailure::InsufficientVaultBalance)
        );

        let in_use = "Error processing Instruction 0: custom program error: 0x0";
        assert_eq!(
            VaultFailure::classify(in_use),
            Some(VaultFailure::AlreadyInitialized)
        );
    }

    #[test]
    fn classify_ignores_unrelated_messages() {
        assert_eq!(VaultFailure::classify("connection refused"), None);
        assert_eq!(VaultFailure::classify("custom program error: 0x"), None);
        assert_eq!(VaultFailure::classify("custom program error: 0x9999"), None);
    }
}

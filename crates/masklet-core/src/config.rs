//! YAML configuration.
//!
//! Loads `config.yaml` into [`Config`]. Every field has a default so a missing
//! file or a partial file still yields a usable configuration; environment
//! variables override the file.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use alloy::primitives::{address, Address};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Masks NFT contract on Ethereum mainnet.
pub const MASKS_MAINNET: Address = address!("C2C747E0F7004F9E8817Db2ca4997657a7746928");

/// Name Changing Token contract on Ethereum mainnet.
pub const NCT_MAINNET: Address = address!("8A9c4dfe8b9D8962B31e4e16F8321C44d48e246E");

/// Default read-only endpoint.
pub const DEFAULT_RPC_URL: &str = "https://mainnet.infura.io/v3/";

/// Overrides `rpc_url`.
pub const ENV_RPC_URL: &str = "MASKLET_RPC_URL";
/// Overrides `wallet_url`.
pub const ENV_WALLET_URL: &str = "MASKLET_WALLET_URL";

/// Errors from loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Read-only JSON-RPC endpoint used for `call`s.
    pub rpc_url: String,
    /// Endpoint of the injected wallet, if any. Accounts behind it sign
    /// on the wallet side.
    pub wallet_url: Option<String>,
    /// Masks (ERC-721) contract address.
    pub masks_address: Address,
    /// NCT (ERC-20) contract address.
    pub nct_address: Address,
    /// Offset applied when mapping a token index to its revealed artwork.
    pub starting_index: u64,
    /// Demo chain server settings.
    pub devnet: DevnetConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            wallet_url: None,
            masks_address: MASKS_MAINNET,
            nct_address: NCT_MAINNET,
            starting_index: 0,
            devnet: DevnetConfig::default(),
        }
    }
}

/// Settings for the local demo chain and its HTTP API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DevnetConfig {
    /// Address the HTTP server binds to.
    pub bind: SocketAddr,
    /// Number of pre-funded accounts on the test chain.
    pub accounts: u32,
    /// Starting balance of each account, in ether.
    pub balance_ether: u64,
    /// Number of addresses derived from the mnemonic for the HD wallet listing.
    pub hd_addresses: u32,
    /// Value sent by `GET /transact`, in wei.
    pub transfer_wei: u64,
}

impl Default for DevnetConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8080)),
            accounts: 3,
            balance_ether: 100,
            hd_addresses: 4,
            transfer_wei: 10 * 100_000,
        }
    }
}

impl Config {
    /// Parse config from a YAML string. Call [`Config::validate`] once
    /// overrides have been applied.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load config from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Load config from `path` if it exists, otherwise fall back to defaults.
    /// Environment overrides are applied in both cases.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            tracing::debug!("loading config from {}", path.display());
            Self::from_file(path)?
        } else {
            tracing::debug!("no config at {}, using defaults", path.display());
            Self::default()
        };
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Apply `MASKLET_*` environment overrides.
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(ENV_RPC_URL) {
            self.rpc_url = url;
        }
        if let Ok(url) = std::env::var(ENV_WALLET_URL) {
            self.wallet_url = if url.is_empty() { None } else { Some(url) };
        }
    }

    /// Check the settings every command depends on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rpc_url.trim().is_empty() {
            return Err(ConfigError::Invalid("rpc_url must not be empty".into()));
        }
        Ok(())
    }
}

impl DevnetConfig {
    /// Check the demo server settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.accounts < 2 {
            return Err(ConfigError::Invalid(
                "devnet.accounts must be at least 2 (sender and recipient)".into(),
            ));
        }
        Ok(())
    }
}

/// Resolve the config path (default: `~/.masklet/config.yaml`).
pub fn resolve_config_path(config: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = config {
        return Ok(path);
    }

    let home = dirs::home_dir()
        .ok_or_else(|| ConfigError::Invalid("could not determine home directory".into()))?;
    Ok(home.join(".masklet").join("config.yaml"))
}

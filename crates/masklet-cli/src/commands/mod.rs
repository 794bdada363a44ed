//! CLI subcommand implementations.

use std::path::PathBuf;

use masklet_core::config::{resolve_config_path, Config};
use masklet_evm::Masks;

pub mod connect;
pub mod devnet;
pub mod read;
pub mod sign;
pub mod util;
pub mod write;

/// Load the config (defaults when the file does not exist).
pub(crate) fn load_config(config: Option<PathBuf>) -> Result<Config, Box<dyn std::error::Error>> {
    let path = resolve_config_path(config)?;
    Ok(Config::load_or_default(&path)?)
}

/// Build the Masks helpers from the config.
pub(crate) fn load_masks(config: Option<PathBuf>) -> Result<Masks, Box<dyn std::error::Error>> {
    let config = load_config(config)?;
    tracing::debug!("read-only endpoint: {}", config.rpc_url);
    Ok(Masks::from_config(&config)?)
}

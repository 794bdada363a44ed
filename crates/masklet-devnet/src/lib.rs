//! # masklet-devnet
//!
//! A local in-memory Ethereum test chain wrapped in a two-route HTTP API.
//!
//! - `GET /` — node info, block number, mnemonic, accounts, balances
//! - `GET /transact` — fixed-value transfer between the first two accounts

pub mod chain;
pub mod handlers;
pub mod hd;
pub mod mnemonic;
pub mod routes;
pub mod server;
pub mod types;

pub use server::{AppState, DevnetServer};

/// Errors from setting up or running the demo server.
#[derive(Debug, thiserror::Error)]
pub enum DevnetError {
    #[error("config error: {0}")]
    Config(#[from] masklet_core::ConfigError),
    #[error("mnemonic error: {0}")]
    Mnemonic(String),
    #[error("generated mnemonic failed validation")]
    InvalidMnemonic,
    #[error("key derivation error: {0}")]
    Derive(String),
    #[error("failed to start test chain: {0}")]
    Spawn(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

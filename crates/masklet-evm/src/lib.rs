//! # masklet-evm
//!
//! Masks NFT / NCT contract access on top of alloy.
//!
//! ## Modules
//!
//! - [`abi`] — contract interfaces using alloy's `sol!` macro
//! - [`adapter`] — read-only JSON-RPC adapter for view calls, blocks and receipts
//! - [`wallet`] — injected wallet: account access, contract sends, personal signatures
//! - [`masks`] — the helper facade combining both

pub mod abi;
pub mod adapter;
pub mod masks;
pub mod wallet;

// Re-export key types for convenience.
pub use adapter::{AdapterError, Contracts, EvmAdapter};
pub use masks::{Masks, MasksError};
pub use wallet::{InjectedWallet, WalletError};

// Re-export alloy primitives used in the public API.
pub use alloy::primitives::{Address, Bytes, B256, U256};

//! # masklet
//!
//! Contract helpers for the **Masks** NFT collection and its companion
//! Name Changing Token (NCT), plus a demo server wrapping a local test chain.
//!
//! The heavy lifting (JSON-RPC, ABI encoding, signing, mining) is done by
//! `alloy` and the node it talks to; this workspace only wires the calls.

pub use masklet_core as core;
pub use masklet_devnet as devnet;
pub use masklet_evm as evm;

/// Returns the library version string.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

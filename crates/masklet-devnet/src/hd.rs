//! BIP-44 hierarchical deterministic address derivation.
//!
//! Derives EVM addresses from a mnemonic using the standard path `m/44'/60'/0'/0/n`.

use alloy::primitives::Address;
use alloy::signers::local::coins_bip39::English;
use alloy::signers::local::MnemonicBuilder;

use crate::DevnetError;

/// Derives the first `count` addresses of `mnemonic`.
pub fn derive_addresses(mnemonic: &str, count: u32) -> Result<Vec<Address>, DevnetError> {
    (0..count).map(|index| derive(mnemonic, index)).collect()
}

/// Derives the address at account index `index`.
pub fn derive(mnemonic: &str, index: u32) -> Result<Address, DevnetError> {
    let signer = MnemonicBuilder::<English>::default()
        .phrase(mnemonic)
        .index(index)
        .map_err(|e| DevnetError::Derive(e.to_string()))?
        .build()
        .map_err(|e| DevnetError::Derive(e.to_string()))?;
    Ok(signer.address())
}

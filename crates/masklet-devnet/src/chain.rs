//! Local in-memory test chain.
//!
//! Spawns an `anvil` process seeded from a mnemonic. The chain lives in
//! memory only and is torn down when [`LocalChain`] is dropped.

use alloy::network::Ethereum;
use alloy::node_bindings::{Anvil, AnvilInstance};
use alloy::primitives::Address;
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use masklet_core::DevnetConfig;
use tracing::info;

use crate::DevnetError;

/// A running test chain and a provider connected to it.
pub struct LocalChain {
    anvil: AnvilInstance,
    provider: DynProvider<Ethereum>,
}

impl std::fmt::Debug for LocalChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalChain")
            .field("endpoint", &self.anvil.endpoint())
            .field("chain_id", &self.anvil.chain_id())
            .finish()
    }
}

impl LocalChain {
    /// Starts a chain with `config.accounts` accounts derived from `mnemonic`,
    /// each funded with `config.balance_ether` ether.
    pub fn spawn(config: &DevnetConfig, mnemonic: &str) -> Result<Self, DevnetError> {
        let anvil = Anvil::new()
            .mnemonic(mnemonic)
            .arg("--accounts")
            .arg(config.accounts.to_string())
            .arg("--balance")
            .arg(config.balance_ether.to_string())
            .try_spawn()
            .map_err(|e| DevnetError::Spawn(e.to_string()))?;

        info!(
            "test chain listening on {} (chain id {}, {} accounts)",
            anvil.endpoint(),
            anvil.chain_id(),
            anvil.addresses().len()
        );

        let provider = ProviderBuilder::new()
            .connect_http(anvil.endpoint_url())
            .erased();

        Ok(Self { anvil, provider })
    }

    /// Provider connected to the chain.
    pub fn provider(&self) -> &DynProvider<Ethereum> {
        &self.provider
    }

    /// HTTP endpoint of the chain.
    pub fn endpoint(&self) -> String {
        self.anvil.endpoint()
    }

    /// Pre-funded accounts, in derivation order.
    pub fn addresses(&self) -> &[Address] {
        self.anvil.addresses()
    }
}

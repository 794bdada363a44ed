//! Read-only chain adapter.
//!
//! Connects to an EVM-compatible JSON-RPC endpoint and exposes the Masks and
//! NCT view functions. Every method is a single `eth_call` (or block/receipt
//! lookup) whose answer is returned unmodified.

use alloy::eips::BlockId;
use alloy::network::Ethereum;
use alloy::primitives::{Address, Bytes, B256, U256};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::types::{TransactionReceipt, TransactionRequest};
use alloy::sol_types::SolCall;
use thiserror::Error;

use crate::abi::{IMasks, INct};

/// Errors from adapter operations.
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("RPC error: {0}")]
    Rpc(String),
    #[error("URL parse error: {0}")]
    UrlParse(String),
    #[error("ABI decode error: {0}")]
    AbiDecode(String),
    #[error("block not found: {0:?}")]
    BlockNotFound(BlockId),
}

/// Result alias for adapter operations.
pub type Result<T> = std::result::Result<T, AdapterError>;

/// Deployed addresses of the two contracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contracts {
    /// Masks (ERC-721).
    pub masks: Address,
    /// Name Changing Token (ERC-20).
    pub nct: Address,
}

impl From<&masklet_core::Config> for Contracts {
    fn from(config: &masklet_core::Config) -> Self {
        Self {
            masks: config.masks_address,
            nct: config.nct_address,
        }
    }
}

/// Read-only access to the Masks and NCT contracts.
pub struct EvmAdapter {
    provider: DynProvider<Ethereum>,
    rpc_url: String,
    contracts: Contracts,
}

impl std::fmt::Debug for EvmAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvmAdapter")
            .field("rpc_url", &self.rpc_url)
            .field("contracts", &self.contracts)
            .finish()
    }
}

impl EvmAdapter {
    /// Creates a new adapter for the given RPC URL.
    pub fn new(rpc_url: &str, contracts: Contracts) -> Result<Self> {
        let url: alloy::transports::http::reqwest::Url = rpc_url
            .parse()
            .map_err(|e| AdapterError::UrlParse(format!("{e}")))?;

        let provider = ProviderBuilder::new().connect_http(url).erased();

        Ok(Self {
            provider,
            rpc_url: rpc_url.to_string(),
            contracts,
        })
    }

    /// Wraps an existing provider.
    pub fn from_provider(provider: DynProvider<Ethereum>, contracts: Contracts) -> Self {
        Self {
            provider,
            rpc_url: String::from("<provided>"),
            contracts,
        }
    }

    /// Returns a reference to the underlying provider.
    pub fn provider(&self) -> &DynProvider<Ethereum> {
        &self.provider
    }

    /// Returns the RPC URL.
    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    /// Returns the contract addresses this adapter talks to.
    pub fn contracts(&self) -> Contracts {
        self.contracts
    }

    /// Executes a view call against `to` and decodes its return value.
    async fn call<C: SolCall>(&self, to: Address, call: C) -> Result<C::Return> {
        let data = call.abi_encode();

        let result: Bytes = self
            .provider
            .call(TransactionRequest::default().to(to).input(data.into()))
            .await
            .map_err(|e| AdapterError::Rpc(e.to_string()))?;

        <C as SolCall>::abi_decode_returns(&result)
            .map_err(|e| AdapterError::AbiDecode(e.to_string()))
    }

    /// Number of Masks held by `owner`.
    pub async fn balance_of(&self, owner: Address) -> Result<U256> {
        self.call(self.contracts.masks, IMasks::balanceOfCall { owner })
            .await
    }

    /// NCT balance of `owner`, in the token's smallest unit.
    pub async fn nct_balance_of(&self, owner: Address) -> Result<U256> {
        self.call(self.contracts.nct, INct::balanceOfCall { owner })
            .await
    }

    /// Token ID of the `index`-th Mask owned by `owner`.
    pub async fn token_of_owner_by_index(&self, owner: Address, index: U256) -> Result<U256> {
        self.call(
            self.contracts.masks,
            IMasks::tokenOfOwnerByIndexCall { owner, index },
        )
        .await
    }

    /// NCT accrued and not yet claimed for Mask `index`.
    pub async fn accumulated(&self, index: U256) -> Result<U256> {
        self.call(
            self.contracts.nct,
            INct::accumulatedCall { tokenIndex: index },
        )
        .await
    }

    /// Current name of Mask `index` (empty if never named).
    pub async fn token_name(&self, index: U256) -> Result<String> {
        self.call(
            self.contracts.masks,
            IMasks::tokenNameByIndexCall { index },
        )
        .await
    }

    /// Whether `name` is already taken by some Mask.
    pub async fn is_name_reserved(&self, name: &str) -> Result<bool> {
        self.call(
            self.contracts.masks,
            IMasks::isNameReservedCall {
                nameString: name.to_string(),
            },
        )
        .await
    }

    /// Owner of Mask `index`.
    pub async fn owner_of(&self, index: U256) -> Result<Address> {
        self.call(self.contracts.masks, IMasks::ownerOfCall { tokenId: index })
            .await
    }

    /// Queries the native (ETH) balance for an address.
    pub async fn get_eth_balance(&self, address: Address) -> Result<U256> {
        self.provider
            .get_balance(address)
            .await
            .map_err(|e| AdapterError::Rpc(e.to_string()))
    }

    /// Unix timestamp of the given block.
    pub async fn block_timestamp(&self, block: BlockId) -> Result<u64> {
        let block_data = self
            .provider
            .get_block(block)
            .await
            .map_err(|e| AdapterError::Rpc(e.to_string()))?
            .ok_or(AdapterError::BlockNotFound(block))?;

        Ok(block_data.header.timestamp)
    }

    /// Receipt of a mined transaction, `None` while pending or unknown.
    pub async fn transaction_receipt(&self, hash: B256) -> Result<Option<TransactionReceipt>> {
        self.provider
            .get_transaction_receipt(hash)
            .await
            .map_err(|e| AdapterError::Rpc(e.to_string()))
    }
}

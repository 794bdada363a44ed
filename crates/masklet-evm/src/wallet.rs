//! Injected wallet client.
//!
//! A wallet is reached through its own JSON-RPC endpoint; the accounts it
//! exposes are unlocked on the wallet side, so state-changing calls go out as
//! `eth_sendTransaction` and signatures as `personal_sign`. Nothing is signed
//! locally.

use alloy::network::Ethereum;
use alloy::primitives::{Address, Bytes, B256};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::types::TransactionReceipt;
use thiserror::Error;
use tracing::{debug, warn};

use crate::abi::{IMasks, INct};
use crate::adapter::Contracts;

/// Masks contract bound to the wallet provider.
pub type MasksContract = IMasks::IMasksInstance<DynProvider<Ethereum>>;

/// NCT contract bound to the wallet provider.
pub type NctContract = INct::INctInstance<DynProvider<Ethereum>>;

/// Errors from wallet operations.
#[derive(Debug, Error)]
pub enum WalletError {
    #[error("URL parse error: {0}")]
    UrlParse(String),
    #[error("RPC error: {0}")]
    Rpc(String),
}

/// Result alias for wallet operations.
pub type Result<T> = std::result::Result<T, WalletError>;

/// A connection to a user's wallet.
#[derive(Clone)]
pub struct InjectedWallet {
    provider: DynProvider<Ethereum>,
    url: String,
}

impl std::fmt::Debug for InjectedWallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InjectedWallet")
            .field("url", &self.url)
            .finish()
    }
}

impl InjectedWallet {
    /// Connects to the wallet endpoint at `url`.
    pub fn connect(url: &str) -> Result<Self> {
        let parsed: alloy::transports::http::reqwest::Url = url
            .parse()
            .map_err(|e| WalletError::UrlParse(format!("{e}")))?;

        // Nonce, gas and fees are filled by the wallet.
        let provider = ProviderBuilder::new()
            .disable_recommended_fillers()
            .connect_http(parsed)
            .erased();

        Ok(Self {
            provider,
            url: url.to_string(),
        })
    }

    /// Wraps an existing provider.
    pub fn from_provider(provider: DynProvider<Ethereum>) -> Self {
        Self {
            provider,
            url: String::from("<provided>"),
        }
    }

    /// Returns a reference to the underlying provider.
    pub fn provider(&self) -> &DynProvider<Ethereum> {
        &self.provider
    }

    /// Asks the wallet for account access and returns the first account.
    ///
    /// A refused access request is not fatal: the already exposed accounts
    /// are listed either way. `None` means the wallet exposes no account.
    pub async fn enable(&self) -> Result<Option<Address>> {
        if let Err(e) = self
            .provider
            .raw_request::<_, Vec<Address>>("eth_requestAccounts".into(), ())
            .await
        {
            warn!("eth_requestAccounts failed: {e}");
        }

        let accounts = self
            .provider
            .get_accounts()
            .await
            .map_err(|e| WalletError::Rpc(e.to_string()))?;

        debug!("wallet exposes {} account(s)", accounts.len());
        Ok(accounts.first().copied())
    }

    /// Masks contract whose transactions are sent from `from`.
    pub fn masks_contract(
        &self,
        contracts: &Contracts,
        from: Address,
    ) -> BoundContract<MasksContract> {
        BoundContract {
            instance: IMasks::new(contracts.masks, self.provider.clone()),
            from,
        }
    }

    /// NCT contract whose transactions are sent from `from`.
    pub fn nct_contract(
        &self,
        contracts: &Contracts,
        from: Address,
    ) -> BoundContract<NctContract> {
        BoundContract {
            instance: INct::new(contracts.nct, self.provider.clone()),
            from,
        }
    }

    /// Receipt of a transaction as seen by the wallet's node.
    pub async fn transaction_receipt(&self, hash: B256) -> Result<Option<TransactionReceipt>> {
        self.provider
            .get_transaction_receipt(hash)
            .await
            .map_err(|e| WalletError::Rpc(e.to_string()))
    }

    /// Requests an EIP-191 personal signature of `data` from `account`.
    pub async fn personal_sign(&self, data: &[u8], account: Address) -> Result<Bytes> {
        self.provider
            .raw_request::<_, Bytes>(
                "personal_sign".into(),
                (Bytes::copy_from_slice(data), account),
            )
            .await
            .map_err(|e| WalletError::Rpc(e.to_string()))
    }
}

/// A contract instance paired with the account it sends from.
#[derive(Debug, Clone)]
pub struct BoundContract<C> {
    /// Generated contract instance.
    pub instance: C,
    /// Default sender.
    pub from: Address,
}

impl BoundContract<MasksContract> {
    /// Contract address.
    pub fn address(&self) -> Address {
        *self.instance.address()
    }
}

impl BoundContract<NctContract> {
    /// Contract address.
    pub fn address(&self) -> Address {
        *self.instance.address()
    }
}

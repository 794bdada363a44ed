//! High-level Masks helpers.
//!
//! [`Masks`] bundles the read-only [`EvmAdapter`] with an optional
//! [`InjectedWallet`]. Reads go to the read-only endpoint unless they need the
//! user's account; writes and signatures always go through the wallet. A
//! missing wallet is reported as `None`, or as [`MasksError::NoWallet`] when
//! the operation cannot proceed without one.

use alloy::eips::BlockId;
use alloy::network::Ethereum;
use alloy::primitives::{Address, Bytes, B256, U256};
use alloy::providers::PendingTransactionBuilder;
use alloy::rpc::types::TransactionReceipt;
use masklet_core::{reveal, units, Config, Redirect};
use thiserror::Error;
use tracing::{debug, info};

use crate::adapter::{AdapterError, Contracts, EvmAdapter};
use crate::wallet::{BoundContract, InjectedWallet, MasksContract, NctContract, WalletError};

/// Most Masks a single account may hold through the sale.
pub const MAX_PER_ACCOUNT: u64 = 20;

/// Errors from the Masks helpers.
#[derive(Debug, Error)]
pub enum MasksError {
    #[error("adapter error: {0}")]
    Adapter(#[from] AdapterError),
    #[error("wallet error: {0}")]
    Wallet(#[from] WalletError),
    #[error("contract error: {0}")]
    Contract(String),
    #[error("transaction error: {0}")]
    Transaction(String),
    #[error("no wallet connected, go to {0}")]
    NoWallet(Redirect),
}

/// Result alias for Masks helpers.
pub type Result<T> = std::result::Result<T, MasksError>;

/// Masks contract helpers.
#[derive(Debug)]
pub struct Masks {
    adapter: EvmAdapter,
    wallet: Option<InjectedWallet>,
    starting_index: u64,
}

impl Masks {
    /// Builds the helpers from parts.
    pub fn new(adapter: EvmAdapter, wallet: Option<InjectedWallet>, starting_index: u64) -> Self {
        Self {
            adapter,
            wallet,
            starting_index,
        }
    }

    /// Builds the helpers from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let adapter = EvmAdapter::new(&config.rpc_url, Contracts::from(config))?;
        let wallet = config
            .wallet_url
            .as_deref()
            .map(InjectedWallet::connect)
            .transpose()?;
        Ok(Self::new(adapter, wallet, config.starting_index))
    }

    /// Read-only adapter.
    pub fn adapter(&self) -> &EvmAdapter {
        &self.adapter
    }

    /// Connected wallet, if configured.
    pub fn wallet(&self) -> Option<&InjectedWallet> {
        self.wallet.as_ref()
    }

    /// Requests wallet access and returns the default account.
    ///
    /// `None` if no wallet is configured or it exposes no account.
    pub async fn eth_enabled(&self) -> Result<Option<Address>> {
        match &self.wallet {
            Some(wallet) => Ok(wallet.enable().await?),
            None => Ok(None),
        }
    }

    /// Wallet and default account, or `NoWallet` redirecting back to `back`.
    async fn require_wallet(&self, back: &str) -> Result<(&InjectedWallet, Address)> {
        let no_wallet = || MasksError::NoWallet(Redirect::no_wallet(back));
        let wallet = self.wallet.as_ref().ok_or_else(no_wallet)?;
        let account = wallet.enable().await?.ok_or_else(no_wallet)?;
        Ok((wallet, account))
    }

    /// `address`, or the default account when absent.
    async fn owner_or_default(&self, address: Option<Address>) -> Result<Address> {
        match address {
            Some(address) => Ok(address),
            None => Ok(self.require_wallet("/").await?.1),
        }
    }

    /// Masks contract bound to the default account.
    pub async fn masks_contract(&self) -> Result<Option<BoundContract<MasksContract>>> {
        let Some(wallet) = &self.wallet else {
            return Ok(None);
        };
        let contracts = self.adapter.contracts();
        Ok(wallet
            .enable()
            .await?
            .map(|from| wallet.masks_contract(&contracts, from)))
    }

    /// NCT contract bound to the default account.
    pub async fn nct_contract(&self) -> Result<Option<BoundContract<NctContract>>> {
        let Some(wallet) = &self.wallet else {
            return Ok(None);
        };
        let contracts = self.adapter.contracts();
        Ok(wallet
            .enable()
            .await?
            .map(|from| wallet.nct_contract(&contracts, from)))
    }

    /// How many more Masks the default account may buy.
    pub async fn max_user_can_buy(&self) -> Result<u64> {
        let (_, account) = self.require_wallet("/").await?;
        let owned = self.adapter.balance_of(account).await?;
        Ok(remaining_allowance(owned))
    }

    /// Masks held by `address` or the default account.
    pub async fn balance_of(&self, address: Option<Address>) -> Result<U256> {
        let owner = self.owner_or_default(address).await?;
        Ok(self.adapter.balance_of(owner).await?)
    }

    /// NCT held by `address` or the default account.
    pub async fn nct_balance_of(&self, address: Option<Address>) -> Result<U256> {
        let owner = self.owner_or_default(address).await?;
        Ok(self.adapter.nct_balance_of(owner).await?)
    }

    /// Token ID of the `index`-th Mask held by `address` or the default account.
    pub async fn token_of_owner_by_index(
        &self,
        index: U256,
        address: Option<Address>,
    ) -> Result<U256> {
        let owner = self.owner_or_default(address).await?;
        Ok(self.adapter.token_of_owner_by_index(owner, index).await?)
    }

    /// NCT accrued for Mask `index`.
    ///
    /// Asked through the wallet when one is connected, otherwise through the
    /// read-only endpoint.
    pub async fn accumulated_for_index(&self, index: U256) -> Result<U256> {
        let Some(nct) = self.nct_contract().await? else {
            return Ok(self.adapter.accumulated(index).await?);
        };

        nct.instance
            .accumulated(index)
            .from(nct.from)
            .call()
            .await
            .map_err(|e| MasksError::Contract(e.to_string()))
    }

    /// Claims accrued NCT for the given Masks and waits for the receipt.
    pub async fn claim_nct(&self, indices: Vec<U256>) -> Result<TransactionReceipt> {
        let (wallet, from) = self.require_wallet("/").await?;
        let nct = wallet.nct_contract(&self.adapter.contracts(), from);

        info!("claiming NCT for {} mask(s) from {from}", indices.len());
        let pending = nct
            .instance
            .claim(indices)
            .from(from)
            .send()
            .await
            .map_err(|e| MasksError::Contract(e.to_string()))?;

        self.confirm(pending).await
    }

    /// Renames Mask `index` and waits for the receipt.
    pub async fn change_nft_name(&self, index: U256, new_name: &str) -> Result<TransactionReceipt> {
        let (wallet, from) = self.require_wallet("/").await?;
        let masks = wallet.masks_contract(&self.adapter.contracts(), from);

        info!("renaming mask {index} to {new_name:?}");
        let pending = masks
            .instance
            .changeName(index, new_name.to_string())
            .from(from)
            .send()
            .await
            .map_err(|e| MasksError::Contract(e.to_string()))?;

        self.confirm(pending).await
    }

    async fn confirm(
        &self,
        pending: PendingTransactionBuilder<Ethereum>,
    ) -> Result<TransactionReceipt> {
        let hash = *pending.tx_hash();
        debug!("sent {hash}, waiting for receipt");
        pending
            .get_receipt()
            .await
            .map_err(|e| MasksError::Transaction(e.to_string()))
    }

    /// Current name of Mask `index`.
    pub async fn nft_name(&self, index: U256) -> Result<String> {
        Ok(self.adapter.token_name(index).await?)
    }

    /// Whether `name` is already taken.
    pub async fn is_name_reserved(&self, name: &str) -> Result<bool> {
        Ok(self.adapter.is_name_reserved(name).await?)
    }

    /// Owner of Mask `index`.
    pub async fn nft_owner(&self, index: U256) -> Result<Address> {
        Ok(self.adapter.owner_of(index).await?)
    }

    /// Wei to ether string.
    pub fn to_eth_unit(&self, wei: U256) -> String {
        units::to_eth_unit(wei)
    }

    /// Receipt lookup through the wallet's node, falling back to the
    /// read-only endpoint when no wallet is configured.
    pub async fn transaction_receipt(&self, hash: B256) -> Result<Option<TransactionReceipt>> {
        match &self.wallet {
            Some(wallet) => Ok(wallet.transaction_receipt(hash).await?),
            None => Ok(self.adapter.transaction_receipt(hash).await?),
        }
    }

    /// Timestamp of `block` on the read-only endpoint.
    pub async fn timestamp_from_block(&self, block: BlockId) -> Result<u64> {
        Ok(self.adapter.block_timestamp(block).await?)
    }

    /// Revealed artwork index of Mask `nft_index`.
    pub fn revealed_mask_index(&self, nft_index: U256) -> u64 {
        reveal::revealed_index(nft_index, self.starting_index)
    }

    /// Whether `address` is a well-formed Ethereum address.
    pub fn is_valid_eth_address(&self, address: &str) -> bool {
        masklet_core::address::is_valid_eth_address(address)
    }

    /// Asks the wallet to sign `data` with the default account.
    ///
    /// `None` if no wallet is available.
    pub async fn generate_signature(&self, data: &[u8]) -> Result<Option<Bytes>> {
        let Some(wallet) = &self.wallet else {
            return Ok(None);
        };
        let Some(account) = wallet.enable().await? else {
            return Ok(None);
        };
        Ok(Some(wallet.personal_sign(data, account).await?))
    }
}

/// Masks still purchasable by an account that already owns `owned`.
pub fn remaining_allowance(owned: U256) -> u64 {
    let cap = U256::from(MAX_PER_ACCOUNT);
    if owned >= cap {
        0
    } else {
        (cap - owned).to::<u64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;
    use alloy::providers::{DynProvider, Provider, ProviderBuilder};
    use alloy::sol_types::SolValue;
    use alloy::transports::mock::Asserter;

    const ACCOUNT: Address = address!("0000000000000000000000000000000000000007");

    /// Masks helpers whose adapter and wallet answer from the same queue of
    /// canned responses, consumed in request order.
    fn mocked(asserter: &Asserter, with_wallet: bool) -> Masks {
        let provider: DynProvider<Ethereum> = ProviderBuilder::new()
            .disable_recommended_fillers()
            .connect_mocked_client(asserter.clone())
            .erased();
        let contracts = Contracts {
            masks: Address::with_last_byte(1),
            nct: Address::with_last_byte(2),
        };
        let adapter = EvmAdapter::from_provider(provider.clone(), contracts);
        let wallet = with_wallet.then(|| InjectedWallet::from_provider(provider));
        Masks::new(adapter, wallet, 0)
    }

    /// Answers `eth_requestAccounts` and `eth_accounts` with `ACCOUNT`.
    fn push_enabled(asserter: &Asserter) {
        asserter.push_success(&vec![ACCOUNT]);
        asserter.push_success(&vec![ACCOUNT]);
    }

    /// Answers one `eth_call` with the ABI-encoded `value`.
    fn push_return<T: SolValue>(asserter: &Asserter, value: T) {
        asserter.push_success(&Bytes::from(value.abi_encode()));
    }

    fn read_only() -> Masks {
        let contracts = Contracts {
            masks: Address::with_last_byte(1),
            nct: Address::with_last_byte(2),
        };
        let adapter = EvmAdapter::new("http://127.0.0.1:1", contracts).unwrap();
        Masks::new(adapter, None, 10141)
    }

    #[test]
    fn from_config_without_wallet() {
        let masks = Masks::from_config(&Config::default()).unwrap();
        assert!(masks.wallet().is_none());
        assert_eq!(
            masks.adapter().rpc_url(),
            masklet_core::config::DEFAULT_RPC_URL
        );
    }

    #[test]
    fn from_config_bad_wallet_url() {
        let config = Config {
            wallet_url: Some("::nope::".into()),
            ..Config::default()
        };
        assert!(matches!(
            Masks::from_config(&config),
            Err(MasksError::Wallet(WalletError::UrlParse(_)))
        ));
    }

    #[test]
    fn remaining_allowance_caps_at_zero() {
        assert_eq!(remaining_allowance(U256::ZERO), 20);
        assert_eq!(remaining_allowance(U256::from(5u64)), 15);
        assert_eq!(remaining_allowance(U256::from(20u64)), 0);
        assert_eq!(remaining_allowance(U256::from(25u64)), 0);
        assert_eq!(remaining_allowance(U256::MAX), 0);
    }

    #[test]
    fn revealed_index_uses_configured_offset() {
        let masks = read_only();
        assert_eq!(masks.revealed_mask_index(U256::ZERO), 10141);
        assert_eq!(masks.revealed_mask_index(U256::from(6243u64)), 0);
    }

    #[test]
    fn pure_helpers_delegate() {
        let masks = read_only();
        assert_eq!(masks.to_eth_unit(U256::from(10u64).pow(U256::from(18))), "1");
        assert!(masks.is_valid_eth_address("0x0000000000000000000000000000000000000001"));
        assert!(!masks.is_valid_eth_address("123"));
    }

    #[tokio::test]
    async fn no_wallet_yields_none() {
        let masks = read_only();
        assert_eq!(masks.eth_enabled().await.unwrap(), None);
        assert!(masks.masks_contract().await.unwrap().is_none());
        assert!(masks.nct_contract().await.unwrap().is_none());
        assert_eq!(masks.generate_signature(b"hello").await.unwrap(), None);
    }

    #[tokio::test]
    async fn max_user_can_buy_without_wallet_redirects() {
        let masks = read_only();
        match masks.max_user_can_buy().await {
            Err(MasksError::NoWallet(redirect)) => {
                assert_eq!(redirect.to_string(), "/no-wallet?redirect=/");
            }
            other => panic!("expected NoWallet, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn default_account_required_when_address_missing() {
        let masks = read_only();
        assert!(matches!(
            masks.balance_of(None).await,
            Err(MasksError::NoWallet(_))
        ));
        assert!(matches!(
            masks.claim_nct(vec![U256::from(1u64)]).await,
            Err(MasksError::NoWallet(_))
        ));
        assert!(matches!(
            masks.change_nft_name(U256::from(1u64), "x").await,
            Err(MasksError::NoWallet(_))
        ));
    }

    #[tokio::test]
    async fn accumulated_without_wallet_uses_read_only_endpoint() {
        let masks = read_only();
        assert!(matches!(
            masks.accumulated_for_index(U256::ZERO).await,
            Err(MasksError::Adapter(AdapterError::Rpc(_)))
        ));
    }

    #[tokio::test]
    async fn max_user_can_buy_subtracts_owned_masks() {
        let asserter = Asserter::new();
        push_enabled(&asserter);
        push_return(&asserter, U256::from(5u64));

        let masks = mocked(&asserter, true);
        assert_eq!(masks.max_user_can_buy().await.unwrap(), 15);
    }

    #[tokio::test]
    async fn max_user_can_buy_floors_at_zero() {
        let asserter = Asserter::new();
        push_enabled(&asserter);
        push_return(&asserter, U256::from(25u64));

        let masks = mocked(&asserter, true);
        assert_eq!(masks.max_user_can_buy().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn wallet_without_accounts_redirects() {
        let asserter = Asserter::new();
        asserter.push_failure_msg("User rejected the request.");
        asserter.push_success(&Vec::<Address>::new());

        let masks = mocked(&asserter, true);
        assert!(matches!(
            masks.max_user_can_buy().await,
            Err(MasksError::NoWallet(_))
        ));
    }

    #[tokio::test]
    async fn refused_access_without_accounts_is_none() {
        let asserter = Asserter::new();
        asserter.push_failure_msg("User rejected the request.");
        asserter.push_success(&Vec::<Address>::new());

        let masks = mocked(&asserter, true);
        assert_eq!(masks.eth_enabled().await.unwrap(), None);
    }

    #[tokio::test]
    async fn balance_of_explicit_address_skips_wallet() {
        let asserter = Asserter::new();
        push_return(&asserter, U256::from(3u64));

        let masks = mocked(&asserter, false);
        let balance = masks.balance_of(Some(ACCOUNT)).await.unwrap();
        assert_eq!(balance, U256::from(3u64));
    }

    #[tokio::test]
    async fn nct_balance_of_default_account() {
        let asserter = Asserter::new();
        push_enabled(&asserter);
        push_return(&asserter, U256::from(1_830u64));

        let masks = mocked(&asserter, true);
        assert_eq!(masks.nct_balance_of(None).await.unwrap(), U256::from(1_830u64));
    }

    #[tokio::test]
    async fn token_of_owner_by_index_decodes_token_id() {
        let asserter = Asserter::new();
        push_return(&asserter, U256::from(9_001u64));

        let masks = mocked(&asserter, false);
        let token = masks
            .token_of_owner_by_index(U256::from(2u64), Some(ACCOUNT))
            .await
            .unwrap();
        assert_eq!(token, U256::from(9_001u64));
    }

    #[tokio::test]
    async fn accumulated_goes_through_wallet() {
        let asserter = Asserter::new();
        push_enabled(&asserter);
        push_return(&asserter, U256::from(1_234u64));

        let masks = mocked(&asserter, true);
        let accumulated = masks.accumulated_for_index(U256::from(4u64)).await;
        assert_eq!(accumulated.unwrap(), U256::from(1_234u64));
    }

    #[tokio::test]
    async fn name_owner_and_reservation_reads() {
        let asserter = Asserter::new();
        push_return(&asserter, String::from("Hashmask #1"));
        push_return(&asserter, ACCOUNT);
        push_return(&asserter, true);

        let masks = mocked(&asserter, false);
        assert_eq!(masks.nft_name(U256::from(1u64)).await.unwrap(), "Hashmask #1");
        assert_eq!(masks.nft_owner(U256::from(1u64)).await.unwrap(), ACCOUNT);
        assert!(masks.is_name_reserved("Hashmask #1").await.unwrap());
    }

    #[tokio::test]
    async fn rejected_claim_is_contract_error() {
        let asserter = Asserter::new();
        push_enabled(&asserter);
        asserter.push_failure_msg("User denied transaction signature.");

        let masks = mocked(&asserter, true);
        match masks.claim_nct(vec![U256::from(1u64), U256::from(2u64)]).await {
            Err(MasksError::Contract(msg)) => assert!(msg.contains("denied")),
            other => panic!("expected Contract error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn rejected_rename_is_contract_error() {
        let asserter = Asserter::new();
        push_enabled(&asserter);
        asserter.push_failure_msg("User denied transaction signature.");

        let masks = mocked(&asserter, true);
        assert!(matches!(
            masks.change_nft_name(U256::from(1u64), "Satoshi").await,
            Err(MasksError::Contract(_))
        ));
    }

    #[tokio::test]
    async fn signature_from_default_account() {
        let asserter = Asserter::new();
        push_enabled(&asserter);
        let signature = Bytes::from(vec![0x1c; 65]);
        asserter.push_success(&signature);

        let masks = mocked(&asserter, true);
        let signed = masks.generate_signature(b"hello masks").await.unwrap();
        assert_eq!(signed, Some(signature));
    }

    #[tokio::test]
    async fn pending_receipt_through_wallet_is_none() {
        let asserter = Asserter::new();
        asserter.push_success(&Option::<TransactionReceipt>::None);

        let masks = mocked(&asserter, true);
        let hash = B256::repeat_byte(0xab);
        assert!(masks.transaction_receipt(hash).await.unwrap().is_none());
    }
}

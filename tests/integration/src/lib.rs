//! Integration tests for masklet.
//!
//! Node-backed tests spawn a local `anvil` through alloy's node bindings, so
//! the `anvil` binary must be on `PATH`. They are ignored by default:
//!
//! ```bash
//! cargo test -p masklet-integration-tests -- --include-ignored
//! ```

#[cfg(test)]
mod tests {
    use alloy::eips::{BlockId, BlockNumberOrTag};
    use alloy::primitives::{Address, U256};
    use alloy::providers::Provider;
    use alloy::rpc::types::TransactionReceipt;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use masklet_core::units::to_eth_unit;
    use masklet_core::DevnetConfig;
    use masklet_devnet::chain::LocalChain;
    use masklet_devnet::hd;
    use masklet_devnet::mnemonic::{generate_mnemonic, validate_mnemonic};
    use masklet_devnet::routes::build_router;
    use masklet_devnet::server::AppState;
    use masklet_devnet::types::NodeSummary;
    use masklet_evm::{Contracts, EvmAdapter, InjectedWallet, Masks};
    use tower::ServiceExt;

    const ONE_HUNDRED_ETHER: &str = "100000000000000000000";

    struct Devnet {
        chain: LocalChain,
        mnemonic: String,
        config: DevnetConfig,
    }

    fn start_devnet() -> Devnet {
        let config = DevnetConfig::default();
        let mnemonic = generate_mnemonic().unwrap();
        assert!(validate_mnemonic(&mnemonic));
        let chain = LocalChain::spawn(&config, &mnemonic).expect("anvil must be installed");
        Devnet {
            chain,
            mnemonic,
            config,
        }
    }

    fn app_state(devnet: &Devnet) -> AppState {
        let hd_accounts =
            hd::derive_addresses(&devnet.mnemonic, devnet.config.hd_addresses).unwrap();
        AppState::new(
            devnet.chain.provider().clone(),
            &devnet.mnemonic,
            hd_accounts,
            U256::from(devnet.config.transfer_wei),
        )
    }

    async fn get_json(state: AppState, uri: &str) -> serde_json::Value {
        let response = build_router(state)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    /// Masks helpers whose wallet is the test chain itself; the contracts are
    /// not deployed there, so only chain-level helpers are meaningful.
    fn masks_on(devnet: &Devnet) -> Masks {
        let contracts = Contracts {
            masks: Address::with_last_byte(1),
            nct: Address::with_last_byte(2),
        };
        let adapter = EvmAdapter::from_provider(devnet.chain.provider().clone(), contracts);
        let wallet = InjectedWallet::from_provider(devnet.chain.provider().clone());
        Masks::new(adapter, Some(wallet), 0)
    }

    #[tokio::test]
    #[ignore = "requires anvil"]
    async fn chain_accounts_match_mnemonic() {
        let devnet = start_devnet();
        let accounts = devnet.chain.provider().get_accounts().await.unwrap();
        assert_eq!(accounts.len(), devnet.config.accounts as usize);

        let derived =
            hd::derive_addresses(&devnet.mnemonic, devnet.config.hd_addresses).unwrap();
        assert_eq!(derived.len(), 4);
        assert_eq!(&derived[..accounts.len()], accounts.as_slice());
    }

    #[tokio::test]
    #[ignore = "requires anvil"]
    async fn summary_route_reports_chain_state() {
        let devnet = start_devnet();
        let json = get_json(app_state(&devnet), "/").await;
        let summary: NodeSummary = serde_json::from_value(json).unwrap();

        assert!(summary.node_info.to_lowercase().contains("anvil"));
        assert_eq!(summary.block_number, 0);
        assert_eq!(summary.mnemonic, devnet.mnemonic);
        assert_eq!(summary.web3_accounts.len(), 3);
        assert_eq!(summary.hd_wallet_accounts.len(), 4);
        assert_eq!(summary.balances.len(), 2);
        for balance in summary.balances.values() {
            assert_eq!(balance, ONE_HUNDRED_ETHER);
        }
    }

    #[tokio::test]
    #[ignore = "requires anvil"]
    async fn transact_route_moves_fixed_value() {
        let devnet = start_devnet();
        let state = app_state(&devnet);
        let provider = devnet.chain.provider().clone();
        let accounts = provider.get_accounts().await.unwrap();

        let json = get_json(state.clone(), "/transact").await;
        let receipt: TransactionReceipt = serde_json::from_value(json).unwrap();
        assert!(receipt.status());
        assert_eq!(receipt.from, accounts[0]);
        assert_eq!(receipt.to, Some(accounts[1]));

        let recipient = provider.get_balance(accounts[1]).await.unwrap();
        assert_eq!(
            recipient,
            U256::from(10u64).pow(U256::from(20)) + U256::from(1_000_000u64)
        );

        let summary: NodeSummary =
            serde_json::from_value(get_json(state, "/").await).unwrap();
        assert_eq!(summary.block_number, 1);
    }

    #[tokio::test]
    #[ignore = "requires anvil"]
    async fn wallet_helpers_against_test_chain() {
        let devnet = start_devnet();
        let masks = masks_on(&devnet);
        let accounts = devnet.chain.provider().get_accounts().await.unwrap();

        let account = masks.eth_enabled().await.unwrap();
        assert_eq!(account, Some(accounts[0]));

        let signature = masks.generate_signature(b"hello masks").await.unwrap().unwrap();
        assert_eq!(signature.len(), 65);

        let balance = masks.adapter().get_eth_balance(accounts[0]).await.unwrap();
        assert_eq!(to_eth_unit(balance), "100");

        let timestamp = masks
            .timestamp_from_block(BlockId::Number(BlockNumberOrTag::Latest))
            .await
            .unwrap();
        assert!(timestamp > 0);
    }

    #[tokio::test]
    #[ignore = "requires anvil"]
    async fn receipt_lookup_through_wallet() {
        let devnet = start_devnet();
        let state = app_state(&devnet);
        let json = get_json(state, "/transact").await;
        let sent: TransactionReceipt = serde_json::from_value(json).unwrap();

        let masks = masks_on(&devnet);
        let fetched = masks
            .transaction_receipt(sent.transaction_hash)
            .await
            .unwrap()
            .expect("mined receipt");
        assert_eq!(fetched.transaction_hash, sent.transaction_hash);
        assert_eq!(fetched.block_number, sent.block_number);
    }
}

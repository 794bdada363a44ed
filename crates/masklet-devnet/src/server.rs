//! Demo chain HTTP server.
//!
//! Generates a mnemonic, starts a local chain from it, and serves the routes
//! from [`crate::routes`] until Ctrl+C.

use std::sync::Arc;

use alloy::network::Ethereum;
use alloy::primitives::{Address, U256};
use alloy::providers::DynProvider;
use masklet_core::DevnetConfig;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::chain::LocalChain;
use crate::mnemonic::{generate_mnemonic, validate_mnemonic};
use crate::{hd, routes, DevnetError};

/// Shared application state available to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Provider bound to the test chain.
    pub provider: DynProvider<Ethereum>,
    /// Mnemonic the chain accounts derive from.
    pub mnemonic: Arc<str>,
    /// Addresses derived locally from the mnemonic.
    pub hd_accounts: Arc<[Address]>,
    /// Value sent by `GET /transact`, in wei.
    pub transfer_wei: U256,
}

impl AppState {
    /// Builds state for an existing provider.
    pub fn new(
        provider: DynProvider<Ethereum>,
        mnemonic: &str,
        hd_accounts: Vec<Address>,
        transfer_wei: U256,
    ) -> Self {
        Self {
            provider,
            mnemonic: Arc::from(mnemonic),
            hd_accounts: Arc::from(hd_accounts),
            transfer_wei,
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("hd_accounts", &self.hd_accounts)
            .field("transfer_wei", &self.transfer_wei)
            .finish_non_exhaustive()
    }
}

/// The demo chain server.
pub struct DevnetServer;

impl DevnetServer {
    /// Start the chain and serve HTTP until Ctrl+C.
    ///
    /// This will:
    /// 1. Check the settings, then generate and validate a fresh mnemonic
    /// 2. Spawn the in-memory chain with pre-funded accounts
    /// 3. Derive the HD wallet addresses from the same mnemonic
    /// 4. Bind the HTTP listener and serve the routes
    pub async fn run(config: &DevnetConfig) -> Result<(), DevnetError> {
        config.validate()?;

        let mnemonic = generate_mnemonic()?;
        if !validate_mnemonic(&mnemonic) {
            return Err(DevnetError::InvalidMnemonic);
        }

        let chain = LocalChain::spawn(config, &mnemonic)?;
        let hd_accounts = hd::derive_addresses(&mnemonic, config.hd_addresses)?;

        let state = AppState::new(
            chain.provider().clone(),
            &mnemonic,
            hd_accounts,
            U256::from(config.transfer_wei),
        );

        let listener = TcpListener::bind(config.bind).await?;
        Self::serve(listener, state).await?;

        // The chain must outlive the server.
        drop(chain);
        Ok(())
    }

    /// Serve the routes on an already bound listener until Ctrl+C.
    pub async fn serve(listener: TcpListener, state: AppState) -> Result<(), DevnetError> {
        info!("app started on http://{}", listener.local_addr()?);

        axum::serve(listener, routes::build_router(state))
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("app stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for Ctrl+C: {e}");
        std::future::pending::<()>().await;
    }
}

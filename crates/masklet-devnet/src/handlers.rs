//! Request handlers.
//!
//! Handlers are transport-agnostic: they take `&AppState` and return serde
//! types. [`crate::routes`] adapts them to axum.

use std::collections::BTreeMap;

use alloy::primitives::Address;
use alloy::providers::Provider;
use alloy::rpc::types::{TransactionReceipt, TransactionRequest};
use tracing::{debug, info};

use crate::server::AppState;
use crate::types::NodeSummary;

/// Errors returned by handlers.
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    #[error("node error: {0}")]
    Node(String),
    #[error("node exposes {0} account(s), need at least 2")]
    NotEnoughAccounts(usize),
}

fn node_err(e: impl std::fmt::Display) -> HandlerError {
    HandlerError::Node(e.to_string())
}

/// First two node accounts: sender and recipient.
async fn first_two_accounts(
    state: &AppState,
) -> Result<(Vec<Address>, Address, Address), HandlerError> {
    let accounts = state.provider.get_accounts().await.map_err(node_err)?;
    match accounts.as_slice() {
        [first, second, ..] => {
            let (first, second) = (*first, *second);
            Ok((accounts, first, second))
        }
        _ => Err(HandlerError::NotEnoughAccounts(accounts.len())),
    }
}

/// Node and account overview.
pub async fn handle_node_summary(state: &AppState) -> Result<NodeSummary, HandlerError> {
    let node_info = state.provider.get_client_version().await.map_err(node_err)?;
    let block_number = state.provider.get_block_number().await.map_err(node_err)?;

    let (accounts, first, second) = first_two_accounts(state).await?;
    let first_balance = state.provider.get_balance(first).await.map_err(node_err)?;
    let second_balance = state.provider.get_balance(second).await.map_err(node_err)?;

    let balances = BTreeMap::from([
        (first.to_string(), first_balance.to_string()),
        (second.to_string(), second_balance.to_string()),
    ]);

    debug!("summary at block {block_number}: {} accounts", accounts.len());

    Ok(NodeSummary {
        node_info,
        block_number,
        mnemonic: state.mnemonic.to_string(),
        web3_accounts: accounts,
        balances,
        hd_wallet_accounts: state.hd_accounts.to_vec(),
    })
}

/// Sends the fixed test transfer from account 0 to account 1 and returns its receipt.
pub async fn handle_transact(state: &AppState) -> Result<TransactionReceipt, HandlerError> {
    let (_, from, to) = first_two_accounts(state).await?;

    let tx = TransactionRequest::default()
        .from(from)
        .to(to)
        .value(state.transfer_wei);

    let pending = state.provider.send_transaction(tx).await.map_err(node_err)?;
    let receipt = pending.get_receipt().await.map_err(node_err)?;

    info!(
        "transferred {} wei {from} -> {to} in {}",
        state.transfer_wei, receipt.transaction_hash
    );
    Ok(receipt)
}

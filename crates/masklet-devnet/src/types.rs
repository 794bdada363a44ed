//! JSON payloads of the demo server.

use std::collections::BTreeMap;

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

/// Response of `GET /`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeSummary {
    /// Client version string of the node.
    pub node_info: String,
    /// Latest block number.
    pub block_number: u64,
    /// Mnemonic the chain accounts were derived from.
    pub mnemonic: String,
    /// Accounts managed by the node.
    pub web3_accounts: Vec<Address>,
    /// Wei balance (decimal string) of the first two accounts, keyed by address.
    pub balances: BTreeMap<String, String>,
    /// Addresses derived locally from the mnemonic.
    pub hd_wallet_accounts: Vec<Address>,
}

/// Error body returned by failing routes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub error: String,
}

//! `masklet claim` / `masklet change-name` — wallet-sent transactions.

use std::path::PathBuf;

use alloy::primitives::U256;
use alloy::rpc::types::TransactionReceipt;

fn print_receipt(receipt: &TransactionReceipt) -> Result<(), Box<dyn std::error::Error>> {
    if receipt.status() {
        println!("✅ Transaction mined: {}", receipt.transaction_hash);
    } else {
        println!("❌ Transaction reverted: {}", receipt.transaction_hash);
    }
    println!("{}", serde_json::to_string_pretty(receipt)?);
    Ok(())
}

/// Run the `claim` subcommand.
pub async fn claim(
    config: Option<PathBuf>,
    indices: Vec<U256>,
) -> Result<(), Box<dyn std::error::Error>> {
    let masks = super::load_masks(config)?;
    let receipt = masks.claim_nct(indices).await?;
    print_receipt(&receipt)
}

/// Run the `change-name` subcommand.
pub async fn change_name(
    config: Option<PathBuf>,
    index: U256,
    name: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let masks = super::load_masks(config)?;
    if masks.is_name_reserved(&name).await? {
        return Err(format!("name {name:?} is already taken").into());
    }
    let receipt = masks.change_nft_name(index, &name).await?;
    print_receipt(&receipt)
}

//! Read-only Masks / NCT subcommands.

use std::path::PathBuf;

use alloy::primitives::{Address, B256, U256};
use masklet_core::units::to_eth_unit;
use masklet_evm::MasksError;

use super::util::parse_block_id;

type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Run the `max-buy` subcommand.
pub async fn max_buy(config: Option<PathBuf>) -> CmdResult {
    let masks = super::load_masks(config)?;
    match masks.max_user_can_buy().await {
        Ok(n) => {
            println!("{n}");
            Ok(())
        }
        Err(MasksError::NoWallet(redirect)) => {
            Err(format!("no wallet connected (front end would redirect to {redirect})").into())
        }
        Err(e) => Err(e.into()),
    }
}

/// Run the `balance` subcommand.
pub async fn balance(config: Option<PathBuf>, address: Option<Address>) -> CmdResult {
    let masks = super::load_masks(config)?;
    println!("{}", masks.balance_of(address).await?);
    Ok(())
}

/// Run the `nct-balance` subcommand.
pub async fn nct_balance(config: Option<PathBuf>, address: Option<Address>) -> CmdResult {
    let masks = super::load_masks(config)?;
    let raw = masks.nct_balance_of(address).await?;
    println!("{raw} ({} NCT)", to_eth_unit(raw));
    Ok(())
}

/// Run the `token-of-owner` subcommand.
pub async fn token_of_owner(
    config: Option<PathBuf>,
    index: U256,
    address: Option<Address>,
) -> CmdResult {
    let masks = super::load_masks(config)?;
    println!("{}", masks.token_of_owner_by_index(index, address).await?);
    Ok(())
}

/// Run the `accumulated` subcommand.
pub async fn accumulated(config: Option<PathBuf>, index: U256) -> CmdResult {
    let masks = super::load_masks(config)?;
    let raw = masks.accumulated_for_index(index).await?;
    println!("{raw} ({} NCT)", to_eth_unit(raw));
    Ok(())
}

/// Run the `name` subcommand.
pub async fn name(config: Option<PathBuf>, index: U256) -> CmdResult {
    let masks = super::load_masks(config)?;
    println!("{}", masks.nft_name(index).await?);
    Ok(())
}

/// Run the `owner` subcommand.
pub async fn owner(config: Option<PathBuf>, index: U256) -> CmdResult {
    let masks = super::load_masks(config)?;
    println!("{}", masks.nft_owner(index).await?);
    Ok(())
}

/// Run the `name-reserved` subcommand.
pub async fn name_reserved(config: Option<PathBuf>, name: String) -> CmdResult {
    let masks = super::load_masks(config)?;
    println!("{}", masks.is_name_reserved(&name).await?);
    Ok(())
}

/// Run the `receipt` subcommand.
pub async fn receipt(config: Option<PathBuf>, hash: B256) -> CmdResult {
    let masks = super::load_masks(config)?;
    match masks.transaction_receipt(hash).await? {
        Some(receipt) => println!("{}", serde_json::to_string_pretty(&receipt)?),
        None => println!("null"),
    }
    Ok(())
}

/// Run the `block-time` subcommand.
pub async fn block_time(config: Option<PathBuf>, block: String) -> CmdResult {
    let block = parse_block_id(&block)?;
    let masks = super::load_masks(config)?;
    println!("{}", masks.timestamp_from_block(block).await?);
    Ok(())
}

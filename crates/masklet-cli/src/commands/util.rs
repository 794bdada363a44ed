//! Offline subcommands and shared argument parsing.

use std::path::PathBuf;

use alloy::eips::{BlockId, BlockNumberOrTag};
use alloy::primitives::{B256, U256};
use masklet_core::address::is_valid_eth_address;
use masklet_core::reveal::revealed_index;
use masklet_core::units::{parse_ether, to_eth_unit};

/// Parse a block reference: a decimal number, a 32-byte hash, or a tag
/// (`latest`, `earliest`, `pending`, `safe`, `finalized`).
pub fn parse_block_id(s: &str) -> Result<BlockId, String> {
    let s = s.trim();
    if let Ok(number) = s.parse::<u64>() {
        return Ok(BlockId::number(number));
    }
    if s.len() == 66 {
        if let Ok(hash) = s.parse::<B256>() {
            return Ok(BlockId::hash(hash));
        }
    }
    match s {
        "latest" => Ok(BlockNumberOrTag::Latest.into()),
        "earliest" => Ok(BlockNumberOrTag::Earliest.into()),
        "pending" => Ok(BlockNumberOrTag::Pending.into()),
        "safe" => Ok(BlockNumberOrTag::Safe.into()),
        "finalized" => Ok(BlockNumberOrTag::Finalized.into()),
        _ => Err(format!("invalid block '{s}': expected a number, a 0x hash or a tag")),
    }
}

/// Run the `reveal-index` subcommand.
pub fn reveal_index(
    config: Option<PathBuf>,
    index: U256,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config(config)?;
    println!("{}", revealed_index(index, config.starting_index));
    Ok(())
}

/// Run the `validate-address` subcommand.
pub fn validate_address(address: &str) -> Result<(), Box<dyn std::error::Error>> {
    if is_valid_eth_address(address) {
        println!("valid");
        Ok(())
    } else {
        Err(format!("invalid address: {address}").into())
    }
}

/// Run the `to-eth` subcommand.
pub fn to_eth(wei: U256) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", to_eth_unit(wei));
    Ok(())
}

/// Run the `to-wei` subcommand.
pub fn to_wei(ether: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", parse_ether(ether)?);
    Ok(())
}

//! Ethereum address format checks.

use alloy::primitives::Address;

/// Returns `true` if `address` looks like a valid Ethereum address.
///
/// Accepts 40 hex digits with or without a `0x` prefix. Single-case input is
/// taken as-is; mixed-case input must carry a valid EIP-55 checksum.
pub fn is_valid_eth_address(address: &str) -> bool {
    let hex = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .unwrap_or(address);

    if hex.len() != 40 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return false;
    }

    let has_lower = hex.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = hex.chars().any(|c| c.is_ascii_uppercase());
    if !(has_lower && has_upper) {
        return true;
    }

    Address::parse_checksummed(format!("0x{hex}"), None).is_ok()
}

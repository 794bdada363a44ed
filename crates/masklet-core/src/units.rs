//! Wei / ether conversion.

use alloy::primitives::U256;
use thiserror::Error;

/// Decimals of the native currency.
pub const ETHER_DECIMALS: u32 = 18;

/// Errors from parsing a decimal amount.
#[derive(Debug, Error, PartialEq)]
pub enum UnitsError {
    #[error("empty amount")]
    Empty,
    #[error("invalid amount '{0}': expected a non-negative decimal number")]
    Invalid(String),
    #[error("too many decimal places: got {got}, max {max}")]
    TooManyDecimals { got: usize, max: u32 },
}

/// Converts a wei amount to an ether string.
///
/// Trailing fractional zeros are dropped, as is the dot for whole amounts:
/// `1_500_000_000_000_000_000` → `"1.5"`, `10^18` → `"1"`, `0` → `"0"`.
pub fn to_eth_unit(wei: U256) -> String {
    format_units(wei, ETHER_DECIMALS)
}

/// Converts `value` with `decimals` implied decimal places to a decimal string.
pub fn format_units(value: U256, decimals: u32) -> String {
    let s = value.to_string();
    let decimals = decimals as usize;

    let (integer, fractional) = if s.len() <= decimals {
        ("0".to_string(), format!("{s:0>decimals$}"))
    } else {
        let split = s.len() - decimals;
        (s[..split].to_string(), s[split..].to_string())
    };

    let fractional = fractional.trim_end_matches('0');
    if fractional.is_empty() {
        integer
    } else {
        format!("{integer}.{fractional}")
    }
}

/// Parses an ether amount such as `"1.5"` into wei.
pub fn parse_ether(amount: &str) -> Result<U256, UnitsError> {
    parse_units(amount, ETHER_DECIMALS)
}

/// Parse a decimal string (e.g. "1.5") into a U256 with the given number of decimals.
pub fn parse_units(amount: &str, decimals: u32) -> Result<U256, UnitsError> {
    let amount = amount.trim();
    if amount.is_empty() {
        return Err(UnitsError::Empty);
    }

    let (integer, fractional) = amount.split_once('.').unwrap_or((amount, ""));

    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    let is_empty = integer.is_empty() && fractional.is_empty();
    if is_empty || !all_digits(integer) || !all_digits(fractional) {
        return Err(UnitsError::Invalid(amount.to_string()));
    }

    if fractional.len() > decimals as usize {
        return Err(UnitsError::TooManyDecimals {
            got: fractional.len(),
            max: decimals,
        });
    }

    // Pad fractional part to `decimals` digits
    let padded = format!("{fractional:0<width$}", width = decimals as usize);
    let combined = format!("{integer}{padded}");
    let combined = combined.trim_start_matches('0');
    let combined = if combined.is_empty() { "0" } else { combined };

    U256::from_str_radix(combined, 10).map_err(|_| UnitsError::Invalid(amount.to_string()))
}

//! BIP-39 mnemonic generation and validation.

use bip39::{Language, Mnemonic};

use crate::DevnetError;

/// Words in a freshly generated mnemonic.
pub const WORD_COUNT: usize = 12;

/// Generates a random 12-word English mnemonic.
pub fn generate_mnemonic() -> Result<String, DevnetError> {
    let mnemonic = Mnemonic::generate_in(Language::English, WORD_COUNT)
        .map_err(|e| DevnetError::Mnemonic(e.to_string()))?;
    Ok(mnemonic.to_string())
}

/// Returns `true` if `phrase` is a valid English BIP-39 mnemonic
/// (known words, supported length, matching checksum).
pub fn validate_mnemonic(phrase: &str) -> bool {
    Mnemonic::parse_in(Language::English, phrase).is_ok()
}

//! Mapping from a minted token index to its revealed artwork index.
//!
//! The collection was shuffled once at reveal time by a starting index; the
//! artwork behind token `i` is `(i + starting_index) mod MAX_NFT_SUPPLY`.

use alloy::primitives::U256;

/// Total supply of the collection.
pub const MAX_NFT_SUPPLY: u64 = 16384;

/// Returns the revealed artwork index for `nft_index`.
///
/// Both operands are reduced before the addition, so any `U256` index is
/// accepted and the result is always below [`MAX_NFT_SUPPLY`].
pub fn revealed_index(nft_index: U256, starting_index: u64) -> u64 {
    let supply = U256::from(MAX_NFT_SUPPLY);
    let index = (nft_index % supply).to::<u64>();
    (index + starting_index % MAX_NFT_SUPPLY) % MAX_NFT_SUPPLY
}

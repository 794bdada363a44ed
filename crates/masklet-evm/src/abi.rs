//! Masks and NCT ABI definitions using alloy's `sol!` macro.

use alloy::sol;

sol! {
    /// Masks collection: ERC-721 enumerable plus on-chain naming.
    #[sol(rpc)]
    interface IMasks {
        function balanceOf(address owner) external view returns (uint256);
        function ownerOf(uint256 tokenId) external view returns (address);
        function tokenOfOwnerByIndex(address owner, uint256 index) external view returns (uint256);
        function tokenNameByIndex(uint256 index) external view returns (string);
        function isNameReserved(string nameString) external view returns (bool);
        function changeName(uint256 tokenId, string newName) external;
    }
}

sol! {
    /// Name Changing Token: ERC-20 that accrues per Mask and is claimed by index.
    #[sol(rpc)]
    interface INct {
        function balanceOf(address owner) external view returns (uint256);
        function accumulated(uint256 tokenIndex) external view returns (uint256);
        function claim(uint256[] tokenIndices) external returns (uint256);
    }
}

use soroban_sdk::contracterror;

/// Error codes for the NFT registry contract.
/// Uses codes 1-99; the marketplace and auction contracts use their own ranges.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Token id does not exist
    TokenNotFound = 1,
    /// Caller is not the current owner of the token
    NotTokenOwner = 2,
    /// Token name must be non-empty
    InvalidMetadata = 3,
}

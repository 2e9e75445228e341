use soroban_sdk::contracterror;

/// Error codes for the marketplace contract.
/// Uses codes 100-199 to avoid conflicts with the other contracts.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Contract has already been initialized
    AlreadyInitialized = 100,
    /// Contract has not been initialized
    NotInitialized = 101,
    /// Caller is not the admin
    Unauthorized = 102,
    /// Fee rate exceeds 10000 basis points
    InvalidFeeRate = 103,
    /// No listing exists for the token
    ListingNotFound = 104,
    /// A live listing already exists for the token
    ListingExists = 105,
    /// Price must be strictly positive
    InvalidPrice = 106,
    /// Offered payment is below the listing price
    InsufficientPayment = 107,
    /// Caller is both buyer and seller
    SelfTrade = 108,
    /// Caller is not the listing's seller
    NotSeller = 109,
    /// Fee calculation overflow
    FeeOverflow = 110,
}

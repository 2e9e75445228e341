use soroban_sdk::contracterror;

/// Error codes for the auction contract.
/// Uses codes 200-299 to avoid conflicts with the other contracts.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Contract has already been initialized
    AlreadyInitialized = 200,
    /// Contract has not been initialized
    NotInitialized = 201,
    /// No auction exists for the token
    AuctionNotFound = 202,
    /// A live auction already exists for the token
    AuctionExists = 203,
    /// Starting price must be strictly positive
    InvalidPrice = 204,
    /// Auction duration is below the minimum bound
    DurationTooShort = 205,
    /// Auction duration is above the maximum bound
    DurationTooLong = 206,
    /// Bidding window has closed
    AuctionEnded = 207,
    /// Auction cannot be finalized before its end time
    AuctionNotEnded = 208,
    /// Bid does not strictly exceed the current bid
    BidTooLow = 209,
    /// Seller may not bid on their own auction
    SelfTrade = 210,
    /// Caller is not the auction's seller
    NotSeller = 211,
    /// Auction with a recorded bid cannot be cancelled
    HasBids = 212,
    /// Escrow entry is smaller than the amount owed from it
    EscrowShortfall = 213,
}

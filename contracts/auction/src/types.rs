use soroban_sdk::{contracttype, Address};

use crate::asset::AssetInfo;

/// Storage keys for the auction contract.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Auction house configuration
    Config,
    /// Auction data by token id
    Auction(u64),
    /// Escrowed bid value by bidder address
    Escrow(Address),
    /// Number of auctions ever opened
    TotalAuctions,
    /// Number of auctions finalized
    CompletedAuctions,
}

/// Auction house configuration
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionConfig {
    /// Address that initialized the contract
    pub admin: Address,
    /// NFT registry auctions take custody from
    pub nft_contract: Address,
    /// Fungible token bids are denominated in
    pub payment_token: Address,
}

/// A timed first-price English auction.
///
/// `current_bid` starts out equal to `starting_price` and carries no bidder;
/// the two move together from the first bid on, so `highest_bidder` is set
/// iff `current_bid > starting_price`. Expiry is derived from `end_time`
/// against the ledger clock, never stored as a flag.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    /// Token id the auction is keyed by
    pub token_id: u64,
    /// Address the winning bid is paid to
    pub seller: Address,
    /// Snapshot of the NFT record at creation time
    pub asset: AssetInfo,
    /// Price the first bid must strictly exceed
    pub starting_price: i128,
    /// Highest bid so far, or the starting price while no bid exists
    pub current_bid: i128,
    /// Leading bidder; `None` until the first bid lands
    pub highest_bidder: Option<Address>,
    /// Timestamp the auction was opened
    pub created_at: u64,
    /// Timestamp bidding closes and finalize becomes possible
    pub end_time: u64,
}

/// Aggregate auction statistics, returned by value.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionStats {
    pub total_auctions: u64,
    pub completed_auctions: u64,
}

/// Number of ledgers in a day (assuming ~5 second block time)
pub const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for persistent storage (90 days)
pub const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;

/// TTL threshold for persistent storage
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

use soroban_sdk::{contracttype, Address};

use crate::asset::AssetInfo;

/// Storage keys for the marketplace contract.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Marketplace configuration
    Config,
    /// Listing data by token id
    Listing(u64),
    /// Sum of sale prices across all completed sales
    TotalVolume,
    /// Number of completed sales
    TotalSales,
    /// Accumulated, not-yet-withdrawn marketplace fees
    FeePool,
}

/// Marketplace configuration
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketplaceConfig {
    /// Admin address with fee-setting privileges
    pub admin: Address,
    /// NFT registry the marketplace takes custody from
    pub nft_contract: Address,
    /// Fungible token used for all payments
    pub payment_token: Address,
    /// Marketplace fee in basis points (250 = 2.5%)
    pub fee_bps: u32,
}

/// A fixed-price sale offer.
///
/// A listing exists iff the marketplace contract currently owns the token
/// on the seller's behalf; `list` takes custody, `buy` and `unlist` give it
/// up and remove the record in the same invocation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Listing {
    /// Token id the listing is keyed by
    pub token_id: u64,
    /// Address the proceeds go to
    pub seller: Address,
    /// Asking price in token base units
    pub price: i128,
    /// Snapshot of the NFT record at listing time
    pub asset: AssetInfo,
    /// Timestamp the listing was created; never changed by reprice
    pub listed_at: u64,
}

/// Aggregate marketplace statistics, returned by value.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketStats {
    pub total_volume: i128,
    pub total_sales: u64,
    pub fee_pool: i128,
    pub fee_bps: u32,
}

/// Number of ledgers in a day (assuming ~5 second block time)
pub const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for persistent storage (90 days)
pub const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;

/// TTL threshold for persistent storage
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

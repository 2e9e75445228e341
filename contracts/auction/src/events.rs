use soroban_sdk::{contractevent, Address};

/// Event emitted when the auction house is initialized
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEventData {
    #[topic]
    pub admin: Address,
}

/// Event emitted when an auction is opened
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCreatedEventData {
    #[topic]
    pub seller: Address,
    pub token_id: u64,
    pub starting_price: i128,
    pub end_time: u64,
}

/// Event emitted when a bid is recorded
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlacedEventData {
    #[topic]
    pub bidder: Address,
    pub token_id: u64,
    pub amount: i128,
}

/// Event emitted when an outbid bidder is paid back
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidRefundedEventData {
    #[topic]
    pub bidder: Address,
    pub token_id: u64,
    pub amount: i128,
}

/// Event emitted when an expired auction is finalized
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SettledEventData {
    #[topic]
    pub seller: Address,
    pub token_id: u64,
    /// Winning bidder, or `None` when the auction closed without bids
    pub winner: Option<Address>,
    /// Amount paid to the seller; zero when there was no bid
    pub amount: i128,
}

/// Event emitted when a bid-free auction is cancelled by its seller
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCancelledEventData {
    #[topic]
    pub seller: Address,
    pub token_id: u64,
}

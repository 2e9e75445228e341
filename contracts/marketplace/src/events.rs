use soroban_sdk::{contractevent, Address};

/// Event emitted when the marketplace is initialized
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEventData {
    #[topic]
    pub admin: Address,
    pub fee_bps: u32,
}

/// Event emitted when a token is listed for sale
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ListedEventData {
    #[topic]
    pub seller: Address,
    pub token_id: u64,
    pub price: i128,
}

/// Event emitted when a listing is bought
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SoldEventData {
    #[topic]
    pub buyer: Address,
    #[topic]
    pub seller: Address,
    pub token_id: u64,
    pub price: i128,
    pub fee: i128,
}

/// Event emitted when a listing is withdrawn by its seller
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnlistedEventData {
    #[topic]
    pub seller: Address,
    pub token_id: u64,
}

/// Event emitted when a listing's price is changed
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RepricedEventData {
    #[topic]
    pub seller: Address,
    pub token_id: u64,
    pub new_price: i128,
}

/// Event emitted when the fee rate is updated
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeRateUpdatedEventData {
    #[topic]
    pub admin: Address,
    pub new_rate: u32,
}

/// Event emitted when accumulated fees are withdrawn
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeesWithdrawnEventData {
    #[topic]
    pub admin: Address,
    pub amount: i128,
}

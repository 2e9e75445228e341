use soroban_sdk::{contracttype, Address, String};

/// Storage keys for the NFT registry contract.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Immutable asset record by token id
    Asset(u64),
    /// Current owner by token id
    Owner(u64),
    /// Last minted token id
    TokenCounter,
}

/// A minted token record.
///
/// Immutable after mint. Ownership is deliberately not a field here — the
/// current owner lives under [`DataKey::Owner`] so custody changes never
/// rewrite the record itself.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Asset {
    /// Unique token identifier
    pub id: u64,
    /// Address that minted the token
    pub creator: Address,
    /// Display name
    pub name: String,
    /// Display description
    pub description: String,
    /// Image reference (URL or IPFS CID)
    pub image_url: String,
}

/// Number of ledgers in a day (assuming ~5 second block time)
pub const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for persistent storage (90 days)
pub const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;

/// TTL threshold for persistent storage
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

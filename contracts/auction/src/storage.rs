use soroban_sdk::{Address, Env};

use crate::errors::Error;
use crate::types::{
    Auction, AuctionConfig, DataKey, PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD,
};

// ============================================================================
// CONFIG STORAGE
// ============================================================================

/// Check if the contract has been initialized
pub fn has_config(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Config)
}

/// Get auction house configuration
pub fn get_config(e: &Env) -> Option<AuctionConfig> {
    e.storage().instance().get(&DataKey::Config)
}

/// Set auction house configuration
pub fn set_config(e: &Env, config: &AuctionConfig) {
    e.storage().instance().set(&DataKey::Config, config);
}

// ============================================================================
// AUCTION STORAGE
// ============================================================================

/// Get an auction by token id
pub fn get_auction(e: &Env, token_id: u64) -> Option<Auction> {
    let key = DataKey::Auction(token_id);
    let auction = e.storage().persistent().get::<_, Auction>(&key);
    if auction.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    auction
}

/// Store an auction keyed by its token id
pub fn set_auction(e: &Env, auction: &Auction) {
    let key = DataKey::Auction(auction.token_id);
    e.storage().persistent().set(&key, auction);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

/// Remove an auction
pub fn remove_auction(e: &Env, token_id: u64) {
    e.storage().persistent().remove(&DataKey::Auction(token_id));
}

/// Check if an auction exists
pub fn has_auction(e: &Env, token_id: u64) -> bool {
    e.storage().persistent().has(&DataKey::Auction(token_id))
}

// ============================================================================
// ESCROW LEDGER
// ============================================================================

/// Escrowed value currently held for a bidder.
///
/// One entry per bidder: bids on different auctions accumulate into the same
/// balance until released.
pub fn get_escrow(e: &Env, bidder: &Address) -> i128 {
    let key = DataKey::Escrow(bidder.clone());
    let balance = e.storage().persistent().get::<_, i128>(&key).unwrap_or(0);
    if balance > 0 {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    balance
}

/// Merge an incoming bid into the bidder's escrow entry
pub fn credit_escrow(e: &Env, bidder: &Address, amount: i128) {
    let key = DataKey::Escrow(bidder.clone());
    let balance = get_escrow(e, bidder).saturating_add(amount);
    e.storage().persistent().set(&key, &balance);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

/// Release `amount` from the bidder's escrow entry.
///
/// Read-modify-write in one call; the entry is removed once it reaches zero.
/// Releasing more than the entry holds means the ledger no longer backs a
/// recorded bid, which the custody rules make unreachable.
pub fn debit_escrow(e: &Env, bidder: &Address, amount: i128) -> Result<(), Error> {
    let key = DataKey::Escrow(bidder.clone());
    let balance = e.storage().persistent().get::<_, i128>(&key).unwrap_or(0);

    if balance < amount {
        return Err(Error::EscrowShortfall);
    }

    let remaining = balance - amount;
    if remaining == 0 {
        e.storage().persistent().remove(&key);
    } else {
        e.storage().persistent().set(&key, &remaining);
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }

    Ok(())
}

// ============================================================================
// COUNTER STORAGE
// ============================================================================

/// Number of auctions ever opened
pub fn get_total_auctions(e: &Env) -> u64 {
    e.storage()
        .instance()
        .get(&DataKey::TotalAuctions)
        .unwrap_or(0)
}

/// Count one opened auction
pub fn increment_total_auctions(e: &Env) {
    let total = get_total_auctions(e) + 1;
    e.storage().instance().set(&DataKey::TotalAuctions, &total);
}

/// Number of auctions finalized
pub fn get_completed_auctions(e: &Env) -> u64 {
    e.storage()
        .instance()
        .get(&DataKey::CompletedAuctions)
        .unwrap_or(0)
}

/// Count one finalized auction
pub fn increment_completed_auctions(e: &Env) {
    let completed = get_completed_auctions(e) + 1;
    e.storage()
        .instance()
        .set(&DataKey::CompletedAuctions, &completed);
}

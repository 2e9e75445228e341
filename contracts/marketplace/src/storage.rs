use soroban_sdk::Env;

use crate::types::{
    DataKey, Listing, MarketplaceConfig, PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD,
};

// ============================================================================
// CONFIG STORAGE
// ============================================================================

/// Check if the contract has been initialized
pub fn has_config(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Config)
}

/// Get marketplace configuration
pub fn get_config(e: &Env) -> Option<MarketplaceConfig> {
    e.storage().instance().get(&DataKey::Config)
}

/// Set marketplace configuration
pub fn set_config(e: &Env, config: &MarketplaceConfig) {
    e.storage().instance().set(&DataKey::Config, config);
}

// ============================================================================
// LISTING STORAGE
// ============================================================================

/// Get a listing by token id
pub fn get_listing(e: &Env, token_id: u64) -> Option<Listing> {
    let key = DataKey::Listing(token_id);
    let listing = e.storage().persistent().get::<_, Listing>(&key);
    if listing.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    listing
}

/// Store a listing keyed by its token id
pub fn set_listing(e: &Env, listing: &Listing) {
    let key = DataKey::Listing(listing.token_id);
    e.storage().persistent().set(&key, listing);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

/// Remove a listing
pub fn remove_listing(e: &Env, token_id: u64) {
    e.storage().persistent().remove(&DataKey::Listing(token_id));
}

/// Check if a listing exists
pub fn has_listing(e: &Env, token_id: u64) -> bool {
    e.storage().persistent().has(&DataKey::Listing(token_id))
}

// ============================================================================
// COUNTER STORAGE
// ============================================================================

/// Sum of sale prices across all completed sales
pub fn get_total_volume(e: &Env) -> i128 {
    e.storage().instance().get(&DataKey::TotalVolume).unwrap_or(0)
}

/// Add a completed sale's price to the volume counter
pub fn add_volume(e: &Env, price: i128) {
    let volume = get_total_volume(e).saturating_add(price);
    e.storage().instance().set(&DataKey::TotalVolume, &volume);
}

/// Number of completed sales
pub fn get_total_sales(e: &Env) -> u64 {
    e.storage().instance().get(&DataKey::TotalSales).unwrap_or(0)
}

/// Count one completed sale
pub fn increment_sales(e: &Env) {
    let sales = get_total_sales(e) + 1;
    e.storage().instance().set(&DataKey::TotalSales, &sales);
}

// ============================================================================
// FEE POOL STORAGE
// ============================================================================

/// Accumulated, not-yet-withdrawn fees
pub fn get_fee_pool(e: &Env) -> i128 {
    e.storage().instance().get(&DataKey::FeePool).unwrap_or(0)
}

/// Add a sale's fee to the pool
pub fn add_fees(e: &Env, amount: i128) {
    let pool = get_fee_pool(e).saturating_add(amount);
    e.storage().instance().set(&DataKey::FeePool, &pool);
}

/// Zero the pool after a withdrawal
pub fn reset_fee_pool(e: &Env) {
    e.storage().instance().set(&DataKey::FeePool, &0i128);
}

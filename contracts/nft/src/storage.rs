use soroban_sdk::{Address, Env};

use crate::types::{Asset, DataKey, PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD};

/// Get an asset record by token id
pub fn get_asset(e: &Env, token_id: u64) -> Option<Asset> {
    let key = DataKey::Asset(token_id);
    let asset = e.storage().persistent().get::<_, Asset>(&key);
    if asset.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    asset
}

/// Store an asset record
pub fn set_asset(e: &Env, asset: &Asset) {
    let key = DataKey::Asset(asset.id);
    e.storage().persistent().set(&key, asset);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

/// Get the current owner of a token
pub fn get_owner(e: &Env, token_id: u64) -> Option<Address> {
    let key = DataKey::Owner(token_id);
    let owner = e.storage().persistent().get::<_, Address>(&key);
    if owner.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    owner
}

/// Set the current owner of a token
pub fn set_owner(e: &Env, token_id: u64, owner: &Address) {
    let key = DataKey::Owner(token_id);
    e.storage().persistent().set(&key, owner);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

/// Total number of tokens minted so far
pub fn total_minted(e: &Env) -> u64 {
    e.storage()
        .instance()
        .get(&DataKey::TokenCounter)
        .unwrap_or(0)
}

/// Advance the token counter and return the freshly assigned id (1-based)
pub fn increment_token_counter(e: &Env) -> u64 {
    let counter = total_minted(e) + 1;
    e.storage().instance().set(&DataKey::TokenCounter, &counter);
    counter
}

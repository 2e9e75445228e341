#![no_std]

mod errors;
mod events;
mod storage;
mod types;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, Address, Env, String};

use crate::errors::Error;
use crate::events::*;
pub use crate::types::Asset;

/// NFT registry contract.
///
/// Issues token records with a creator and display metadata, and tracks the
/// current owner of each token. Records are immutable after mint; only the
/// owner entry changes hands. The marketplace and auction contracts take
/// custody of tokens through [`NftRegistry::transfer`].
#[contract]
pub struct NftRegistry;

#[contractimpl]
impl NftRegistry {
    /// Mint a new token owned by `creator`.
    ///
    /// # Arguments
    /// * `creator` - Minting address, recorded on the token and set as owner
    /// * `name` - Display name (must be non-empty)
    /// * `description` - Display description
    /// * `image_url` - Image reference (URL or IPFS CID)
    ///
    /// # Returns
    /// * The freshly assigned token id (1-based)
    pub fn mint(
        e: &Env,
        creator: Address,
        name: String,
        description: String,
        image_url: String,
    ) -> Result<u64, Error> {
        creator.require_auth();

        if name.is_empty() {
            return Err(Error::InvalidMetadata);
        }

        let token_id = storage::increment_token_counter(e);

        let asset = Asset {
            id: token_id,
            creator: creator.clone(),
            name,
            description,
            image_url,
        };

        storage::set_asset(e, &asset);
        storage::set_owner(e, token_id, &creator);

        MintedEventData { creator, token_id }.publish(e);

        Ok(token_id)
    }

    /// Transfer a token to a new owner.
    ///
    /// # Errors
    /// * `Error::TokenNotFound` - If the token id was never minted
    /// * `Error::NotTokenOwner` - If `from` is not the current owner
    pub fn transfer(e: &Env, from: Address, to: Address, token_id: u64) -> Result<(), Error> {
        from.require_auth();

        let owner = storage::get_owner(e, token_id).ok_or(Error::TokenNotFound)?;
        if owner != from {
            return Err(Error::NotTokenOwner);
        }

        storage::set_owner(e, token_id, &to);

        TransferredEventData { from, to, token_id }.publish(e);

        Ok(())
    }

    /// Current owner of a token
    pub fn owner_of(e: &Env, token_id: u64) -> Result<Address, Error> {
        storage::get_owner(e, token_id).ok_or(Error::TokenNotFound)
    }

    /// Immutable asset record for a token
    pub fn get_asset(e: &Env, token_id: u64) -> Result<Asset, Error> {
        storage::get_asset(e, token_id).ok_or(Error::TokenNotFound)
    }

    /// Total number of tokens minted
    pub fn total_minted(e: &Env) -> u64 {
        storage::total_minted(e)
    }
}

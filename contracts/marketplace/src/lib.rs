#![no_std]

mod asset;
mod errors;
mod events;
mod storage;
mod types;


use soroban_sdk::{contract, contractimpl, token, Address, Env};

use crate::asset::NftClient;
use crate::errors::Error;
use crate::events::*;
use crate::types::{Listing, MarketStats, MarketplaceConfig, DAY_IN_LEDGERS};

// ============================================================================
// Constants
// ============================================================================

/// TTL extension amount for instance storage (30 days)
const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// TTL threshold before extending (29 days)
const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

/// Maximum basis points for fees
const MAX_FEE_RATE: u32 = 10000; // 100%

// ============================================================================
// Contract
// ============================================================================

/// Fixed-price NFT marketplace.
///
/// Sellers hand a token over to the contract with [`Marketplace::list`]; the
/// contract holds custody until the listing is bought, withdrawn, while the
/// asking price may be changed in place at any time. Sale proceeds are split
/// between the seller and a contract-held fee pool; the split is computed
/// once, from the listing price, so `fee + seller_amount` always equals the
/// price exactly and any overpayment stays with the buyer as change.
///
/// Every operation validates before it writes, and the Soroban host discards
/// all writes when an error is returned, so a failed call leaves the book
/// exactly as it found it.
#[contract]
pub struct Marketplace;

#[contractimpl]
impl Marketplace {
    // ========================================================================
    // INITIALIZATION
    // ========================================================================

    /// Initialize the marketplace contract.
    ///
    /// # Arguments
    /// * `admin` - Address that may change the fee rate and withdraw fees
    /// * `nft_contract` - NFT registry tokens are bought and sold from
    /// * `payment_token` - Fungible token used for all payments
    /// * `fee_bps` - Marketplace fee in basis points (250 = 2.5%)
    ///
    /// # Errors
    /// * `Error::AlreadyInitialized` - If the contract has already been initialized
    /// * `Error::InvalidFeeRate` - If `fee_bps` exceeds 10000
    pub fn initialize(
        e: &Env,
        admin: Address,
        nft_contract: Address,
        payment_token: Address,
        fee_bps: u32,
    ) -> Result<(), Error> {
        admin.require_auth();

        if storage::has_config(e) {
            return Err(Error::AlreadyInitialized);
        }

        if fee_bps > MAX_FEE_RATE {
            return Err(Error::InvalidFeeRate);
        }

        let config = MarketplaceConfig {
            admin: admin.clone(),
            nft_contract,
            payment_token,
            fee_bps,
        };

        storage::set_config(e, &config);
        Self::extend_instance_ttl(e);

        InitializedEventData { admin, fee_bps }.publish(e);

        Ok(())
    }

    // ========================================================================
    // LISTING LIFECYCLE
    // ========================================================================

    /// List a token for sale at a fixed price.
    ///
    /// Takes custody of the token: the seller must own it, and the registry
    /// transfer fails the whole call otherwise. The listing is keyed by the
    /// token id.
    ///
    /// # Errors
    /// * `Error::InvalidPrice` - If `price` is not strictly positive
    /// * `Error::ListingExists` - If the token is already listed
    pub fn list(e: &Env, seller: Address, token_id: u64, price: i128) -> Result<u64, Error> {
        seller.require_auth();

        let config = storage::get_config(e).ok_or(Error::NotInitialized)?;

        if price <= 0 {
            return Err(Error::InvalidPrice);
        }

        if storage::has_listing(e, token_id) {
            return Err(Error::ListingExists);
        }

        let nft = NftClient::new(e, &config.nft_contract);
        let asset = nft.get_asset(&token_id);

        let listing = Listing {
            token_id,
            seller: seller.clone(),
            price,
            asset,
            listed_at: e.ledger().timestamp(),
        };

        storage::set_listing(e, &listing);

        nft.transfer(&seller, &e.current_contract_address(), &token_id);

        ListedEventData {
            seller,
            token_id,
            price,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(token_id)
    }

    /// Buy a listed token.
    ///
    /// Accepts any `payment` of at least the asking price; only the price is
    /// actually drawn from the buyer. The price splits into a fee
    /// (`price * fee_bps / 10000`, floor) kept in the contract's fee pool and
    /// the seller's amount, so `fee + seller_amount == price` exactly. The
    /// remainder of the offered payment is the buyer's change and is returned.
    ///
    /// # Errors
    /// * `Error::ListingNotFound` - If the token is not listed
    /// * `Error::SelfTrade` - If the buyer is the seller
    /// * `Error::InsufficientPayment` - If `payment` is below the price
    pub fn buy(e: &Env, buyer: Address, token_id: u64, payment: i128) -> Result<i128, Error> {
        buyer.require_auth();

        let config = storage::get_config(e).ok_or(Error::NotInitialized)?;

        let listing = storage::get_listing(e, token_id).ok_or(Error::ListingNotFound)?;

        if buyer == listing.seller {
            return Err(Error::SelfTrade);
        }

        if payment < listing.price {
            return Err(Error::InsufficientPayment);
        }

        let fee = listing
            .price
            .checked_mul(config.fee_bps as i128)
            .ok_or(Error::FeeOverflow)?
            .checked_div(10000)
            .ok_or(Error::FeeOverflow)?;
        let seller_amount = listing.price - fee;
        let change = payment - listing.price;

        // Remove the listing before any transfer; a second buy of the same
        // token id fails ListingNotFound.
        storage::remove_listing(e, token_id);
        storage::add_volume(e, listing.price);
        storage::increment_sales(e);
        storage::add_fees(e, fee);

        let payment_client = token::TokenClient::new(e, &config.payment_token);
        payment_client.transfer(&buyer, &listing.seller, &seller_amount);
        if fee > 0 {
            payment_client.transfer(&buyer, &e.current_contract_address(), &fee);
        }

        let nft = NftClient::new(e, &config.nft_contract);
        nft.transfer(&e.current_contract_address(), &buyer, &token_id);

        SoldEventData {
            buyer,
            seller: listing.seller,
            token_id,
            price: listing.price,
            fee,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(change)
    }

    /// Withdraw a listing and return the token to its seller.
    ///
    /// # Errors
    /// * `Error::ListingNotFound` - If the token is not listed
    /// * `Error::NotSeller` - If the caller is not the listing's seller
    pub fn unlist(e: &Env, seller: Address, token_id: u64) -> Result<(), Error> {
        seller.require_auth();

        let config = storage::get_config(e).ok_or(Error::NotInitialized)?;

        let listing = storage::get_listing(e, token_id).ok_or(Error::ListingNotFound)?;

        if listing.seller != seller {
            return Err(Error::NotSeller);
        }

        storage::remove_listing(e, token_id);

        let nft = NftClient::new(e, &config.nft_contract);
        nft.transfer(&e.current_contract_address(), &seller, &token_id);

        UnlistedEventData { seller, token_id }.publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    /// Change the asking price of a live listing in place.
    ///
    /// `listed_at` is untouched.
    ///
    /// # Errors
    /// * `Error::InvalidPrice` - If `new_price` is not strictly positive
    /// * `Error::ListingNotFound` - If the token is not listed
    /// * `Error::NotSeller` - If the caller is not the listing's seller
    pub fn reprice(
        e: &Env,
        seller: Address,
        token_id: u64,
        new_price: i128,
    ) -> Result<(), Error> {
        seller.require_auth();

        if new_price <= 0 {
            return Err(Error::InvalidPrice);
        }

        let mut listing = storage::get_listing(e, token_id).ok_or(Error::ListingNotFound)?;

        if listing.seller != seller {
            return Err(Error::NotSeller);
        }

        listing.price = new_price;
        storage::set_listing(e, &listing);

        RepricedEventData {
            seller,
            token_id,
            new_price,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    // ========================================================================
    // FEE MANAGEMENT
    // ========================================================================

    /// Update the fee rate (admin only)
    pub fn set_fee_rate(e: &Env, admin: Address, new_rate: u32) -> Result<(), Error> {
        admin.require_auth();

        let mut config = storage::get_config(e).ok_or(Error::NotInitialized)?;

        if admin != config.admin {
            return Err(Error::Unauthorized);
        }

        if new_rate > MAX_FEE_RATE {
            return Err(Error::InvalidFeeRate);
        }

        config.fee_bps = new_rate;
        storage::set_config(e, &config);

        FeeRateUpdatedEventData {
            admin: admin.clone(),
            new_rate,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    /// Withdraw the accumulated fee pool to `to` (admin only).
    ///
    /// Returns the amount withdrawn; the pool is zeroed.
    pub fn withdraw_fees(e: &Env, admin: Address, to: Address) -> Result<i128, Error> {
        admin.require_auth();

        let config = storage::get_config(e).ok_or(Error::NotInitialized)?;

        if admin != config.admin {
            return Err(Error::Unauthorized);
        }

        let amount = storage::get_fee_pool(e);
        storage::reset_fee_pool(e);

        if amount > 0 {
            let payment_client = token::TokenClient::new(e, &config.payment_token);
            payment_client.transfer(&e.current_contract_address(), &to, &amount);
        }

        FeesWithdrawnEventData { admin, amount }.publish(e);

        Self::extend_instance_ttl(e);
        Ok(amount)
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    /// Whether a listing exists for the token
    pub fn has_listing(e: &Env, token_id: u64) -> bool {
        storage::has_listing(e, token_id)
    }

    /// Full listing record
    pub fn get_listing(e: &Env, token_id: u64) -> Result<Listing, Error> {
        storage::get_listing(e, token_id).ok_or(Error::ListingNotFound)
    }

    /// Asking price of a listing
    pub fn get_price(e: &Env, token_id: u64) -> Result<i128, Error> {
        Ok(storage::get_listing(e, token_id)
            .ok_or(Error::ListingNotFound)?
            .price)
    }

    /// Seller of a listing
    pub fn get_seller(e: &Env, token_id: u64) -> Result<Address, Error> {
        Ok(storage::get_listing(e, token_id)
            .ok_or(Error::ListingNotFound)?
            .seller)
    }

    /// Aggregate statistics snapshot
    pub fn get_stats(e: &Env) -> Result<MarketStats, Error> {
        let config = storage::get_config(e).ok_or(Error::NotInitialized)?;

        Ok(MarketStats {
            total_volume: storage::get_total_volume(e),
            total_sales: storage::get_total_sales(e),
            fee_pool: storage::get_fee_pool(e),
            fee_bps: config.fee_bps,
        })
    }

    // ========================================================================
    // INTERNAL HELPERS
    // ========================================================================

    /// Extend the TTL of instance storage.
    /// Called internally during state-changing operations.
    fn extend_instance_ttl(e: &Env) {
        e.storage()
            .instance()
            .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
    }
}

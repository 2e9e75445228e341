#![no_std]

mod asset;
mod errors;
mod events;
mod storage;
mod types;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, token, Address, Env};

use crate::asset::NftClient;
use crate::errors::Error;
use crate::events::*;
use crate::types::{Auction, AuctionConfig, AuctionStats, DAY_IN_LEDGERS};

// ============================================================================
// Constants
// ============================================================================

/// TTL extension amount for instance storage (30 days)
const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// TTL threshold before extending (29 days)
const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

/// Shortest allowed auction (1 hour); rules out instant auctions
pub const MIN_AUCTION_DURATION: u64 = 3_600;

/// Longest allowed auction (30 days); rules out indefinitely locked tokens
pub const MAX_AUCTION_DURATION: u64 = 2_592_000;

// ============================================================================
// Contract
// ============================================================================

/// Timed first-price English auction house.
///
/// Sellers open an auction by handing a token over to the contract; bidders
/// escrow their full bid with the contract, and each new highest bid pays
/// the previous leader back in the same invocation. An auction ends when the
/// ledger clock passes its `end_time`; anyone may then finalize it, paying
/// the winning bid to the seller and the token to the winner, or returning
/// the token to the seller when no bid was placed. A bid-free auction may be
/// cancelled by its seller instead; once a bid lands the token is committed
/// until finalize.
///
/// The escrow ledger keeps one balance per bidder. Bids on different
/// auctions merge into that balance; refunds and payouts release exactly the
/// amount the auction at hand is owed, so a bidder outbid on one auction
/// keeps the balance backing their live bid on another.
#[contract]
pub struct AuctionHouse;

#[contractimpl]
impl AuctionHouse {
    // ========================================================================
    // INITIALIZATION
    // ========================================================================

    /// Initialize the auction house contract.
    ///
    /// # Arguments
    /// * `admin` - Address operating the deployment
    /// * `nft_contract` - NFT registry auctioned tokens come from
    /// * `payment_token` - Fungible token bids are denominated in
    pub fn initialize(
        e: &Env,
        admin: Address,
        nft_contract: Address,
        payment_token: Address,
    ) -> Result<(), Error> {
        admin.require_auth();

        if storage::has_config(e) {
            return Err(Error::AlreadyInitialized);
        }

        let config = AuctionConfig {
            admin: admin.clone(),
            nft_contract,
            payment_token,
        };

        storage::set_config(e, &config);
        Self::extend_instance_ttl(e);

        InitializedEventData { admin }.publish(e);

        Ok(())
    }

    // ========================================================================
    // AUCTION LIFECYCLE
    // ========================================================================

    /// Open an auction for a token.
    ///
    /// Takes custody of the token. The auction runs until `now + duration`;
    /// `duration` must lie within [`MIN_AUCTION_DURATION`,
    /// `MAX_AUCTION_DURATION`].
    ///
    /// # Errors
    /// * `Error::InvalidPrice` - If `starting_price` is not strictly positive
    /// * `Error::DurationTooShort` / `Error::DurationTooLong` - Duration out of bounds
    /// * `Error::AuctionExists` - If the token is already on auction
    pub fn create(
        e: &Env,
        seller: Address,
        token_id: u64,
        starting_price: i128,
        duration: u64,
    ) -> Result<u64, Error> {
        seller.require_auth();

        let config = storage::get_config(e).ok_or(Error::NotInitialized)?;

        if starting_price <= 0 {
            return Err(Error::InvalidPrice);
        }

        if duration < MIN_AUCTION_DURATION {
            return Err(Error::DurationTooShort);
        }

        if duration > MAX_AUCTION_DURATION {
            return Err(Error::DurationTooLong);
        }

        if storage::has_auction(e, token_id) {
            return Err(Error::AuctionExists);
        }

        let nft = NftClient::new(e, &config.nft_contract);
        let asset = nft.get_asset(&token_id);

        let now = e.ledger().timestamp();
        let auction = Auction {
            token_id,
            seller: seller.clone(),
            asset,
            starting_price,
            current_bid: starting_price,
            highest_bidder: None,
            created_at: now,
            end_time: now + duration,
        };

        storage::set_auction(e, &auction);
        storage::increment_total_auctions(e);

        nft.transfer(&seller, &e.current_contract_address(), &token_id);

        AuctionCreatedEventData {
            seller,
            token_id,
            starting_price,
            end_time: auction.end_time,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(token_id)
    }

    /// Place a bid.
    ///
    /// The bid must strictly exceed the current bid — the first bid must
    /// strictly exceed the starting price, and a bid equal to the current
    /// best is rejected. The full amount moves into the contract and is
    /// credited to the bidder's escrow entry; if a previous leader exists,
    /// their outbid amount is released back to them first. A leader raising
    /// their own bid is refunded the old amount the same way.
    ///
    /// # Errors
    /// * `Error::AuctionNotFound` - If the token is not on auction
    /// * `Error::AuctionEnded` - If the bidding window has closed
    /// * `Error::SelfTrade` - If the bidder is the seller
    /// * `Error::BidTooLow` - If `amount` does not strictly exceed the current bid
    pub fn bid(e: &Env, bidder: Address, token_id: u64, amount: i128) -> Result<(), Error> {
        bidder.require_auth();

        let config = storage::get_config(e).ok_or(Error::NotInitialized)?;

        let mut auction = storage::get_auction(e, token_id).ok_or(Error::AuctionNotFound)?;

        if has_ended(e, &auction) {
            return Err(Error::AuctionEnded);
        }

        if bidder == auction.seller {
            return Err(Error::SelfTrade);
        }

        if amount <= auction.current_bid {
            return Err(Error::BidTooLow);
        }

        let payment_client = token::TokenClient::new(e, &config.payment_token);

        // Pay the outbid leader back before recording the new bid. The
        // release is exactly the outbid amount: whatever else the ledger
        // holds for that bidder stays put.
        if let Some(prev_bidder) = &auction.highest_bidder {
            storage::debit_escrow(e, prev_bidder, auction.current_bid)?;
            payment_client.transfer(
                &e.current_contract_address(),
                prev_bidder,
                &auction.current_bid,
            );

            BidRefundedEventData {
                bidder: prev_bidder.clone(),
                token_id,
                amount: auction.current_bid,
            }
            .publish(e);
        }

        payment_client.transfer(&bidder, &e.current_contract_address(), &amount);
        storage::credit_escrow(e, &bidder, amount);

        auction.current_bid = amount;
        auction.highest_bidder = Some(bidder.clone());
        storage::set_auction(e, &auction);

        BidPlacedEventData {
            bidder,
            token_id,
            amount,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    /// Finalize an expired auction. Callable by anyone.
    ///
    /// The auction record is removed before any transfer, so a second
    /// finalize of the same token id fails `AuctionNotFound`. With a winner,
    /// their escrowed bid is released to the seller in full and the token
    /// goes to the winner; without one, the token returns to the seller and
    /// no escrow is touched.
    ///
    /// # Errors
    /// * `Error::AuctionNotFound` - If the token is not on auction
    /// * `Error::AuctionNotEnded` - If called before the end time
    pub fn finalize(e: &Env, token_id: u64) -> Result<(), Error> {
        let config = storage::get_config(e).ok_or(Error::NotInitialized)?;

        let auction = storage::get_auction(e, token_id).ok_or(Error::AuctionNotFound)?;

        if !has_ended(e, &auction) {
            return Err(Error::AuctionNotEnded);
        }

        storage::remove_auction(e, token_id);
        storage::increment_completed_auctions(e);

        let nft = NftClient::new(e, &config.nft_contract);

        match auction.highest_bidder {
            Some(winner) => {
                storage::debit_escrow(e, &winner, auction.current_bid)?;

                let payment_client = token::TokenClient::new(e, &config.payment_token);
                payment_client.transfer(
                    &e.current_contract_address(),
                    &auction.seller,
                    &auction.current_bid,
                );

                nft.transfer(&e.current_contract_address(), &winner, &token_id);

                SettledEventData {
                    seller: auction.seller,
                    token_id,
                    winner: Some(winner),
                    amount: auction.current_bid,
                }
                .publish(e);
            }
            None => {
                nft.transfer(&e.current_contract_address(), &auction.seller, &token_id);

                SettledEventData {
                    seller: auction.seller,
                    token_id,
                    winner: None,
                    amount: 0,
                }
                .publish(e);
            }
        }

        Self::extend_instance_ttl(e);
        Ok(())
    }

    /// Cancel a bid-free auction and return the token to its seller.
    ///
    /// # Errors
    /// * `Error::AuctionNotFound` - If the token is not on auction
    /// * `Error::NotSeller` - If the caller is not the auction's seller
    /// * `Error::HasBids` - If a bid has already been recorded
    pub fn cancel(e: &Env, seller: Address, token_id: u64) -> Result<(), Error> {
        seller.require_auth();

        let config = storage::get_config(e).ok_or(Error::NotInitialized)?;

        let auction = storage::get_auction(e, token_id).ok_or(Error::AuctionNotFound)?;

        if auction.seller != seller {
            return Err(Error::NotSeller);
        }

        if auction.highest_bidder.is_some() {
            return Err(Error::HasBids);
        }

        storage::remove_auction(e, token_id);

        let nft = NftClient::new(e, &config.nft_contract);
        nft.transfer(&e.current_contract_address(), &seller, &token_id);

        AuctionCancelledEventData { seller, token_id }.publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    /// Whether an auction exists for the token
    pub fn has_auction(e: &Env, token_id: u64) -> bool {
        storage::has_auction(e, token_id)
    }

    /// Whether an auction exists and its bidding window is still open
    pub fn is_active(e: &Env, token_id: u64) -> bool {
        match storage::get_auction(e, token_id) {
            Some(auction) => !has_ended(e, &auction),
            None => false,
        }
    }

    /// Full auction record
    pub fn get_auction(e: &Env, token_id: u64) -> Result<Auction, Error> {
        storage::get_auction(e, token_id).ok_or(Error::AuctionNotFound)
    }

    /// Escrowed value currently held for a bidder, across all their bids
    pub fn escrow_balance(e: &Env, bidder: Address) -> i128 {
        storage::get_escrow(e, &bidder)
    }

    /// Aggregate statistics snapshot
    pub fn get_stats(e: &Env) -> AuctionStats {
        AuctionStats {
            total_auctions: storage::get_total_auctions(e),
            completed_auctions: storage::get_completed_auctions(e),
        }
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

fn has_ended(e: &Env, auction: &Auction) -> bool {
    e.ledger().timestamp() >= auction.end_time
}

use soroban_sdk::testutils::Address as _;
use soroban_sdk::Address;

use crate::errors::Error;
use crate::test::{
    advance_ledger, create_default_auction, fund, setup_test, STARTING_PRICE,
};
use crate::MIN_AUCTION_DURATION;

#[test]
fn test_bid_records_and_escrows() {
    let (env, client, nft, token, _, seller, bidder) = setup_test();

    let token_id = create_default_auction(&env, &client, &nft, &seller);
    let bidder_before = token.balance(&bidder);
    let amount = STARTING_PRICE + 500;

    client.bid(&bidder, &token_id, &amount);

    // The full bid moved into the contract and shows up in the ledger.
    assert_eq!(token.balance(&bidder), bidder_before - amount);
    assert_eq!(token.balance(&client.address), amount);
    assert_eq!(client.escrow_balance(&bidder), amount);

    let auction = client.get_auction(&token_id);
    assert_eq!(auction.current_bid, amount);
    assert_eq!(auction.highest_bidder, Some(bidder));
}

#[test]
fn test_bid_equal_to_starting_price_rejected() {
    let (env, client, nft, _token, _, seller, bidder) = setup_test();

    let token_id = create_default_auction(&env, &client, &nft, &seller);
    let result = client.try_bid(&bidder, &token_id, &STARTING_PRICE);

    assert_eq!(result, Err(Ok(Error::BidTooLow)));
    assert_eq!(client.escrow_balance(&bidder), 0);
}

#[test]
fn test_bid_equal_to_current_bid_rejected() {
    let (env, client, nft, token, _, seller, bidder) = setup_test();
    let rival = Address::generate(&env);
    fund(&env, &token, &rival, 10_000_000_000);

    let token_id = create_default_auction(&env, &client, &nft, &seller);
    client.bid(&bidder, &token_id, &(STARTING_PRICE + 100));

    let result = client.try_bid(&rival, &token_id, &(STARTING_PRICE + 100));

    assert_eq!(result, Err(Ok(Error::BidTooLow)));
    let auction = client.get_auction(&token_id);
    assert_eq!(auction.highest_bidder, Some(bidder));
}

#[test]
fn test_outbid_refunds_previous_bidder() {
    let (env, client, nft, token, _, seller, first) = setup_test();
    let second = Address::generate(&env);
    fund(&env, &token, &second, 10_000_000_000);

    let token_id = create_default_auction(&env, &client, &nft, &seller);

    let first_wallet = token.balance(&first);
    let first_bid = STARTING_PRICE + 100;
    let second_bid = STARTING_PRICE + 150;

    client.bid(&first, &token_id, &first_bid);
    client.bid(&second, &token_id, &second_bid);

    // The first bidder is made whole in the same invocation that outbid
    // them; only the second bidder's value remains escrowed.
    assert_eq!(token.balance(&first), first_wallet);
    assert_eq!(client.escrow_balance(&first), 0);
    assert_eq!(client.escrow_balance(&second), second_bid);
    assert_eq!(token.balance(&client.address), second_bid);

    let auction = client.get_auction(&token_id);
    assert_eq!(auction.current_bid, second_bid);
    assert_eq!(auction.highest_bidder, Some(second));
}

#[test]
fn test_leader_raising_own_bid_is_refunded_first() {
    let (env, client, nft, token, _, seller, bidder) = setup_test();

    let token_id = create_default_auction(&env, &client, &nft, &seller);
    let wallet_before = token.balance(&bidder);

    client.bid(&bidder, &token_id, &(STARTING_PRICE + 100));
    client.bid(&bidder, &token_id, &(STARTING_PRICE + 400));

    // The first bid came back when the second landed; exactly the latest
    // bid is held.
    assert_eq!(client.escrow_balance(&bidder), STARTING_PRICE + 400);
    assert_eq!(token.balance(&bidder), wallet_before - (STARTING_PRICE + 400));

    let auction = client.get_auction(&token_id);
    assert_eq!(auction.current_bid, STARTING_PRICE + 400);
}

#[test]
fn test_bid_after_end_rejected() {
    let (env, client, nft, _token, _, seller, bidder) = setup_test();

    let token_id = create_default_auction(&env, &client, &nft, &seller);
    advance_ledger(&env, MIN_AUCTION_DURATION);

    let result = client.try_bid(&bidder, &token_id, &(STARTING_PRICE + 100));

    assert_eq!(result, Err(Ok(Error::AuctionEnded)));
}

#[test]
fn test_bid_on_own_auction_rejected() {
    let (env, client, nft, _token, _, seller, _) = setup_test();

    let token_id = create_default_auction(&env, &client, &nft, &seller);
    let result = client.try_bid(&seller, &token_id, &(STARTING_PRICE + 100));

    assert_eq!(result, Err(Ok(Error::SelfTrade)));
}

#[test]
fn test_bid_unknown_auction_rejected() {
    let (_env, client, _nft, _token, _, _, bidder) = setup_test();

    let result = client.try_bid(&bidder, &404, &STARTING_PRICE);
    assert_eq!(result, Err(Ok(Error::AuctionNotFound)));
}

// The ledger keeps a single balance per bidder, merged across auctions.
// Being outbid on one auction must release exactly that auction's amount
// and leave the balance backing the bidder's live bid elsewhere untouched.
#[test]
fn test_outbid_keeps_other_auction_escrow() {
    let (env, client, nft, token, _, seller, bidder) = setup_test();
    let rival = Address::generate(&env);
    fund(&env, &token, &rival, 10_000_000_000);

    let first_auction = create_default_auction(&env, &client, &nft, &seller);
    let second_auction = create_default_auction(&env, &client, &nft, &seller);

    let bid_on_first = STARTING_PRICE + 100;
    let bid_on_second = STARTING_PRICE + 200;

    client.bid(&bidder, &first_auction, &bid_on_first);
    client.bid(&bidder, &second_auction, &bid_on_second);

    // Both bids merged into one entry.
    assert_eq!(
        client.escrow_balance(&bidder),
        bid_on_first + bid_on_second
    );

    let wallet_before = token.balance(&bidder);
    client.bid(&rival, &first_auction, &(bid_on_first + 50));

    // Exactly the outbid amount came back; the second auction's bid is
    // still fully backed.
    assert_eq!(token.balance(&bidder), wallet_before + bid_on_first);
    assert_eq!(client.escrow_balance(&bidder), bid_on_second);
    assert_eq!(
        client.get_auction(&second_auction).current_bid,
        bid_on_second
    );
}

#![cfg(test)]

pub mod bidding_test;

use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, Address, Env, String,
};

use bazaar_nft::{NftRegistry, NftRegistryClient};

use crate::{AuctionHouse, AuctionHouseClient};

pub const STARTING_PRICE: i128 = 1_000_000_000;

pub fn setup_test() -> (
    Env,
    AuctionHouseClient<'static>,
    NftRegistryClient<'static>,
    token::TokenClient<'static>,
    Address,
    Address,
    Address,
) {
    let env = Env::default();
    env.mock_all_auths();

    let nft_id = env.register(NftRegistry, ());
    let nft = NftRegistryClient::new(&env, &nft_id);

    let contract_id = env.register(AuctionHouse, ());
    let client = AuctionHouseClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let seller = Address::generate(&env);
    let bidder = Address::generate(&env);

    let token_admin = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_admin.clone());
    let token_address = token_contract.address();
    let token_client = token::TokenClient::new(&env, &token_address);

    fund(&env, &token_client, &seller, 10_000_000_000);
    fund(&env, &token_client, &bidder, 10_000_000_000);

    client.initialize(&admin, &nft_id, &token_address);

    (env, client, nft, token_client, admin, seller, bidder)
}

/// Mint payment tokens to an address
pub fn fund(env: &Env, token: &token::TokenClient, to: &Address, amount: i128) {
    token::StellarAssetClient::new(env, &token.address).mint(to, &amount);
}

pub fn mint_nft(env: &Env, nft: &NftRegistryClient, owner: &Address) -> u64 {
    nft.mint(
        owner,
        &String::from_str(env, "Meteorite Slice"),
        &String::from_str(env, "Etched cross-section of the Gibeon meteorite"),
        &String::from_str(env, "ipfs://QmGibeon"),
    )
}

/// Open an auction with the default starting price and the minimum duration
pub fn create_default_auction(
    env: &Env,
    client: &AuctionHouseClient,
    nft: &NftRegistryClient,
    seller: &Address,
) -> u64 {
    let token_id = mint_nft(env, nft, seller);
    client.create(
        seller,
        &token_id,
        &STARTING_PRICE,
        &crate::MIN_AUCTION_DURATION,
    );
    token_id
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    env.ledger().with_mut(|li| {
        li.timestamp += seconds;
    });
}

#![cfg(test)]

use soroban_sdk::{testutils::Address as _, Address, Env, String};

use crate::errors::Error;
use crate::{NftRegistry, NftRegistryClient};

fn setup_test() -> (Env, NftRegistryClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(NftRegistry, ());
    let client = NftRegistryClient::new(&env, &contract_id);

    let creator = Address::generate(&env);

    (env, client, creator)
}

fn mint_default(env: &Env, client: &NftRegistryClient, creator: &Address) -> u64 {
    client.mint(
        creator,
        &String::from_str(env, "Nebula #1"),
        &String::from_str(env, "A swirl of gas and dust"),
        &String::from_str(env, "ipfs://QmNebula1"),
    )
}

#[test]
fn test_mint_assigns_sequential_ids() {
    let (env, client, creator) = setup_test();

    let first = mint_default(&env, &client, &creator);
    let second = mint_default(&env, &client, &creator);

    assert_eq!(first, 1);
    assert_eq!(second, 2);
    assert_eq!(client.total_minted(), 2);
}

#[test]
fn test_mint_stores_record_and_owner() {
    let (env, client, creator) = setup_test();

    let token_id = mint_default(&env, &client, &creator);

    let asset = client.get_asset(&token_id);
    assert_eq!(asset.id, token_id);
    assert_eq!(asset.creator, creator);
    assert_eq!(asset.name, String::from_str(&env, "Nebula #1"));
    assert_eq!(client.owner_of(&token_id), creator);
}

#[test]
fn test_mint_empty_name_rejected() {
    let (env, client, creator) = setup_test();

    let result = client.try_mint(
        &creator,
        &String::from_str(&env, ""),
        &String::from_str(&env, "desc"),
        &String::from_str(&env, "ipfs://x"),
    );

    assert_eq!(result, Err(Ok(Error::InvalidMetadata)));
}

#[test]
fn test_transfer_moves_ownership() {
    let (env, client, creator) = setup_test();
    let recipient = Address::generate(&env);

    let token_id = mint_default(&env, &client, &creator);
    client.transfer(&creator, &recipient, &token_id);

    assert_eq!(client.owner_of(&token_id), recipient);
    // The record itself is untouched by the transfer.
    assert_eq!(client.get_asset(&token_id).creator, creator);
}

#[test]
fn test_transfer_by_non_owner_rejected() {
    let (env, client, creator) = setup_test();
    let stranger = Address::generate(&env);

    let token_id = mint_default(&env, &client, &creator);
    let result = client.try_transfer(&stranger, &creator, &token_id);

    assert_eq!(result, Err(Ok(Error::NotTokenOwner)));
}

#[test]
fn test_transfer_unknown_token_rejected() {
    let (env, client, creator) = setup_test();
    let recipient = Address::generate(&env);

    let result = client.try_transfer(&creator, &recipient, &999);

    assert_eq!(result, Err(Ok(Error::TokenNotFound)));
}

#[test]
fn test_owner_of_unknown_token() {
    let (_env, client, _creator) = setup_test();

    let result = client.try_owner_of(&42);

    assert_eq!(result, Err(Ok(Error::TokenNotFound)));
}

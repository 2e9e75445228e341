use soroban_sdk::{contractclient, contracttype, Address, Env, String};

/// Snapshot of an NFT record, taken from the registry when custody is
/// acquired and embedded in the auction.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetInfo {
    pub id: u64,
    pub creator: Address,
    pub name: String,
    pub description: String,
    pub image_url: String,
}

/// Client interface for the NFT registry contract.
#[contractclient(name = "NftClient")]
pub trait NftContract {
    /// Move a token to a new owner; fails in the registry unless `from`
    /// currently owns it.
    fn transfer(env: Env, from: Address, to: Address, token_id: u64);

    /// Current owner of a token.
    fn owner_of(env: Env, token_id: u64) -> Address;

    /// Immutable record for a token.
    fn get_asset(env: Env, token_id: u64) -> AssetInfo;
}

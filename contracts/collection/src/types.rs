use soroban_sdk::{contracttype, Address, BytesN, String};

/// Collection settings, written by the constructor. Only `signer` changes
/// afterwards, through the owner-only `set_signer`.
///
/// `mint_end_timestamp` and `max_supply` use 0 for "no limit".
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CollectionConfig {
    pub owner: Address,
    pub name: String,
    pub symbol: String,
    /// Base URI returned for every token.
    pub uri: String,
    /// Ed25519 public key whose signature admits an invite. Chosen by the
    /// owner at creation (the factory requires the owner's auth) and
    /// rotated only by the owner.
    pub signer: BytesN<32>,
    pub mint_end_timestamp: u64,
    pub max_supply: u32,
    pub one_token_per_address: bool,
}

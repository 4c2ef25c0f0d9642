extern crate std;

use daonative_core::Error;
use ed25519_dalek::{Signer, SigningKey};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    Address, BytesN, Env, String,
};

use crate::minting;
use crate::signature::InviteVerifier;
use crate::{Collection, CollectionClient};

const NAME: &str = "Research Guild";
const SYMBOL: &str = "RGLD";
const BASE_URI: &str = "ipfs://guild/meta.json";

pub struct CollectionFixture {
    pub env: Env,
    pub collection: CollectionClient<'static>,
    pub owner: Address,
    pub signing_key: SigningKey,
}

#[derive(Default)]
pub struct Settings {
    pub mint_end_timestamp: u64,
    pub max_supply: u32,
    pub one_token_per_address: bool,
}

impl CollectionFixture {
    pub fn code(&self, code: &str) -> String {
        String::from_str(&self.env, code)
    }

    /// Owner signature over `(code, limit)`.
    pub fn invite(&self, code: &str, limit: u32) -> BytesN<64> {
        let digest = self.collection.invite_digest(&self.code(code), &limit);
        sign(&self.env, &self.signing_key, &digest)
    }

    pub fn mint(&self, to: &Address, code: &str, limit: u32) -> u32 {
        let signature = self.invite(code, limit);
        self.collection
            .safe_mint(to, &self.code(code), &limit, &signature)
    }

    pub fn try_mint(&self, to: &Address, code: &str, limit: u32) -> Result<u32, Error> {
        let signature = self.invite(code, limit);
        match self
            .collection
            .try_safe_mint(to, &self.code(code), &limit, &signature)
        {
            Ok(Ok(id)) => Ok(id),
            Err(Ok(err)) => Err(err),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}

pub fn sign(env: &Env, key: &SigningKey, digest: &BytesN<32>) -> BytesN<64> {
    BytesN::from_array(env, &key.sign(&digest.to_array()).to_bytes())
}

pub fn setup_with(settings: Settings) -> CollectionFixture {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let signing_key = SigningKey::from_bytes(&[7u8; 32]);
    let signer = BytesN::from_array(&env, &signing_key.verifying_key().to_bytes());

    let contract_id = env.register(
        Collection,
        (
            owner.clone(),
            String::from_str(&env, NAME),
            String::from_str(&env, SYMBOL),
            String::from_str(&env, BASE_URI),
            settings.mint_end_timestamp,
            settings.max_supply,
            settings.one_token_per_address,
            signer,
        ),
    );
    let collection = CollectionClient::new(&env, &contract_id);

    CollectionFixture {
        env,
        collection,
        owner,
        signing_key,
    }
}

pub fn setup() -> CollectionFixture {
    setup_with(Settings::default())
}

// ── Bootstrap ────────────────────────────────────────────────────────

#[test]
fn test_constructor_stores_settings() {
    let f = setup_with(Settings {
        mint_end_timestamp: 5_000,
        max_supply: 10,
        one_token_per_address: true,
    });
    assert_eq!(f.collection.name(), String::from_str(&f.env, NAME));
    assert_eq!(f.collection.symbol(), String::from_str(&f.env, SYMBOL));
    assert_eq!(f.collection.get_owner(), f.owner);
    assert_eq!(f.collection.get_mint_end_timestamp(), 5_000);
    assert_eq!(f.collection.get_max_supply(), 10);
    assert!(f.collection.is_one_token_per_address());
    assert!(!f.collection.is_paused());
    assert_eq!(f.collection.total_supply(), 0);
}

// ── Minting ──────────────────────────────────────────────────────────

#[test]
fn test_mint_assigns_sequential_ids() {
    let f = setup();
    let alice = Address::generate(&f.env);
    let bob = Address::generate(&f.env);

    assert_eq!(f.mint(&alice, "open", 0), 0);
    assert_eq!(f.mint(&bob, "open", 0), 1);
    assert_eq!(f.mint(&alice, "open", 0), 2);

    assert_eq!(f.collection.owner_of(&1), bob);
    assert_eq!(f.collection.balance(&alice), 2);
    assert_eq!(f.collection.total_supply(), 3);
    assert_eq!(f.collection.invite_uses(&f.code("open"), &0), 3);
    assert_eq!(
        f.collection.token_uri(&2),
        String::from_str(&f.env, BASE_URI)
    );
}

#[test]
fn test_max_supply_caps_minting() {
    let f = setup_with(Settings {
        max_supply: 2,
        ..Settings::default()
    });
    f.mint(&Address::generate(&f.env), "a", 0);
    f.mint(&Address::generate(&f.env), "a", 0);

    assert_eq!(
        f.try_mint(&Address::generate(&f.env), "a", 0),
        Err(Error::MaxSupplyExceeded)
    );
    assert_eq!(f.collection.total_supply(), 2);
}

#[test]
fn test_mint_window_closes_after_end_timestamp() {
    let f = setup_with(Settings {
        mint_end_timestamp: 1_000,
        ..Settings::default()
    });
    let alice = Address::generate(&f.env);

    f.env.ledger().set_timestamp(1_000);
    assert_eq!(f.mint(&alice, "a", 0), 0);

    f.env.ledger().set_timestamp(1_001);
    assert_eq!(f.try_mint(&alice, "a", 0), Err(Error::MintWindowClosed));
}

#[test]
fn test_signature_from_other_key_rejected() {
    let f = setup();
    let alice = Address::generate(&f.env);
    let code = f.code("vip");
    let forger = SigningKey::from_bytes(&[9u8; 32]);
    let forged = sign(&f.env, &forger, &f.collection.invite_digest(&code, &1));

    assert_eq!(
        f.collection.try_safe_mint(&alice, &code, &1, &forged),
        Err(Ok(Error::InvalidSignature))
    );
    assert_eq!(f.collection.total_supply(), 0);
}

#[test]
fn test_signature_binds_the_limit() {
    let f = setup();
    let alice = Address::generate(&f.env);
    let signed_for_one = f.invite("vip", 1);

    assert_eq!(
        f.collection
            .try_safe_mint(&alice, &f.code("vip"), &5, &signed_for_one),
        Err(Ok(Error::InvalidSignature))
    );
}

#[test]
fn test_invite_limit_is_enforced() {
    let f = setup();
    f.mint(&Address::generate(&f.env), "duo", 2);
    f.mint(&Address::generate(&f.env), "duo", 2);

    assert_eq!(
        f.try_mint(&Address::generate(&f.env), "duo", 2),
        Err(Error::InvalidInviteCode)
    );
    assert_eq!(f.collection.invite_uses(&f.code("duo"), &2), 2);
}

#[test]
fn test_exhausted_code_stays_dead_under_other_limits() {
    let f = setup();
    f.mint(&Address::generate(&f.env), "solo", 1);

    // Re-signing the same code as unlimited or with a higher limit does not revive it.
    assert_eq!(
        f.try_mint(&Address::generate(&f.env), "solo", 0),
        Err(Error::InvalidInviteCode)
    );
    assert_eq!(
        f.try_mint(&Address::generate(&f.env), "solo", 5),
        Err(Error::InvalidInviteCode)
    );
    assert_eq!(f.collection.total_supply(), 1);
}

#[test]
fn test_one_token_per_address_on_mint_and_transfer() {
    let f = setup_with(Settings {
        one_token_per_address: true,
        ..Settings::default()
    });
    let alice = Address::generate(&f.env);
    let bob = Address::generate(&f.env);
    let carol = Address::generate(&f.env);
    f.mint(&alice, "a", 0);
    f.mint(&bob, "a", 0);

    assert_eq!(f.try_mint(&alice, "a", 0), Err(Error::RecipientHasToken));
    assert_eq!(
        f.collection.try_transfer(&alice, &bob, &0),
        Err(Ok(Error::RecipientHasToken))
    );

    f.collection.transfer(&alice, &carol, &0);
    assert_eq!(f.collection.owner_of(&0), carol);
    assert_eq!(f.collection.balance(&alice), 0);
    assert_eq!(f.collection.balance(&carol), 1);
}

#[test]
fn test_transfer_requires_ownership() {
    let f = setup();
    let alice = Address::generate(&f.env);
    let mallory = Address::generate(&f.env);
    f.mint(&alice, "a", 0);

    assert_eq!(
        f.collection.try_transfer(&mallory, &mallory, &0),
        Err(Ok(Error::NotTokenOwner))
    );
    assert_eq!(
        f.collection.try_transfer(&alice, &mallory, &3),
        Err(Ok(Error::TokenNotFound))
    );
    assert_eq!(f.collection.try_token_uri(&3), Err(Ok(Error::TokenNotFound)));
}

// ── Pause ────────────────────────────────────────────────────────────

#[test]
fn test_pause_blocks_mint_and_transfer() {
    let f = setup();
    let alice = Address::generate(&f.env);
    let bob = Address::generate(&f.env);
    f.mint(&alice, "a", 0);

    f.collection.pause(&f.owner);
    assert!(f.collection.is_paused());
    assert_eq!(f.try_mint(&bob, "a", 0), Err(Error::ContractPaused));
    assert_eq!(
        f.collection.try_transfer(&alice, &bob, &0),
        Err(Ok(Error::ContractPaused))
    );

    f.collection.unpause(&f.owner);
    assert_eq!(f.mint(&bob, "a", 0), 1);
    f.collection.transfer(&alice, &bob, &0);
    assert_eq!(f.collection.balance(&bob), 2);
}

#[test]
fn test_pause_state_errors_and_owner_only() {
    let f = setup();
    let stranger = Address::generate(&f.env);

    assert_eq!(f.collection.try_unpause(&f.owner), Err(Ok(Error::NotPaused)));
    assert_eq!(f.collection.try_pause(&stranger), Err(Ok(Error::NotOwner)));

    f.collection.pause(&f.owner);
    assert_eq!(
        f.collection.try_pause(&f.owner),
        Err(Ok(Error::ContractPaused))
    );
    assert_eq!(f.collection.try_unpause(&stranger), Err(Ok(Error::NotOwner)));
}

// ── Signer ───────────────────────────────────────────────────────────

#[test]
fn test_set_signer_is_owner_only() {
    let f = setup();
    let stranger = Address::generate(&f.env);
    let own_key = SigningKey::from_bytes(&[9u8; 32]);
    let own_signer = BytesN::from_array(&f.env, &own_key.verifying_key().to_bytes());
    let before = f.collection.get_signer();

    assert_eq!(
        f.collection.try_set_signer(&stranger, &own_signer),
        Err(Ok(Error::NotOwner))
    );
    assert_eq!(f.collection.get_signer(), before);

    // The stranger cannot mint with invites signed by their own key.
    let alice = Address::generate(&f.env);
    let code = f.code("vip");
    let forged = sign(&f.env, &own_key, &f.collection.invite_digest(&code, &1));
    assert_eq!(
        f.collection.try_safe_mint(&alice, &code, &1, &forged),
        Err(Ok(Error::InvalidSignature))
    );
}

#[test]
fn test_rotated_signer_replaces_old_key() {
    let mut f = setup();
    let alice = Address::generate(&f.env);
    let bob = Address::generate(&f.env);
    let old_invite = f.invite("vip", 5);
    f.mint(&alice, "vip", 5);

    let new_key = SigningKey::from_bytes(&[11u8; 32]);
    let new_signer = BytesN::from_array(&f.env, &new_key.verifying_key().to_bytes());
    f.collection.set_signer(&f.owner, &new_signer);
    assert_eq!(f.collection.get_signer(), new_signer);

    assert_eq!(
        f.collection
            .try_safe_mint(&bob, &f.code("vip"), &5, &old_invite),
        Err(Ok(Error::InvalidSignature))
    );

    f.signing_key = new_key;
    assert_eq!(f.mint(&bob, "vip", 5), 1);
    assert_eq!(f.collection.invite_uses(&f.code("vip"), &5), 2);
}

// ── Engine ───────────────────────────────────────────────────────────

struct AcceptAll;

impl InviteVerifier for AcceptAll {
    fn verify(&self, _: &Env, _: &BytesN<32>, _: &BytesN<32>, _: &BytesN<64>) -> bool {
        true
    }
}

#[test]
fn test_engine_checks_window_before_signature() {
    let f = setup_with(Settings {
        mint_end_timestamp: 10,
        ..Settings::default()
    });
    let alice = Address::generate(&f.env);
    let junk = BytesN::from_array(&f.env, &[0u8; 64]);

    f.env.ledger().set_timestamp(11);
    assert_eq!(
        f.collection
            .try_safe_mint(&alice, &f.code("a"), &0, &junk),
        Err(Ok(Error::MintWindowClosed))
    );
}

#[test]
fn test_engine_with_stub_verifier() {
    let f = setup_with(Settings {
        max_supply: 1,
        ..Settings::default()
    });
    let alice = Address::generate(&f.env);
    let code = f.code("any");
    let junk = BytesN::from_array(&f.env, &[0u8; 64]);

    let (first, second) = f.env.as_contract(&f.collection.address, || {
        (
            minting::safe_mint(&f.env, &AcceptAll, &alice, &code, 0, &junk),
            minting::safe_mint(&f.env, &AcceptAll, &alice, &code, 0, &junk),
        )
    });

    assert_eq!(first, Ok(0));
    assert_eq!(second, Err(Error::MaxSupplyExceeded));
    assert_eq!(f.collection.owner_of(&0), alice);
}

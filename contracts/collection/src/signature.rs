//! Invite attestation.
//!
//! The collection owner signs `invite_digest(code, limit)` off-chain with the
//! Ed25519 key registered as `signer`. Minters present that signature to
//! `safe_mint`.

use ed25519_dalek::{Signature, VerifyingKey};
use soroban_sdk::{xdr::ToXdr, BytesN, Env, String};

/// Decides whether `signature` attests `digest` on behalf of `signer`.
pub trait InviteVerifier {
    fn verify(
        &self,
        env: &Env,
        signer: &BytesN<32>,
        digest: &BytesN<32>,
        signature: &BytesN<64>,
    ) -> bool;
}

/// Strict Ed25519 verification. Malformed keys verify nothing.
pub struct Ed25519Verifier;

impl InviteVerifier for Ed25519Verifier {
    fn verify(
        &self,
        _env: &Env,
        signer: &BytesN<32>,
        digest: &BytesN<32>,
        signature: &BytesN<64>,
    ) -> bool {
        let Ok(key) = VerifyingKey::from_bytes(&signer.to_array()) else {
            return false;
        };
        let signature = Signature::from_bytes(&signature.to_array());
        key.verify_strict(&digest.to_array(), &signature).is_ok()
    }
}

/// `sha256(xdr((invite_code, limit)))`.
pub fn invite_digest(env: &Env, invite_code: &String, limit: u32) -> BytesN<32> {
    let payload = (invite_code.clone(), limit).to_xdr(env);
    env.crypto().sha256(&payload).to_bytes()
}

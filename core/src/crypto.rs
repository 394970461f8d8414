//! The signature primitive consumed by `SIG_VERIFY`.

use fastcrypto::{
    ed25519::{Ed25519PublicKey, Ed25519Signature},
    traits::{ToFromBytes, VerifyingKey},
};

/// Verify an Ed25519 signature of `message` under `public_key`.
///
/// Malformed signature or key encodings verify as `false`; a script can
/// observe a bad proof but never a crypto-level diagnostic.
pub fn verify_signature(signature: &[u8], message: &[u8], public_key: &[u8]) -> bool {
    let Ok(signature) = <Ed25519Signature as ToFromBytes>::from_bytes(signature) else {
        return false;
    };
    let Ok(public_key) = <Ed25519PublicKey as ToFromBytes>::from_bytes(public_key) else {
        return false;
    };
    public_key.verify(message, &signature).is_ok()
}

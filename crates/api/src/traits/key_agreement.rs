//! Trait definition for two-party key agreement
//!
//! Both plain ECDH and the password-authenticated EC-SPEKE variant expose
//! the same two steps to the authentication layer: generate an ephemeral
//! key pair, then combine the local private key with the peer's public key.
//! Methods take `&self` because a SPEKE instance carries the derived
//! generator; ECDH is a unit struct.

use super::serialize::{Serialize, SerializeSecret};
use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Two-party key agreement over an elliptic curve group.
pub trait KeyAgreement {
    /// Public key sent to the peer.
    type PublicKey: Clone + Serialize;

    /// Private scalar. Zeroized when dropped.
    type PrivateKey: Zeroize + Clone + SerializeSecret;

    /// Agreed secret. May encode the point at infinity, which callers must
    /// treat as a protocol failure.
    type SharedSecret: Zeroize + Clone + SerializeSecret;

    /// Key pair container.
    type KeyPair: Clone;

    /// Returns the mechanism name.
    fn name(&self) -> &'static str;

    /// Generate a new key pair.
    ///
    /// Fails only if the generator cannot produce randomness.
    fn keypair<R: CryptoRng + RngCore>(&self, rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract the public key from a key pair.
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract the private key from a key pair.
    fn private_key(keypair: &Self::KeyPair) -> Self::PrivateKey;

    /// Combine the local private key with the peer's public key.
    ///
    /// The peer key is validated before use.
    fn derive_shared_secret(
        &self,
        private_key: &Self::PrivateKey,
        peer_public_key: &Self::PublicKey,
    ) -> Result<Self::SharedSecret>;
}

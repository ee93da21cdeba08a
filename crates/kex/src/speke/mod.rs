//! EC-SPEKE over P-256
//!
//! Password-authenticated key agreement: both peers derive the same
//! generator B from a shared password and the pair of GUIDs, then run
//! Diffie-Hellman over B instead of G. A peer without the password ends up
//! with a different generator and a different shared secret.
//!
//! B = EC-REDP-2(SHA-256(password ‖ client GUID ‖ service GUID)), using the
//! fixed points Q1 and Q2 from [`redp::base_points`].

pub mod redp;

pub use redp::{redp1, redp2};

use crate::ecdh::p256::{
    derive_shared_secret, generate_key_pair_with_base, EccPrivateKey, EccPublicKey, EcdhKeyPair,
    SharedSecret,
};
use crate::error::{validate, Result};
use core::fmt;
use meshbus_algorithms::ec::p256::AffinePoint;
use meshbus_api::{Error as ApiError, Guid128, KeyAgreement, Result as ApiResult};
use meshbus_common::security::ZeroizeGuard;
use rand::{CryptoRng, RngCore};
use sha2::digest::generic_array::GenericArray;
use sha2::{Digest, Sha256};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// An EC-SPEKE session bound to one password and GUID pair
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SpekeP256 {
    base: AffinePoint,
}

impl SpekeP256 {
    /// Derive the password generator for this client and service
    ///
    /// Fails with `InvalidParameter` for an empty password and with a
    /// derivation error in the negligible case that the generator is the
    /// point at infinity.
    pub fn new(password: &[u8], client_guid: &Guid128, service_guid: &Guid128) -> ApiResult<Self> {
        Self::derive(password, client_guid, service_guid).map_err(ApiError::from)
    }

    fn derive(password: &[u8], client_guid: &Guid128, service_guid: &Guid128) -> Result<Self> {
        validate::parameter(
            !password.is_empty(),
            "SpekeP256::new",
            "password must not be empty",
        )?;

        let mut hasher = Sha256::new();
        hasher.update(password);
        hasher.update(client_guid.as_bytes());
        hasher.update(service_guid.as_bytes());
        let mut raw = [0u8; 32];
        let mut digest = ZeroizeGuard::new(&mut raw);
        hasher.finalize_into(GenericArray::from_mut_slice(&mut digest[..]));

        let (q1, q2) = redp::base_points();
        let base = redp::redp2(&digest, &q1, &q2);
        drop(digest);
        validate::derivation(
            !base.is_infinity(),
            "EC-REDP-2",
            "derived generator is the point at infinity",
        )?;

        tracing::debug!(
            client = %client_guid,
            service = %service_guid,
            "derived EC-SPEKE generator"
        );
        Ok(Self { base })
    }

    /// The derived generator B
    pub fn base_point(&self) -> &AffinePoint {
        &self.base
    }

    /// Ephemeral key pair over B
    pub fn generate_key_pair<R: CryptoRng + RngCore>(&self, rng: &mut R) -> ApiResult<EcdhKeyPair> {
        generate_key_pair_with_base(rng, &self.base)
    }

    /// Same computation as plain ECDH; the peer key must lie on the curve
    pub fn derive_shared_secret(
        &self,
        private_key: &EccPrivateKey,
        peer_public_key: &EccPublicKey,
    ) -> ApiResult<SharedSecret> {
        derive_shared_secret(private_key, peer_public_key)
    }
}

impl fmt::Debug for SpekeP256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpekeP256").finish_non_exhaustive()
    }
}

impl KeyAgreement for SpekeP256 {
    type PublicKey = EccPublicKey;
    type PrivateKey = EccPrivateKey;
    type SharedSecret = SharedSecret;
    type KeyPair = EcdhKeyPair;

    fn name(&self) -> &'static str {
        "EC-SPEKE-P256"
    }

    fn keypair<R: CryptoRng + RngCore>(&self, rng: &mut R) -> ApiResult<Self::KeyPair> {
        self.generate_key_pair(rng)
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        *keypair.public_key()
    }

    fn private_key(keypair: &Self::KeyPair) -> Self::PrivateKey {
        keypair.private_key().clone()
    }

    fn derive_shared_secret(
        &self,
        private_key: &Self::PrivateKey,
        peer_public_key: &Self::PublicKey,
    ) -> ApiResult<Self::SharedSecret> {
        SpekeP256::derive_shared_secret(self, private_key, peer_public_key)
    }
}

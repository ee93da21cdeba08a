//! Test helpers shared by the meshbus integration tests

use meshbus_api::{KeyAgreement, Result as ApiResult};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

pub mod vectors;

/// Deterministic RNG so failures reproduce
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Decode a 64-digit hex string into 32 bytes
pub fn hex32(s: &str) -> Result<[u8; 32], hex::FromHexError> {
    let mut out = [0u8; 32];
    hex::decode_to_slice(s, &mut out)?;
    Ok(out)
}

/// Run a full two-party exchange and return both sides' secrets
///
/// Each side may use its own mechanism instance, e.g. two SPEKE sessions
/// built from different passwords.
pub fn exchange<K, R>(alice: &K, bob: &K, rng: &mut R) -> ApiResult<(K::SharedSecret, K::SharedSecret)>
where
    K: KeyAgreement,
    R: CryptoRng + RngCore,
{
    let a = alice.keypair(rng)?;
    let b = bob.keypair(rng)?;
    let ab = alice.derive_shared_secret(&K::private_key(&a), &K::public_key(&b))?;
    let ba = bob.derive_shared_secret(&K::private_key(&b), &K::public_key(&a))?;
    Ok((ab, ba))
}

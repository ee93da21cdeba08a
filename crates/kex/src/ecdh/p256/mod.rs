//! ECDH over NIST P-256
//!
//! Public keys travel as the raw affine coordinates X ‖ Y, 32 bytes each
//! and without a format prefix. The shared secret is the whole agreed
//! point; most callers feed [`SharedSecret::x_coordinate`] into a KDF.
//!
//! Peer public keys are validated (range and curve equation) every time
//! they are used, including keys that arrived through `serde`.

use crate::error::{validate, Error as KexError};
use core::fmt;
use meshbus_algorithms::ec::p256::{self as ec_p256, AffinePoint, Scalar};
use meshbus_algorithms::error::Error as PrimitiveError;
use meshbus_api::error::ResultExt;
use meshbus_api::{
    Error as ApiError, KeyAgreement, Result as ApiResult, Serialize, SerializeSecret,
};
use meshbus_common::security::SecretBuffer;
use meshbus_params::CurveId;
use meshbus_params::traditional::ecdh::{
    ECDH_P256_COORDINATE_SIZE, ECDH_P256_PRIVATE_KEY_SIZE, ECDH_P256_PUBLIC_KEY_SIZE,
    ECDH_P256_SHARED_SECRET_SIZE,
};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// ECDH key agreement with the P-256 curve
#[derive(Clone, Copy, Debug, Default)]
pub struct EcdhP256;

impl EcdhP256 {
    /// Curve identifier announced during mechanism negotiation
    pub const CURVE: CurveId = CurveId::NistP256;
}

/// Public key: affine X and Y, big-endian
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EccPublicKey {
    x: [u8; ECDH_P256_COORDINATE_SIZE],
    y: [u8; ECDH_P256_COORDINATE_SIZE],
}

/// Private key: a scalar in `[1, n-1]`, big-endian
#[derive(Clone, Zeroize, ZeroizeOnDrop, Debug, PartialEq, Eq)]
pub struct EccPrivateKey(SecretBuffer<ECDH_P256_PRIVATE_KEY_SIZE>);

/// Result of an ECDH computation
///
/// Holds the agreed point, which can be the point at infinity. Callers must
/// check [`SharedSecret::is_infinity`] and treat it as a failed exchange.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret {
    point: AffinePoint,
}

/// Public and private key generated together
#[derive(Clone, Debug)]
pub struct EcdhKeyPair {
    public_key: EccPublicKey,
    private_key: EccPrivateKey,
}

impl EccPublicKey {
    /// Create a public key from its coordinates, validating the point
    pub fn new(
        x: [u8; ECDH_P256_COORDINATE_SIZE],
        y: [u8; ECDH_P256_COORDINATE_SIZE],
    ) -> ApiResult<Self> {
        let key = Self { x, y };
        key.validate()?;
        Ok(key)
    }

    pub(crate) fn from_point(point: &AffinePoint) -> Self {
        Self {
            x: point.x_bytes(),
            y: point.y_bytes(),
        }
    }

    /// X coordinate
    pub fn x(&self) -> &[u8; ECDH_P256_COORDINATE_SIZE] {
        &self.x
    }

    /// Y coordinate
    pub fn y(&self) -> &[u8; ECDH_P256_COORDINATE_SIZE] {
        &self.y
    }

    /// X ‖ Y
    pub fn to_array(&self) -> [u8; ECDH_P256_PUBLIC_KEY_SIZE] {
        let mut out = [0u8; ECDH_P256_PUBLIC_KEY_SIZE];
        out[..ECDH_P256_COORDINATE_SIZE].copy_from_slice(&self.x);
        out[ECDH_P256_COORDINATE_SIZE..].copy_from_slice(&self.y);
        out
    }

    /// Check that the key is a finite point on the curve
    pub fn validate(&self) -> ApiResult<()> {
        self.to_point().map(|_| ())
    }

    pub(crate) fn to_point(&self) -> ApiResult<AffinePoint> {
        AffinePoint::from_be_bytes(&self.x, &self.y).map_err(|e| {
            tracing::debug!(error = %e, "rejected P-256 public key");
            ApiError::from(KexError::from(e))
        })
    }
}

impl Serialize for EccPublicKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        if bytes.len() != ECDH_P256_PUBLIC_KEY_SIZE {
            return Err(ApiError::InvalidLength {
                context: "EccPublicKey::from_bytes",
                expected: ECDH_P256_PUBLIC_KEY_SIZE,
                actual: bytes.len(),
            });
        }
        let mut x = [0u8; ECDH_P256_COORDINATE_SIZE];
        let mut y = [0u8; ECDH_P256_COORDINATE_SIZE];
        x.copy_from_slice(&bytes[..ECDH_P256_COORDINATE_SIZE]);
        y.copy_from_slice(&bytes[ECDH_P256_COORDINATE_SIZE..]);
        Self::new(x, y)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.to_array().to_vec()
    }
}

impl EccPrivateKey {
    pub(crate) fn from_scalar(scalar: &Scalar) -> Self {
        Self(scalar.as_secret_buffer().clone())
    }

    pub(crate) fn to_scalar(&self) -> ApiResult<Scalar> {
        parse_scalar(self.0.as_ref())
    }
}

fn parse_scalar(bytes: &[u8]) -> ApiResult<Scalar> {
    validate::key(
        bytes.iter().any(|&b| b != 0),
        "P-256 private",
        "scalar cannot be zero",
    )?;
    Scalar::from_slice(bytes).map_err(|e| {
        let err = match e {
            PrimitiveError::Parameter { reason, .. } => KexError::InvalidKey {
                key_type: "P-256 private",
                reason,
            },
            other => KexError::from(other),
        };
        ApiError::from(err)
    })
}

impl SerializeSecret for EccPrivateKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        if bytes.len() != ECDH_P256_PRIVATE_KEY_SIZE {
            return Err(ApiError::InvalidLength {
                context: "EccPrivateKey::from_bytes",
                expected: ECDH_P256_PRIVATE_KEY_SIZE,
                actual: bytes.len(),
            });
        }
        let scalar = parse_scalar(bytes)?;
        Ok(Self::from_scalar(&scalar))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.as_ref().to_vec())
    }
}

impl SharedSecret {
    /// True if the agreed point is the point at infinity
    pub fn is_infinity(&self) -> bool {
        self.point.is_infinity()
    }

    /// X coordinate of the agreed point; all zero for infinity
    pub fn x_coordinate(&self) -> Zeroizing<[u8; ECDH_P256_COORDINATE_SIZE]> {
        if self.point.is_infinity() {
            return Zeroizing::new([0u8; ECDH_P256_COORDINATE_SIZE]);
        }
        Zeroizing::new(self.point.x_bytes())
    }

    /// X ‖ Y of the agreed point; all zero for infinity
    pub fn to_array(&self) -> Zeroizing<[u8; ECDH_P256_SHARED_SECRET_SIZE]> {
        let mut out = Zeroizing::new([0u8; ECDH_P256_SHARED_SECRET_SIZE]);
        if !self.point.is_infinity() {
            let x = Zeroizing::new(self.point.x_bytes());
            let y = Zeroizing::new(self.point.y_bytes());
            out[..ECDH_P256_COORDINATE_SIZE].copy_from_slice(x.as_ref());
            out[ECDH_P256_COORDINATE_SIZE..].copy_from_slice(y.as_ref());
        }
        out
    }
}

impl SerializeSecret for SharedSecret {
    /// All-zero input decodes to the point at infinity; anything else must
    /// be a point on the curve.
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        if bytes.len() != ECDH_P256_SHARED_SECRET_SIZE {
            return Err(ApiError::InvalidLength {
                context: "SharedSecret::from_bytes",
                expected: ECDH_P256_SHARED_SECRET_SIZE,
                actual: bytes.len(),
            });
        }
        if bytes.iter().all(|&b| b == 0) {
            return Ok(Self {
                point: AffinePoint::infinity(),
            });
        }
        let (x, y) = bytes.split_at(ECDH_P256_COORDINATE_SIZE);
        let point = AffinePoint::from_be_bytes(x, y)
            .map_err(KexError::from)
            .with_context("SharedSecret::from_bytes")?;
        Ok(Self { point })
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.to_array().to_vec())
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedSecret")
            .field("infinity", &self.point.is_infinity())
            .finish_non_exhaustive()
    }
}

impl EcdhKeyPair {
    /// Rebuild a key pair from a stored private key
    pub fn from_private_key(private_key: &EccPrivateKey) -> ApiResult<Self> {
        let scalar = private_key.to_scalar()?;
        let point = ec_p256::scalar_mult_base_g(&scalar);
        Ok(Self {
            public_key: EccPublicKey::from_point(&point),
            private_key: private_key.clone(),
        })
    }

    /// The public half
    pub fn public_key(&self) -> &EccPublicKey {
        &self.public_key
    }

    /// The private half
    pub fn private_key(&self) -> &EccPrivateKey {
        &self.private_key
    }
}

/// Generate a key pair over the standard generator G
///
/// The private scalar is drawn uniformly from `[1, n-1]`. Fails only if
/// `rng` reports an error.
pub fn generate_key_pair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<EcdhKeyPair> {
    generate_key_pair_with_base(rng, &ec_p256::base_point_g())
}

pub(crate) fn generate_key_pair_with_base<R: CryptoRng + RngCore>(
    rng: &mut R,
    base: &AffinePoint,
) -> ApiResult<EcdhKeyPair> {
    let (scalar, point) = ec_p256::generate_keypair_with_base(rng, base)
        .map_err(|e| ApiError::from(KexError::from(e)))?;
    tracing::debug!("generated P-256 key pair");
    Ok(EcdhKeyPair {
        public_key: EccPublicKey::from_point(&point),
        private_key: EccPrivateKey::from_scalar(&scalar),
    })
}

/// Multiply the peer's public point by the local private scalar
///
/// The peer key is validated first. A result at infinity is returned
/// inside the [`SharedSecret`], not as an error.
pub fn derive_shared_secret(
    private_key: &EccPrivateKey,
    peer_public_key: &EccPublicKey,
) -> ApiResult<SharedSecret> {
    let peer = peer_public_key.to_point()?;
    let scalar = private_key.to_scalar()?;
    let point = ec_p256::scalar_mult(&scalar, &peer);
    if point.is_infinity() {
        tracing::debug!("ECDH produced the point at infinity");
    }
    Ok(SharedSecret { point })
}

impl KeyAgreement for EcdhP256 {
    type PublicKey = EccPublicKey;
    type PrivateKey = EccPrivateKey;
    type SharedSecret = SharedSecret;
    type KeyPair = EcdhKeyPair;

    fn name(&self) -> &'static str {
        "ECDH-P256"
    }

    fn keypair<R: CryptoRng + RngCore>(&self, rng: &mut R) -> ApiResult<Self::KeyPair> {
        generate_key_pair(rng)
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.public_key
    }

    fn private_key(keypair: &Self::KeyPair) -> Self::PrivateKey {
        keypair.private_key.clone()
    }

    fn derive_shared_secret(
        &self,
        private_key: &Self::PrivateKey,
        peer_public_key: &Self::PublicKey,
    ) -> ApiResult<Self::SharedSecret> {
        derive_shared_secret(private_key, peer_public_key)
    }
}

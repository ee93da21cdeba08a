//! P-256 scalars: integers modulo the group order n

use super::bigval::{BigVal, Canonical, Modulus};
use super::constants::P256_SCALAR_SIZE;
use crate::error::{validate, Error, Result};
use meshbus_common::security::SecretBuffer;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

const N: Modulus = Modulus::Order;

/// P-256 scalar value, stored big-endian
///
/// Used for private keys and scalar multiplication. Automatically
/// zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop, Debug, PartialEq, Eq)]
pub struct Scalar(SecretBuffer<P256_SCALAR_SIZE>);

impl Scalar {
    /// Create a scalar from big-endian bytes
    ///
    /// The value must lie in `[1, n-1]`; anything else is rejected rather
    /// than reduced, so rejection sampling over random bytes stays uniform.
    pub fn new(data: [u8; P256_SCALAR_SIZE]) -> Result<Self> {
        let value = Zeroizing::new(BigVal::from_binary(&data));
        validate::parameter(!value.is_zero(), "P-256 Scalar", "scalar cannot be zero")?;
        let reduced = Zeroizing::new(value.precise_reduce(N));
        validate::parameter(
            bool::from(reduced.value().ct_eq(&value)),
            "P-256 Scalar",
            "scalar must be below the group order",
        )?;
        Ok(Scalar(SecretBuffer::new(data)))
    }

    /// Parse from a slice of exactly 32 bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        validate::length("P-256 Scalar", bytes.len(), P256_SCALAR_SIZE)?;
        let mut data = Zeroizing::new([0u8; P256_SCALAR_SIZE]);
        data.copy_from_slice(bytes);
        Self::new(*data)
    }

    /// Wrap a value already reduced modulo n; zero is allowed
    fn from_canonical(value: &Canonical) -> Self {
        Scalar(SecretBuffer::new(value.to_be_bytes()))
    }

    /// Access the underlying secret bytes
    pub fn as_secret_buffer(&self) -> &SecretBuffer<P256_SCALAR_SIZE> {
        &self.0
    }

    /// Big-endian encoding
    pub fn serialize(&self) -> [u8; P256_SCALAR_SIZE] {
        let mut out = [0u8; P256_SCALAR_SIZE];
        out.copy_from_slice(self.0.as_ref());
        out
    }

    /// True for the additive identity
    pub fn is_zero(&self) -> bool {
        self.0.as_ref().iter().all(|&b| b == 0)
    }

    pub(crate) fn to_bigval(&self) -> Zeroizing<BigVal> {
        Zeroizing::new(BigVal::from_binary(self.0.as_ref()))
    }

    fn to_canonical(&self) -> Zeroizing<Canonical> {
        Zeroizing::new(self.to_bigval().precise_reduce(N))
    }

    /// `self + other mod n`
    pub fn add_mod_n(&self, other: &Self) -> Self {
        let sum = Zeroizing::new(*self.to_bigval() + *other.to_bigval());
        Self::from_canonical(&sum.precise_reduce(N))
    }

    /// `self × other mod n`
    pub fn mul_mod_n(&self, other: &Self) -> Self {
        let product = Zeroizing::new(self.to_bigval().mul_mod(&other.to_bigval(), N));
        Self::from_canonical(&product.precise_reduce(N))
    }

    /// `self⁻¹ mod n` by binary extended GCD
    pub fn invert_mod_n(&self) -> Result<Self> {
        let inverse = self
            .to_canonical()
            .invert(N)
            .ok_or_else(|| Error::param("P-256 Scalar", "cannot invert zero scalar"))?;
        Ok(Self::from_canonical(&inverse))
    }

    /// `n - self`, zero stays zero
    pub fn negate(&self) -> Self {
        let negated = Zeroizing::new(N.value() - *self.to_bigval());
        Self::from_canonical(&negated.precise_reduce(N))
    }
}

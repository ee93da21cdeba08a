//! Core value types shared by the key agreement layer
//!
//! [`Guid128`] identifies a bus peer. EC-SPEKE binds the client and service
//! GUIDs into the password-derived generator, so both sides must agree on
//! them byte for byte.

use crate::{Error, Result};
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize as SerdeSerialize};

/// Size of a [`Guid128`] in bytes
pub const GUID128_SIZE: usize = 16;

/// 128-bit globally unique peer identifier
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(SerdeSerialize, Deserialize))]
pub struct Guid128([u8; GUID128_SIZE]);

impl Guid128 {
    /// Wrap raw GUID bytes
    pub const fn new(bytes: [u8; GUID128_SIZE]) -> Self {
        Self(bytes)
    }

    /// Parse from a slice of exactly 16 bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != GUID128_SIZE {
            return Err(Error::InvalidLength {
                context: "Guid128::from_slice",
                expected: GUID128_SIZE,
                actual: bytes.len(),
            });
        }
        let mut raw = [0u8; GUID128_SIZE];
        raw.copy_from_slice(bytes);
        Ok(Self(raw))
    }

    /// Generate a random GUID
    pub fn random<R: rand::RngCore + rand::CryptoRng>(rng: &mut R) -> Self {
        let mut raw = [0u8; GUID128_SIZE];
        rng.fill_bytes(&mut raw);
        Self(raw)
    }

    /// Raw bytes in wire order
    pub fn as_bytes(&self) -> &[u8; GUID128_SIZE] {
        &self.0
    }
}

impl AsRef<[u8]> for Guid128 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; GUID128_SIZE]> for Guid128 {
    fn from(bytes: [u8; GUID128_SIZE]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Guid128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Guid128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Guid128({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_from_slice_rejects_wrong_length() {
        assert!(Guid128::from_slice(&[0u8; 15]).is_err());
        assert!(Guid128::from_slice(&[0u8; 17]).is_err());
        assert!(Guid128::from_slice(&[7u8; 16]).is_ok());
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_display_is_lower_hex() {
        let mut raw = [0u8; 16];
        raw[0] = 0xAB;
        raw[15] = 0x01;
        let guid = Guid128::new(raw);
        assert_eq!(guid.to_string(), "ab000000000000000000000000000001");
    }

    #[test]
    fn test_random_guids_differ() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_ne!(Guid128::random(&mut rng), Guid128::random(&mut rng));
    }
}

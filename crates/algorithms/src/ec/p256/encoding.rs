//! Conversion between [`BigVal`] and big-endian byte strings

use super::bigval::{BigVal, Canonical};
use super::constants::{BIGLEN, BIGVAL_BYTES, P256_FIELD_ELEMENT_SIZE};

impl BigVal {
    /// Write big-endian into `out`
    ///
    /// Longer buffers are sign-extended. Shorter buffers silently lose the
    /// high-order bytes.
    pub fn to_binary(&self, out: &mut [u8]) {
        let len = out.len();
        let high = if self.is_negative() { 0xff } else { 0x00 };
        for i in 0..len {
            out[len - 1 - i] = if i < BIGVAL_BYTES {
                (self.0[i / 4] >> (8 * (i % 4))) as u8
            } else {
                high
            };
        }
    }

    /// Read a big-endian byte string
    ///
    /// Inputs longer than 36 bytes silently lose their high-order bytes;
    /// shorter inputs are zero-extended.
    pub fn from_binary(src: &[u8]) -> BigVal {
        let mut words = [0u32; BIGLEN];
        for (i, &byte) in src.iter().rev().take(BIGVAL_BYTES).enumerate() {
            words[i / 4] |= (byte as u32) << (8 * (i % 4));
        }
        BigVal(words)
    }
}

impl Canonical {
    /// 32-byte big-endian encoding
    pub fn to_be_bytes(&self) -> [u8; P256_FIELD_ELEMENT_SIZE] {
        let mut out = [0u8; P256_FIELD_ELEMENT_SIZE];
        self.value().to_binary(&mut out);
        out
    }
}

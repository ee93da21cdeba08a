//! Word-level constants for P-256 arithmetic
//!
//! Values are little-endian by 32-bit word with a ninth sign/overflow word.
//! Byte-level forms of the same parameters live in `meshbus_params`.

use super::bigval::BigVal;

/// Number of 32-bit words in a [`BigVal`]
pub const BIGLEN: usize = 9;

/// Index of the most significant (signed) word
pub const MSW: usize = BIGLEN - 1;

/// Size of a P-256 scalar in bytes
pub const P256_SCALAR_SIZE: usize = 32;

/// Size of a P-256 field element in bytes
pub const P256_FIELD_ELEMENT_SIZE: usize = 32;

/// Size of an encoded public point (X ‖ Y) in bytes
pub const P256_POINT_SIZE: usize = 2 * P256_FIELD_ELEMENT_SIZE;

/// Size of a [`BigVal`] in bytes
pub const BIGVAL_BYTES: usize = 4 * BIGLEN;

/// Field prime p = 2^256 - 2^224 + 2^192 + 2^96 - 1
pub const FIELD_MODULUS: BigVal = BigVal::from_words([
    0xffff_ffff, 0xffff_ffff, 0xffff_ffff, 0x0000_0000, 0x0000_0000,
    0x0000_0000, 0x0000_0001, 0xffff_ffff, 0x0000_0000,
]);

/// Group order n
pub const ORDER_MODULUS: BigVal = BigVal::from_words([
    0xfc63_2551, 0xf3b9_cac2, 0xa717_9e84, 0xbce6_faad, 0xffff_ffff,
    0xffff_ffff, 0x0000_0000, 0xffff_ffff, 0x0000_0000,
]);

/// Curve coefficient b
pub const CURVE_B: BigVal = BigVal::from_words([
    0x27d2_604b, 0x3bce_3c3e, 0xcc53_b0f6, 0x651d_06b0, 0x7698_86bc,
    0xb3eb_bd55, 0xaa3a_93e7, 0x5ac6_35d8, 0x0000_0000,
]);

/// Generator x coordinate
pub const GENERATOR_X: BigVal = BigVal::from_words([
    0xd898_c296, 0xf4a1_3945, 0x2deb_33a0, 0x7703_7d81, 0x63a4_40f2,
    0xf8bc_e6e5, 0xe12c_4247, 0x6b17_d1f2, 0x0000_0000,
]);

/// Generator y coordinate
pub const GENERATOR_Y: BigVal = BigVal::from_words([
    0x37bf_51f5, 0xcbb6_4068, 0x6b31_5ece, 0x2bce_3357, 0x7c0f_9e16,
    0x8ee7_eb4a, 0xfe1a_7f9b, 0x4fe3_42e2, 0x0000_0000,
]);

/// (p + 1) / 4, the square-root exponent (p ≡ 3 mod 4)
pub const SQRT_EXPONENT: BigVal = BigVal::from_words([
    0x0000_0000, 0x0000_0000, 0x4000_0000, 0x0000_0000, 0x0000_0000,
    0x4000_0000, 0xc000_0000, 0x3fff_ffff, 0x0000_0000,
]);

/// n as signed digits, one per word, used by reduction modulo the order
///
/// Sum of `ORDER_DIGITS[i] * 2^(32 i)` equals n, and every digit has
/// magnitude below 2^31 so a product with a 32-bit word fits an `i64`.
pub(crate) const ORDER_DIGITS: [i64; BIGLEN] = [
    0xfc63_2551 - 0x1_0000_0000,
    0xf3b9_cac2 - 0x1_0000_0000 + 1,
    0xa717_9e84 - 0x1_0000_0000 + 1,
    0xbce6_faad - 0x1_0000_0000 + 1,
    0xffff_ffff - 0x1_0000_0000 + 1,
    0xffff_ffff - 0x1_0000_0000 + 1,
    1,
    0xffff_ffff - 0x1_0000_0000,
    1,
];

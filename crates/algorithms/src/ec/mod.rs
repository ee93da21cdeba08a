//! Elliptic curve primitives
//!
//! Only NIST P-256 is provided. Its arithmetic runs on nine-word signed
//! integers with lazy reduction; see [`p256`].

pub mod p256;

pub use p256::{AffinePoint as P256Point, Scalar as P256Scalar};

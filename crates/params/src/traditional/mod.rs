//! Constants for traditional elliptic-curve algorithms

pub mod ecdh;
pub mod p256;

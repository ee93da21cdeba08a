//! Elliptic Curve Diffie-Hellman

pub mod p256;

pub use p256::{EccPrivateKey, EccPublicKey, EcdhKeyPair, EcdhP256, SharedSecret};

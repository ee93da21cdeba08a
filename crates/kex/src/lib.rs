//! Key agreement over NIST P-256
//!
//! Two mechanisms share the [`KeyAgreement`](meshbus_api::KeyAgreement)
//! surface:
//! - [`EcdhP256`]: ephemeral Diffie-Hellman over the standard generator
//! - [`SpekeP256`]: EC-SPEKE, where the generator is derived from a shared
//!   password and the two peers' GUIDs
//!
//! Public keys are the raw affine coordinates X ‖ Y with no format prefix.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod ecdh;
pub mod error;
pub mod speke;

pub use ecdh::{EccPrivateKey, EccPublicKey, EcdhKeyPair, EcdhP256, SharedSecret};
pub use error::{Error, Result};
pub use speke::SpekeP256;

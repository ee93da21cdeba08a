//! Public API traits and types for the meshbus security core
//!
//! This crate is the surface the authentication layer of the bus programs
//! against: the shared error type, the [`KeyAgreement`] trait implemented
//! by ECDH and EC-SPEKE, byte serialization contracts and the [`Guid128`]
//! peer identifier.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use types::*;

pub use traits::{KeyAgreement, Serialize, SerializeSecret};

pub use traits::{key_agreement, serialize};

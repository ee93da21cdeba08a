//! Elliptic curve arithmetic for the meshbus key agreement layer
//!
//! This crate implements the NIST P-256 group: a signed nine-word big
//! integer engine with approximate reduction modulo p and n, modular
//! division by binary extended GCD, and point arithmetic in Jacobian
//! coordinates. Protocols built on it live in `meshbus-kex`.
//!
//! The library is usable in both `std` and `no_std` environments.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub use error::{validate, Error, Result};

pub mod ec;
pub use ec::{p256, P256Point, P256Scalar};

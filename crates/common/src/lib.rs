//! Shared functionality for the meshbus crates
//!
//! Holds the secret-handling types used wherever private scalars or
//! password digests pass through the key agreement layer.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod security;

pub use security::{SecretBuffer, ZeroizeGuard};

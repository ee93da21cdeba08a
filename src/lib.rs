//! # meshbus
//!
//! Security and routing core of a peer-to-peer message bus.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! meshbus = "0.3"
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `kex` (default): ECDH and EC-SPEKE key agreement over P-256
//! - `router` (default): the endpoint routing rule table
//! - `algorithms`: raw P-256 field, scalar and point arithmetic
//! - `serde`: `Serialize`/`Deserialize` for public key types
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`meshbus-api`]: Error type, [`KeyAgreement`](api::KeyAgreement) trait, `Guid128`
//! - [`meshbus-common`]: Secret buffers that zeroize on drop
//! - [`meshbus-params`]: Curve and protocol constants
//! - [`meshbus-algorithms`]: P-256 arithmetic
//! - [`meshbus-kex`]: ECDH and EC-SPEKE
//! - [`meshbus-router`]: Routing rule table

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use meshbus_api as api;
pub use meshbus_common as common;
pub use meshbus_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use meshbus_algorithms as algorithms;

#[cfg(feature = "kex")]
pub use meshbus_kex as kex;

#[cfg(feature = "router")]
pub use meshbus_router as router;

/// Common imports for meshbus users
pub mod prelude {
    pub use crate::api::{Error, Guid128, KeyAgreement, Result, Serialize, SerializeSecret};

    pub use crate::common::{SecretBuffer, ZeroizeGuard};

    #[cfg(feature = "kex")]
    pub use crate::kex::{EccPrivateKey, EccPublicKey, EcdhKeyPair, EcdhP256, SharedSecret, SpekeP256};

    #[cfg(feature = "router")]
    pub use crate::router::{MatchRule, RuleTable, RuleTableGuard};
}

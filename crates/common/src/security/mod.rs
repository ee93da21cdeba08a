//! Security primitives for handling secret material
//!
//! Every secret held by the key agreement layer sits in one of these types
//! so that it is wiped on drop, including on early `?` returns.

pub mod secret;

pub use secret::{SecretBuffer, ZeroizeGuard};

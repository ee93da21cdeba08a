//! Constants for Elliptic Curve Diffie-Hellman over P-256

/// Size of one affine coordinate on the wire in bytes
pub const ECDH_P256_COORDINATE_SIZE: usize = 32;

/// Size of a public key (X ‖ Y, no format prefix) in bytes
pub const ECDH_P256_PUBLIC_KEY_SIZE: usize = 2 * ECDH_P256_COORDINATE_SIZE;

/// Size of a private key scalar in bytes
pub const ECDH_P256_PRIVATE_KEY_SIZE: usize = 32;

/// Size of an encoded shared secret (X ‖ Y of the agreed point) in bytes
pub const ECDH_P256_SHARED_SECRET_SIZE: usize = 2 * ECDH_P256_COORDINATE_SIZE;

//! Constant values for the meshbus security core
//!
//! Curve parameters live under [`traditional`], wire-level protocol
//! constants (SPEKE domain separation and base points) under [`protocol`].

#![no_std]

pub mod protocol;
pub mod traditional;

/// Identifier of an elliptic curve usable by the key agreement layer
///
/// Only NIST P-256 is supported. The discriminant is the value carried on
/// the wire by authentication mechanisms negotiating a curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CurveId {
    /// NIST P-256 (secp256r1)
    NistP256 = 0,
}

impl CurveId {
    /// Map a wire value back to a curve identifier
    pub const fn from_wire(value: u8) -> Option<Self> {
        match value {
            0 => Some(CurveId::NistP256),
            _ => None,
        }
    }

    /// Wire value for this curve
    pub const fn wire_value(self) -> u8 {
        self as u8
    }
}

//! NIST P-256 arithmetic on nine-word signed integers
//!
//! The curve is y² = x³ - 3x + b over F_p with
//! - p = 2^256 - 2^224 + 2^192 + 2^96 - 1
//! - n = 0xFFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632551
//!
//! Field and scalar values are [`BigVal`]s kept approximately reduced
//! between operations and precisely reduced into [`Canonical`] before any
//! comparison or encoding. Points use Jacobian coordinates internally and
//! affine coordinates at the API boundary.
//!
//! Scalar multiplication skips leading zero bits and is therefore not
//! constant-time in the bit length of the scalar.

mod bigval;
mod constants;
mod encoding;
mod field;
mod inverse;
mod mul;
mod point;
mod scalar;

pub use bigval::{BigVal, Canonical, Modulus};
pub use constants::{
    BIGLEN, CURVE_B, FIELD_MODULUS, GENERATOR_X, GENERATOR_Y, ORDER_MODULUS,
    P256_FIELD_ELEMENT_SIZE, P256_POINT_SIZE, P256_SCALAR_SIZE, SQRT_EXPONENT,
};
pub use inverse::divide;
pub use point::{curve_rhs, AffinePoint, JacobianPoint};
pub use scalar::Scalar;

use crate::error::{Error, Result};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

/// The standard generator G
pub fn base_point_g() -> AffinePoint {
    AffinePoint::generator()
}

/// `scalar × G`
pub fn scalar_mult_base_g(scalar: &Scalar) -> AffinePoint {
    scalar_mult(scalar, &base_point_g())
}

/// `scalar × point`
///
/// The result may be infinity, e.g. for a point of small order; callers
/// decide whether that is an error.
pub fn scalar_mult(scalar: &Scalar, point: &AffinePoint) -> AffinePoint {
    point.mul(&scalar.to_bigval())
}

/// Generate a keypair over the standard generator
pub fn generate_keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<(Scalar, AffinePoint)> {
    generate_keypair_with_base(rng, &base_point_g())
}

/// Generate a keypair over an arbitrary base point
///
/// The private scalar is drawn uniformly from `[1, n-1]` by rejection
/// sampling; the public point is `scalar × base`.
pub fn generate_keypair_with_base<R: CryptoRng + RngCore>(
    rng: &mut R,
    base: &AffinePoint,
) -> Result<(Scalar, AffinePoint)> {
    if base.is_infinity() {
        return Err(Error::InvalidPoint {
            context: "P-256 keypair generation",
            reason: "base point at infinity",
        });
    }
    let mut bytes = Zeroizing::new([0u8; P256_SCALAR_SIZE]);
    loop {
        rng.try_fill_bytes(bytes.as_mut())
            .map_err(|_| Error::RandomGeneration {
                context: "P-256 keypair generation",
            })?;
        if let Ok(private_key) = Scalar::new(*bytes) {
            let public_key = scalar_mult(&private_key, base);
            return Ok((private_key, public_key));
        }
    }
}

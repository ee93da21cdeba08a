//! P-256 points in affine and Jacobian coordinates
//!
//! The affine point (x, y) corresponds to the Jacobian point (X, Y, Z) for
//! any non-zero Z with X = Z²·x and Y = Z³·y. The point at infinity is
//! (1, 1, 0) in Jacobian form and carries an explicit flag in affine form.
//!
//! Jacobian X and Y may be approximately reduced. Z is always precisely
//! reduced because the infinity test is a zero test on Z; the type of the
//! field enforces this.

use super::bigval::{BigVal, Canonical, Modulus};
use super::constants::{
    BIGLEN, CURVE_B, FIELD_MODULUS, GENERATOR_X, GENERATOR_Y, P256_FIELD_ELEMENT_SIZE,
};
use super::inverse::divide;
use crate::error::{validate, Result};
use core::cmp::Ordering;
use core::ops::Add;
use zeroize::Zeroize;

const F: Modulus = Modulus::Field;

/// A point in affine coordinates
#[derive(Clone, Copy, Default, Zeroize)]
pub struct AffinePoint {
    x: BigVal,
    y: BigVal,
    infinity: bool,
}

/// A point in Jacobian coordinates
#[derive(Clone, Copy, Debug, Zeroize)]
pub struct JacobianPoint {
    x: BigVal,
    y: BigVal,
    z: Canonical,
}

impl AffinePoint {
    /// The point at infinity
    pub const fn infinity() -> Self {
        Self {
            x: BigVal::ZERO,
            y: BigVal::ZERO,
            infinity: true,
        }
    }

    /// The standard generator G
    pub const fn generator() -> Self {
        Self {
            x: GENERATOR_X,
            y: GENERATOR_Y,
            infinity: false,
        }
    }

    /// Wrap coordinates without any check
    pub const fn new_unchecked(x: BigVal, y: BigVal) -> Self {
        Self {
            x,
            y,
            infinity: false,
        }
    }

    /// Decode big-endian coordinates and validate the point
    ///
    /// Coordinates longer than 36 bytes lose their high bytes on decoding
    /// and are then caught by the range check.
    pub fn from_be_bytes(x: &[u8], y: &[u8]) -> Result<Self> {
        let point = Self::new_unchecked(BigVal::from_binary(x), BigVal::from_binary(y));
        point.validate()?;
        Ok(point)
    }

    /// x coordinate; meaningless for infinity
    pub fn x(&self) -> &BigVal {
        &self.x
    }

    /// y coordinate; meaningless for infinity
    pub fn y(&self) -> &BigVal {
        &self.y
    }

    /// 32-byte big-endian x coordinate
    pub fn x_bytes(&self) -> [u8; P256_FIELD_ELEMENT_SIZE] {
        self.x.precise_reduce(F).to_be_bytes()
    }

    /// 32-byte big-endian y coordinate
    pub fn y_bytes(&self) -> [u8; P256_FIELD_ELEMENT_SIZE] {
        self.y.precise_reduce(F).to_be_bytes()
    }

    /// True for the point at infinity
    pub fn is_infinity(&self) -> bool {
        self.infinity
    }

    /// Curve membership test
    ///
    /// Infinity is on the curve. Otherwise both coordinates must lie in
    /// `[0, p)` and satisfy y² = x³ - 3x + b.
    pub fn is_on_curve(&self) -> bool {
        if self.infinity {
            return true;
        }
        if !in_field_range(&self.x) || !in_field_range(&self.y) {
            return false;
        }
        self.y.square(F).precise_reduce(F) == curve_rhs(&self.x)
    }

    /// Public key validation: on the curve and not infinity
    pub fn validate(&self) -> Result<()> {
        validate::point(!self.infinity, "AffinePoint::validate", "point at infinity")?;
        validate::point(
            in_field_range(&self.x) && in_field_range(&self.y),
            "AffinePoint::validate",
            "coordinate out of range",
        )?;
        validate::point(self.is_on_curve(), "AffinePoint::validate", "point not on curve")
    }

    /// Lift to Jacobian coordinates with Z = 1
    pub fn to_jacobian(&self) -> JacobianPoint {
        if self.infinity {
            return JacobianPoint::infinity();
        }
        JacobianPoint {
            x: self.x,
            y: self.y,
            z: Canonical::ONE,
        }
    }

    /// (x, p - y)
    pub fn negate(&self) -> Self {
        if self.infinity {
            return *self;
        }
        Self {
            x: self.x.precise_reduce(F).into(),
            y: self.y.precise_reduce(F).negate_mod_p().into(),
            infinity: false,
        }
    }

    /// Scalar multiplication `k × self`
    ///
    /// Left-to-right, two bits at a time, with 1P, 2P and 3P precomputed.
    /// Leading zero bit pairs are skipped, so the running time depends on
    /// the bit length of `k`. A zero or negative `k` yields infinity;
    /// negative scalars are not supported.
    pub fn mul(&self, k: &BigVal) -> AffinePoint {
        if k.is_zero() || k.is_negative() || self.infinity {
            return AffinePoint::infinity();
        }

        let mut q = self.to_jacobian().double();
        let two_p = q.to_affine();
        q = q.add_affine(self);
        let three_p = q.to_affine();
        let table = [AffinePoint::infinity(), *self, two_p, three_p];

        let top = (0..32 * BIGLEN - 1)
            .rev()
            .step_by(2)
            .find(|&i| two_bits(k, i) != 0)
            .unwrap_or(0);

        let mut q = JacobianPoint::infinity();
        for i in (0..=top).rev().step_by(2) {
            let bits = two_bits(k, i);
            q = q.double().double();
            if bits != 0 {
                q = q.add_affine(&table[bits]);
            }
        }

        let result = q.to_affine();
        q.zeroize();
        result
    }
}

/// x³ - 3x + b, the value y² must take on the curve
pub fn curve_rhs(x: &BigVal) -> Canonical {
    let x3 = x.square(F).mul_mod(x, F);
    x3.sub_p(&x.triple()).add_p(&CURVE_B).precise_reduce(F)
}

/// Bits i+1 and i of k; i must be even
fn two_bits(k: &BigVal, i: usize) -> usize {
    ((k.0[i / 32] >> (i % 32)) & 3) as usize
}

fn in_field_range(v: &BigVal) -> bool {
    !v.is_negative() && v.signed_cmp(&FIELD_MODULUS) == Ordering::Less
}

impl PartialEq for AffinePoint {
    fn eq(&self, other: &Self) -> bool {
        match (self.infinity, other.infinity) {
            (true, true) => true,
            (false, false) => {
                self.x.precise_reduce(F) == other.x.precise_reduce(F)
                    && self.y.precise_reduce(F) == other.y.precise_reduce(F)
            }
            _ => false,
        }
    }
}

impl Eq for AffinePoint {}

impl Add for AffinePoint {
    type Output = AffinePoint;

    fn add(self, rhs: AffinePoint) -> AffinePoint {
        self.to_jacobian().add_affine(&rhs).to_affine()
    }
}

impl core::fmt::Debug for AffinePoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.infinity {
            return write!(f, "AffinePoint(infinity)");
        }
        f.debug_struct("AffinePoint")
            .field("x", &self.x)
            .field("y", &self.y)
            .finish()
    }
}

impl JacobianPoint {
    /// The point at infinity, (1, 1, 0)
    pub const fn infinity() -> Self {
        Self {
            x: BigVal::ONE,
            y: BigVal::ONE,
            z: Canonical::ZERO,
        }
    }

    /// True when Z is zero
    pub fn is_infinity(&self) -> bool {
        self.z.is_zero()
    }

    /// X coordinate, possibly approximately reduced
    pub fn x(&self) -> &BigVal {
        &self.x
    }

    /// Y coordinate, possibly approximately reduced
    pub fn y(&self) -> &BigVal {
        &self.y
    }

    /// Z coordinate
    pub fn z(&self) -> &Canonical {
        &self.z
    }

    /// Convert to affine form with precisely reduced coordinates
    pub fn to_affine(&self) -> AffinePoint {
        if self.is_infinity() {
            return AffinePoint::infinity();
        }
        let z_inv: BigVal = divide(&BigVal::ONE, self.z.value(), F).into();
        let z_inv2 = z_inv.square(F);
        let x = self.x.mul_mod(&z_inv2, F);
        let z_inv3 = z_inv2.mul_mod(&z_inv, F);
        let y = self.y.mul_mod(&z_inv3, F);
        AffinePoint {
            x: x.precise_reduce(F).into(),
            y: y.precise_reduce(F).into(),
            infinity: false,
        }
    }

    /// 2·self (HMV Algorithm 3.21, a = -3)
    pub fn double(&self) -> JacobianPoint {
        if self.is_infinity() {
            return JacobianPoint::infinity();
        }
        let z1 = self.z.value();

        let mut t1 = z1.square(F);
        let mut t2 = self.x.sub_p(&t1);
        t1 = self.x.add_p(&t1);
        t2 = t2.mul_mod(&t1, F).triple();
        let mut y3 = self.y.add_p(&self.y);
        let z3 = y3.mul_mod(z1, F);
        y3 = y3.square(F);
        let t3 = y3.mul_mod(&self.x, F);
        y3 = y3.square(F).halve_mod_p();
        let mut x3 = t2.square(F);
        t1 = t3.add_p(&t3);
        x3 = x3.sub_p(&t1);
        t1 = t3.sub_p(&x3).mul_mod(&t2, F);

        JacobianPoint {
            x: x3,
            y: t1.sub_p(&y3),
            z: z3.precise_reduce(F),
        }
    }

    /// self + q for an affine q (HMV Algorithm 3.22)
    ///
    /// Handles infinity on either side. Equal inputs fall through to
    /// doubling and inverse inputs give infinity.
    pub fn add_affine(&self, q: &AffinePoint) -> JacobianPoint {
        if q.infinity {
            return *self;
        }
        if self.is_infinity() {
            return q.to_jacobian();
        }
        let z1 = self.z.value();

        let mut t1 = z1.square(F);
        let mut t2 = t1.mul_mod(z1, F);
        t1 = t1.mul_mod(&q.x, F);
        t2 = t2.mul_mod(&q.y, F);
        t1 = t1.sub_p(&self.x);
        t2 = t2.sub_p(&self.y);

        let h = t1.precise_reduce(F);
        if h.is_zero() {
            return if t2.precise_reduce(F).is_zero() {
                q.to_jacobian().double()
            } else {
                JacobianPoint::infinity()
            };
        }
        let t1: BigVal = h.into();

        let z3 = z1.mul_mod(&t1, F).precise_reduce(F);
        let mut t3 = t1.square(F);
        let mut t4 = t3.mul_mod(&t1, F);
        t3 = t3.mul_mod(&self.x, F);
        let t1 = t3.add_p(&t3);
        let mut x3 = t2.square(F);
        x3 = x3.sub_p(&t1);
        x3 = x3.sub_p(&t4);
        t3 = t3.sub_p(&x3).mul_mod(&t2, F);
        t4 = t4.mul_mod(&self.y, F);

        JacobianPoint {
            x: x3,
            y: t3.sub_p(&t4),
            z: z3,
        }
    }
}

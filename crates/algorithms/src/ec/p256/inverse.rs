//! Modular division by the extended binary GCD (HMV Algorithm 2.22)

use super::bigval::{BigVal, Canonical, Modulus};
use core::cmp::Ordering;
use zeroize::Zeroize;

/// `num / den mod modulus`
///
/// `num` and `den` must be positive and precisely reduced, and the modulus
/// odd (both p and n are). A zero denominator never terminates; debug
/// builds assert against it.
pub fn divide(num: &BigVal, den: &BigVal, modulus: Modulus) -> Canonical {
    debug_assert!(!den.is_zero(), "division by zero");

    let m = modulus.value();
    let mut u = *den;
    let mut v = m;
    let mut x1 = *num;
    let mut x2 = BigVal::ZERO;

    while !u.is_one() && !v.is_one() {
        while !u.is_odd() {
            u = u.halve();
            if x1.is_odd() {
                x1 = x1 + m;
            }
            x1 = x1.halve();
        }
        while !v.is_odd() {
            v = v.halve();
            if x2.is_odd() {
                x2 = x2 + m;
            }
            x2 = x2.halve();
        }
        if u.signed_cmp(&v) != Ordering::Less {
            u = u - v;
            x1 = x1 - x2;
        } else {
            v = v - u;
            x2 = x2 - x1;
        }
    }

    let result = if u.is_one() {
        x1.precise_reduce(modulus)
    } else {
        x2.precise_reduce(modulus)
    };

    u.zeroize();
    v.zeroize();
    x1.zeroize();
    x2.zeroize();
    result
}

impl Canonical {
    /// Multiplicative inverse, or `None` for zero
    pub fn invert(&self, modulus: Modulus) -> Option<Canonical> {
        if self.is_zero() {
            return None;
        }
        Some(divide(&BigVal::ONE, self.value(), modulus))
    }
}

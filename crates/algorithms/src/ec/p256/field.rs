//! Exponentiation and square roots in the P-256 base field

use super::bigval::{BigVal, Canonical, Modulus};
use super::constants::{BIGLEN, SQRT_EXPONENT};

impl BigVal {
    /// `self^exp mod p`, left-to-right square and multiply
    ///
    /// Not constant-time in the exponent. Used with public exponents only.
    pub fn pow_mod_p(&self, exp: &BigVal) -> Canonical {
        let mut acc = BigVal::ONE;
        for i in (0..32 * (BIGLEN - 1)).rev() {
            acc = acc.square(Modulus::Field);
            if (exp.0[i / 32] >> (i % 32)) & 1 == 1 {
                acc = acc.mul_mod(self, Modulus::Field);
            }
        }
        acc.precise_reduce(Modulus::Field)
    }
}

impl Canonical {
    /// A square root modulo p, or `None` if `self` is a non-residue
    ///
    /// Since p ≡ 3 (mod 4), the candidate is `self^((p+1)/4)`; it is a root
    /// exactly when its square gives `self` back. Zero maps to zero.
    pub fn sqrt_mod_p(&self) -> Option<Canonical> {
        let root = self.value().pow_mod_p(&SQRT_EXPONENT);
        let check = root.value().square(Modulus::Field).precise_reduce(Modulus::Field);
        if check == *self {
            Some(root)
        } else {
            None
        }
    }

    /// `p - self` for field elements, zero stays zero
    pub fn negate_mod_p(&self) -> Canonical {
        (Modulus::Field.value() - *self.value()).precise_reduce(Modulus::Field)
    }
}

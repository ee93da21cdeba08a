//! Hashing to the P-256 curve: EC-REDP-1 and EC-REDP-2 (IEEE 1363.2)

use crate::error::{validate, Result};
use meshbus_algorithms::ec::p256::{curve_rhs, AffinePoint, BigVal, Modulus};
use meshbus_params::protocol::speke::{SPEKE_Q1_X, SPEKE_Q1_Y, SPEKE_Q2_X, SPEKE_Q2_Y};
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

const F: Modulus = Modulus::Field;

/// Map an arbitrary octet string to a point on the curve
///
/// The input is hashed to a 32-byte digest `d`. Each round hashes `d` again
/// to get a candidate x and accepts it if x³ - 3x + b is a square; the low
/// bit of `d` picks the sign of y. Otherwise `d` is incremented as a
/// big-endian integer and the round repeats.
///
/// The counter is a plain big-endian increment: a zero byte stops the
/// carry like any other. Implementations whose carry loop also runs past
/// zero bytes agree with this one only while no increment crosses such a
/// byte, which holds for the two protocol labels behind Q1 and Q2.
pub fn redp1(input: &[u8]) -> Result<AffinePoint> {
    let mut digest = [0u8; 32];
    digest.copy_from_slice(&Sha256::digest(input));

    let mut round = 0u32;
    loop {
        let negate = digest[31] & 1 == 1;
        let x = BigVal::from_binary(&Sha256::digest(digest)).precise_reduce(F);
        if let Some(root) = curve_rhs(x.value()).sqrt_mod_p() {
            let y = if negate { root.negate_mod_p() } else { root };
            let point = AffinePoint::new_unchecked(x.into(), y.into());
            point.validate()?;
            tracing::trace!(round, "EC-REDP-1 found a point");
            return Ok(point);
        }
        tracing::trace!(round, "EC-REDP-1 candidate is not on the curve");
        validate::derivation(
            increment_be(&mut digest),
            "EC-REDP-1",
            "digest counter overflowed",
        )?;
        round = round.wrapping_add(1);
    }
}

/// `t × Q2 + Q1` where `t` is the digest read as a big-endian integer
///
/// `t` is used unreduced, so digests at or above p still select distinct
/// points. The result may be infinity; callers reject it.
pub fn redp2(digest: &[u8; 32], q1: &AffinePoint, q2: &AffinePoint) -> AffinePoint {
    let t = Zeroizing::new(BigVal::from_binary(digest));
    q2.mul(&t) + *q1
}

/// The fixed points Q1 = EC-REDP-1("ALLJOYN-ECSPEKE-1") and
/// Q2 = EC-REDP-1("ALLJOYN-ECSPEKE-2")
pub fn base_points() -> (AffinePoint, AffinePoint) {
    let q1 = AffinePoint::new_unchecked(
        BigVal::from_binary(&SPEKE_Q1_X),
        BigVal::from_binary(&SPEKE_Q1_Y),
    );
    let q2 = AffinePoint::new_unchecked(
        BigVal::from_binary(&SPEKE_Q2_X),
        BigVal::from_binary(&SPEKE_Q2_Y),
    );
    (q1, q2)
}

/// Add one to a big-endian counter; false on wrap-around
fn increment_be(counter: &mut [u8]) -> bool {
    for byte in counter.iter_mut().rev() {
        let (next, carry) = byte.overflowing_add(1);
        *byte = next;
        if !carry {
            return true;
        }
    }
    false
}

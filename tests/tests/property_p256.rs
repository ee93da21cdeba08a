//! Property-based tests for P-256 arithmetic

use meshbus_algorithms::ec::p256::{self, AffinePoint, BigVal, Modulus, Scalar};
use proptest::prelude::*;

const F: Modulus = Modulus::Field;

fn scalar() -> impl Strategy<Value = Scalar> {
    any::<[u8; 32]>().prop_filter_map("scalar out of range", |bytes| Scalar::new(bytes).ok())
}

fn point() -> impl Strategy<Value = AffinePoint> {
    scalar().prop_map(|k| p256::scalar_mult_base_g(&k))
}

/// `x mod 2^(8n)`, kept to the 288 bits a `BigVal` holds
fn low_bytes(x: &BigVal, n: usize) -> BigVal {
    let mut words = *x.words();
    for (i, word) in words.iter_mut().enumerate() {
        let keep = (8 * n).saturating_sub(32 * i).min(32);
        if keep < 32 {
            *word &= (1u32 << keep).wrapping_sub(1);
        }
    }
    BigVal::from_words(words)
}

fn field_value() -> impl Strategy<Value = BigVal> {
    any::<[u8; 32]>().prop_map(|bytes| BigVal::from_binary(&bytes))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn point_addition_commutes(p in point(), q in point()) {
        prop_assert_eq!(p + q, q + p);
    }

    #[test]
    fn point_plus_negation_is_infinity(p in point()) {
        prop_assert!((p + p.negate()).is_infinity());
        prop_assert_eq!(p + AffinePoint::infinity(), p);
    }

    #[test]
    fn scalar_mult_distributes(a in scalar(), b in scalar()) {
        let sum = a.add_mod_n(&b);
        let lhs = p256::scalar_mult_base_g(&sum);
        let rhs = p256::scalar_mult_base_g(&a) + p256::scalar_mult_base_g(&b);
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn generated_points_validate(p in point()) {
        prop_assert!(p.validate().is_ok());
        let decoded = AffinePoint::from_be_bytes(&p.x_bytes(), &p.y_bytes());
        prop_assert_eq!(decoded.ok(), Some(p));
    }

    #[test]
    fn field_add_then_sub_is_identity(x in field_value(), y in field_value()) {
        prop_assert_eq!(x.add_p(&y).sub_p(&y).precise_reduce(F), x.precise_reduce(F));
    }

    #[test]
    fn field_mul_matches_square(x in field_value()) {
        prop_assert_eq!(x.mul_mod(&x, F).precise_reduce(F), x.square(F).precise_reduce(F));
    }

    #[test]
    fn inverse_multiplies_to_one(x in field_value()) {
        let x = x.precise_reduce(F);
        prop_assume!(!x.is_zero());
        let inverse = x.invert(F).unwrap();
        let product = BigVal::from(x).mul_mod(&BigVal::from(inverse), F).precise_reduce(F);
        prop_assert!(product.is_one());
    }

    #[test]
    fn binary_encoding_preserves_value(bytes in any::<[u8; 32]>()) {
        let mut out = [0u8; 32];
        BigVal::from_binary(&bytes).to_binary(&mut out);
        prop_assert_eq!(out, bytes);
    }

    #[test]
    fn binary_decoding_recovers_low_bytes(words in any::<[u32; 9]>(), n in 32usize..=40) {
        let x = BigVal::from_words(words);
        let mut out = vec![0u8; n];
        x.to_binary(&mut out);
        prop_assert_eq!(BigVal::from_binary(&out), low_bytes(&x, n));

        let fill = if x.is_negative() { 0xff } else { 0x00 };
        prop_assert!(out[..n.saturating_sub(36)].iter().all(|&b| b == fill));
    }
}

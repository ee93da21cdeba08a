//! End-to-end EC-SPEKE over P-256

use meshbus_api::{Guid128, KeyAgreement, Result as ApiResult};
use meshbus_kex::speke::redp;
use meshbus_kex::SpekeP256;
use meshbus_params::protocol::speke::{SPEKE_REDP1_INPUT_Q1, SPEKE_REDP1_INPUT_Q2};
use meshbus_tests::{exchange, seeded_rng};

fn peers(seed: u64) -> (Guid128, Guid128) {
    let mut rng = seeded_rng(seed);
    (Guid128::random(&mut rng), Guid128::random(&mut rng))
}

#[test]
fn test_same_password_agrees() -> ApiResult<()> {
    let (client, service) = peers(10);
    let alice = SpekeP256::new(b"open sesame", &client, &service)?;
    let bob = SpekeP256::new(b"open sesame", &client, &service)?;

    let mut rng = seeded_rng(11);
    for _ in 0..5 {
        let (ab, ba) = exchange(&alice, &bob, &mut rng)?;
        assert!(!ab.is_infinity());
        assert_eq!(*ab.to_array(), *ba.to_array());
    }
    Ok(())
}

#[test]
fn test_different_passwords_disagree() -> ApiResult<()> {
    let (client, service) = peers(12);
    let alice = SpekeP256::new(b"open sesame", &client, &service)?;
    let eve = SpekeP256::new(b"open sesamE", &client, &service)?;
    assert_ne!(alice.base_point(), eve.base_point());

    let (ab, ba) = exchange(&alice, &eve, &mut seeded_rng(13))?;
    assert_ne!(*ab.to_array(), *ba.to_array());
    Ok(())
}

#[test]
fn test_generators_differ_across_passwords() -> ApiResult<()> {
    let (client, service) = peers(14);
    let mut seen = Vec::new();
    for i in 0..16u32 {
        let password = format!("password-{}", i);
        let speke = SpekeP256::new(password.as_bytes(), &client, &service)?;
        let base = *speke.base_point();
        assert!(base.is_on_curve());
        assert!(!seen.contains(&base));
        seen.push(base);
    }
    Ok(())
}

#[test]
fn test_speke_keys_are_not_over_generator() -> ApiResult<()> {
    let (client, service) = peers(15);
    let speke = SpekeP256::new(b"123456", &client, &service)?;
    let mut rng = seeded_rng(16);
    let keypair = speke.keypair(&mut rng)?;
    let over_g = meshbus_kex::EcdhKeyPair::from_private_key(keypair.private_key())?;
    assert_ne!(over_g.public_key(), keypair.public_key());
    Ok(())
}

#[test]
fn test_precomputed_points_regenerate() {
    let (q1, q2) = redp::base_points();
    assert_eq!(redp::redp1(SPEKE_REDP1_INPUT_Q1).ok(), Some(q1));
    assert_eq!(redp::redp1(SPEKE_REDP1_INPUT_Q2).ok(), Some(q2));
}

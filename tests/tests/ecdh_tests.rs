//! End-to-end ECDH over P-256

use meshbus_api::{Error, KeyAgreement, Result as ApiResult, Serialize, SerializeSecret};
use meshbus_kex::{EccPrivateKey, EccPublicKey, EcdhKeyPair, EcdhP256};
use meshbus_tests::vectors::{P256_BASE_MULT, P256_FIELD_PRIME};
use meshbus_tests::{exchange, hex32, seeded_rng};
use rand::rngs::OsRng;

#[test]
fn test_exchange_agrees() -> ApiResult<()> {
    let mut rng = seeded_rng(1);
    for _ in 0..10 {
        let (ab, ba) = exchange(&EcdhP256, &EcdhP256, &mut rng)?;
        assert!(!ab.is_infinity());
        assert_eq!(*ab.to_array(), *ba.to_array());
        assert_eq!(*ab.x_coordinate(), *ba.x_coordinate());
    }
    Ok(())
}

#[test]
fn test_exchange_with_os_rng() -> ApiResult<()> {
    let (ab, ba) = exchange(&EcdhP256, &EcdhP256, &mut OsRng)?;
    assert_eq!(*ab.to_bytes_zeroizing(), *ba.to_bytes_zeroizing());
    Ok(())
}

#[test]
fn test_public_keys_from_known_scalars() -> ApiResult<()> {
    for (k, x, y) in P256_BASE_MULT {
        let private_key = EccPrivateKey::from_bytes(&hex32(k).unwrap())?;
        let keypair = EcdhKeyPair::from_private_key(&private_key)?;
        assert_eq!(keypair.public_key().x(), &hex32(x).unwrap(), "x for k = {}", k);
        assert_eq!(keypair.public_key().y(), &hex32(y).unwrap(), "y for k = {}", k);
    }
    Ok(())
}

#[test]
fn test_distinct_keypairs_give_distinct_secrets() -> ApiResult<()> {
    let mut rng = seeded_rng(2);
    let alice = EcdhP256.keypair(&mut rng)?;
    let mut secrets = Vec::new();
    for _ in 0..8 {
        let peer = EcdhP256.keypair(&mut rng)?;
        let shared = EcdhP256.derive_shared_secret(alice.private_key(), peer.public_key())?;
        secrets.push(shared.to_array().to_vec());
    }
    for i in 0..secrets.len() {
        for j in i + 1..secrets.len() {
            assert_ne!(secrets[i], secrets[j], "secrets {} and {} collide", i, j);
        }
    }
    Ok(())
}

#[test]
fn test_coordinate_equal_to_prime_is_rejected() {
    let p = hex32(P256_FIELD_PRIME).unwrap();
    let (_, gx, gy) = P256_BASE_MULT[0];
    let gy = hex32(gy).unwrap();

    let err = EccPublicKey::new(p, gy).unwrap_err();
    assert!(matches!(err, Error::InvalidKey { .. }));

    let mut wire = Vec::from(hex32(gx).unwrap());
    wire.extend_from_slice(&p);
    assert!(EccPublicKey::from_bytes(&wire).is_err());
}

#[test]
fn test_off_curve_peer_is_rejected_before_use() -> ApiResult<()> {
    let mut rng = seeded_rng(3);
    let alice = EcdhP256.keypair(&mut rng)?;
    let mut wire = alice.public_key().to_bytes();
    wire[63] ^= 0x01;
    assert!(matches!(
        EccPublicKey::from_bytes(&wire),
        Err(Error::InvalidKey { .. })
    ));
    Ok(())
}

#[test]
fn test_wire_format_is_raw_coordinates() -> ApiResult<()> {
    let mut rng = seeded_rng(4);
    let keypair = EcdhP256.keypair(&mut rng)?;
    let wire = keypair.public_key().to_bytes();
    assert_eq!(wire.len(), 64);
    assert_eq!(&wire[..32], keypair.public_key().x());
    assert_eq!(&wire[32..], keypair.public_key().y());

    let restored = EccPrivateKey::from_bytes(&keypair.private_key().to_bytes_zeroizing())?;
    assert_eq!(&restored, keypair.private_key());
    Ok(())
}

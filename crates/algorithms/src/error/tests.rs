use super::*;
use meshbus_api::Error as CoreError;

#[test]
fn test_error_conversion() {
    let core_err = CoreError::from(Error::param("password", "must not be empty"));
    match core_err {
        CoreError::InvalidParameter { context, .. } => assert_eq!(context, "password"),
        _ => panic!("Expected InvalidParameter error"),
    }

    let core_err = CoreError::from(Error::Length {
        context: "P-256 Scalar",
        expected: 32,
        actual: 16,
    });
    assert_eq!(
        core_err,
        CoreError::InvalidLength {
            context: "P-256 Scalar",
            expected: 32,
            actual: 16,
        }
    );

    let core_err = CoreError::from(Error::InvalidPoint {
        context: "AffinePoint::validate",
        reason: "point not on curve",
    });
    assert!(matches!(core_err, CoreError::InvalidKey { .. }));

    let core_err = CoreError::from(Error::RandomGeneration {
        context: "generate_keypair",
    });
    assert!(matches!(core_err, CoreError::RandomGenerationError { .. }));
}

#[test]
fn test_validation_functions() {
    assert!(validate::parameter(true, "test", "should pass").is_ok());
    match validate::parameter(false, "test", "should fail").unwrap_err() {
        Error::Parameter { name, reason } => {
            assert_eq!(name, "test");
            assert_eq!(reason, "should fail");
        }
        _ => panic!("Expected Parameter error"),
    }

    assert!(validate::length("buffer", 32, 32).is_ok());
    match validate::length("buffer", 16, 32).unwrap_err() {
        Error::Length {
            context,
            expected,
            actual,
        } => {
            assert_eq!(context, "buffer");
            assert_eq!(expected, 32);
            assert_eq!(actual, 16);
        }
        _ => panic!("Expected Length error"),
    }

    assert!(validate::point(false, "peer", "off curve").is_err());
}

//! Validation utilities for key agreement operations

use super::{Error, Result};

/// Validate a key property
pub fn key(condition: bool, key_type: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidKey { key_type, reason });
    }
    Ok(())
}

/// Validate a caller-supplied argument
pub fn parameter(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidParameter { context, reason });
    }
    Ok(())
}

/// Validate an intermediate result of hash-to-curve derivation
pub fn derivation(condition: bool, context: &'static str, details: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::Derivation { context, details });
    }
    Ok(())
}

//! Cryptographically secure random generation for salts and IVs

use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::{PassblobError, Result};

/// Generate 32 bytes (256 bits) from the operating system's secure random
/// source.
///
/// Fresh output is drawn on every call; nothing is cached or reused. If the
/// system entropy source is unavailable the call fails instead of blocking
/// indefinitely or falling back to a weaker generator.
pub fn generate_32() -> Result<[u8; 32]> {
    let mut bytes = [0u8; 32];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| PassblobError::CryptoFailure(format!("system randomness unavailable: {e}")))?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successive_calls_differ() {
        let a = generate_32().unwrap();
        let b = generate_32().unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_output_is_not_all_zero() {
        let bytes = generate_32().unwrap();
        assert!(bytes.iter().any(|&b| b != 0));
    }
}

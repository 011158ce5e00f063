//! PBKDF2 passphrase-based key derivation
//!
//! Keys are stretched with PBKDF2-HMAC-SHA1 at a fixed 1000 rounds. Both the
//! hash and the round count are part of the blob format's compatibility
//! contract: blobs written by other implementations of the format were keyed
//! this way, so changing either would orphan existing data. 1000 rounds is
//! far below current hardening recommendations and must not be read as one.

use pbkdf2::pbkdf2_hmac;
use sha1::Sha1;

use super::secure_bytes::SecureBytes;

/// Salt length in bytes (256 bits)
pub const SALT_LEN: usize = 32;

/// Derived key length in bytes (256 bits)
pub const KEY_LEN: usize = 32;

/// PBKDF2 round count, fixed by the blob format
pub const KDF_ITERATIONS: u32 = 1000;

/// Derive a 32-byte encryption key from a passphrase and salt.
///
/// # Arguments
/// * `passphrase` - UTF-8 bytes of the caller's passphrase; an empty
///   passphrase is permitted and simply derives a weak key
/// * `salt` - 32-byte salt, stored alongside the ciphertext
///
/// # Returns
/// The key material in a buffer that zeroes itself on drop. Identical inputs
/// always derive the identical key; the key must live no longer than the
/// cipher operation it was derived for.
pub fn derive_key(passphrase: &[u8], salt: &[u8; SALT_LEN]) -> SecureBytes {
    let mut key = vec![0u8; KEY_LEN];
    derive_raw(passphrase, salt, KDF_ITERATIONS, &mut key);
    SecureBytes::new(key)
}

/// PBKDF2-HMAC-SHA1 with caller-chosen parameters.
///
/// Exists so known-answer tests can exercise the exact derivation path with
/// the salt and output lengths the published vectors use.
pub(crate) fn derive_raw(passphrase: &[u8], salt: &[u8], rounds: u32, out: &mut [u8]) {
    pbkdf2_hmac::<Sha1>(passphrase, salt, rounds, out);
}

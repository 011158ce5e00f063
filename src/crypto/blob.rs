//! The blob codec: framing, key derivation, and base64 transport encoding
//!
//! Wire format: `base64( salt[32] || iv[32] || ciphertext )` with the
//! standard padded base64 alphabet and no newlines. The salt and IV are not
//! secret; carrying them in the blob makes it self-contained, so decryption
//! needs only the blob and the passphrase.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use super::pbkdf::{self, SALT_LEN};
use super::{cbc, random, HEADER_LEN, IV_LEN};
use crate::error::{PassblobError, Result};

/// Encrypt a byte payload under a passphrase.
///
/// A fresh salt and IV are drawn from the system's secure random source on
/// every call, so encrypting the same payload twice yields two different
/// blobs that decrypt to the same payload. The derived key exists only for
/// the duration of this call and is zeroed before returning.
///
/// # Errors
/// `CryptoFailure` if the system randomness source is unavailable.
pub fn encrypt_bytes(plaintext: &[u8], passphrase: &str) -> Result<String> {
    let salt = random::generate_32()?;
    let iv = random::generate_32()?;

    let key = pbkdf::derive_key(passphrase.as_bytes(), &salt);
    let ciphertext = cbc::encrypt(&key, &iv, plaintext)?;
    drop(key);

    let mut frame = Vec::with_capacity(HEADER_LEN + ciphertext.len());
    frame.extend_from_slice(&salt);
    frame.extend_from_slice(&iv);
    frame.extend_from_slice(&ciphertext);

    Ok(STANDARD.encode(frame))
}

/// Decrypt a blob produced by [`encrypt_bytes`] (or any other implementation
/// of the same format) back into the original bytes.
///
/// # Errors
/// - `MalformedInput` if the blob is not valid base64, decodes to fewer than
///   the 64 header bytes, or carries an empty or misaligned ciphertext
/// - `PaddingOrKeyError` for a wrong passphrase or corrupted ciphertext; a
///   corrupted blob may also decrypt "successfully" to garbage, since
///   nothing in the format authenticates the ciphertext
pub fn decrypt_bytes(blob: &str, passphrase: &str) -> Result<Vec<u8>> {
    let data = STANDARD
        .decode(blob)
        .map_err(|e| PassblobError::MalformedInput(format!("invalid base64: {e}")))?;

    if data.len() < HEADER_LEN {
        return Err(PassblobError::MalformedInput(format!(
            "decoded blob is {} bytes, shorter than the {}-byte salt+iv header",
            data.len(),
            HEADER_LEN
        )));
    }

    let mut salt = [0u8; SALT_LEN];
    salt.copy_from_slice(&data[..SALT_LEN]);
    let mut iv = [0u8; IV_LEN];
    iv.copy_from_slice(&data[SALT_LEN..HEADER_LEN]);
    let ciphertext = &data[HEADER_LEN..];

    let key = pbkdf::derive_key(passphrase.as_bytes(), &salt);
    cbc::decrypt(&key, &iv, ciphertext)
}

/// Encrypt a text payload under a passphrase. See [`encrypt_bytes`].
pub fn encrypt(plaintext: &str, passphrase: &str) -> Result<String> {
    encrypt_bytes(plaintext.as_bytes(), passphrase)
}

/// Decrypt a blob back into text. See [`decrypt_bytes`].
///
/// Recovered bytes are interpreted as UTF-8 with invalid sequences replaced,
/// never rejected; callers that need the exact bytes (or encrypted a binary
/// payload) should use [`decrypt_bytes`].
pub fn decrypt(blob: &str, passphrase: &str) -> Result<String> {
    let plaintext = decrypt_bytes(blob, passphrase)?;
    Ok(String::from_utf8_lossy(&plaintext).into_owned())
}

//! CBC chaining and PKCS#7 padding over the Rijndael-256 primitive
//!
//! Confidentiality only: nothing here authenticates the ciphertext. A
//! tampered block either fails unpadding or decrypts to garbage, and the two
//! outcomes cannot be told apart from a wrong passphrase.

use zeroize::Zeroize;

use super::rijndael::{Rijndael256, BLOCK_LEN, KEY_LEN};
use crate::error::{PassblobError, Result};

/// Encrypt plaintext in CBC mode with PKCS#7 padding.
///
/// # Arguments
/// * `key` - 32-byte encryption key
/// * `iv` - 32-byte initialization vector, fresh per encryption
/// * `plaintext` - data to encrypt; empty input is valid and pads to one
///   full block
///
/// # Returns
/// Ciphertext whose length is a positive multiple of the 32-byte block.
pub fn encrypt(key: &[u8], iv: &[u8; BLOCK_LEN], plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = keyed_cipher(key)?;

    let mut buf = pad(plaintext);
    let mut prev = *iv;
    let mut block = [0u8; BLOCK_LEN];
    for i in (0..buf.len()).step_by(BLOCK_LEN) {
        block.copy_from_slice(&buf[i..i + BLOCK_LEN]);
        xor_in_place(&mut block, &prev);
        cipher.encrypt_block(&mut block);
        buf[i..i + BLOCK_LEN].copy_from_slice(&block);
        prev = block;
    }
    Ok(buf)
}

/// Decrypt CBC ciphertext and strip PKCS#7 padding.
///
/// # Errors
/// - `MalformedInput` if the ciphertext is empty or not block-aligned (the
///   frame is structurally invalid before any key material is consulted)
/// - `PaddingOrKeyError` if unpadding fails: wrong passphrase-derived key or
///   corrupted ciphertext
pub fn decrypt(key: &[u8], iv: &[u8; BLOCK_LEN], ciphertext: &[u8]) -> Result<Vec<u8>> {
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_LEN != 0 {
        return Err(PassblobError::MalformedInput(format!(
            "ciphertext length {} is not a positive multiple of the {}-byte block",
            ciphertext.len(),
            BLOCK_LEN
        )));
    }
    let cipher = keyed_cipher(key)?;

    let mut buf = ciphertext.to_vec();
    let mut prev = *iv;
    let mut block = [0u8; BLOCK_LEN];
    for i in (0..buf.len()).step_by(BLOCK_LEN) {
        block.copy_from_slice(&buf[i..i + BLOCK_LEN]);
        let chained = block;
        cipher.decrypt_block(&mut block);
        xor_in_place(&mut block, &prev);
        buf[i..i + BLOCK_LEN].copy_from_slice(&block);
        prev = chained;
    }
    block.zeroize();
    unpad(buf)
}

fn keyed_cipher(key: &[u8]) -> Result<Rijndael256> {
    if key.len() != KEY_LEN {
        return Err(PassblobError::CryptoFailure(format!(
            "invalid key length: expected {}, got {}",
            KEY_LEN,
            key.len()
        )));
    }
    let mut key_bytes = [0u8; KEY_LEN];
    key_bytes.copy_from_slice(key);
    let cipher = Rijndael256::new(&key_bytes);
    key_bytes.zeroize();
    Ok(cipher)
}

fn xor_in_place(block: &mut [u8; BLOCK_LEN], other: &[u8; BLOCK_LEN]) {
    for (b, o) in block.iter_mut().zip(other) {
        *b ^= o;
    }
}

/// PKCS#7: extend to the next block boundary; a full extra block when the
/// input is already aligned. The pad byte is always in 1..=32.
fn pad(plaintext: &[u8]) -> Vec<u8> {
    let pad_len = BLOCK_LEN - plaintext.len() % BLOCK_LEN;
    let mut buf = Vec::with_capacity(plaintext.len() + pad_len);
    buf.extend_from_slice(plaintext);
    buf.resize(plaintext.len() + pad_len, pad_len as u8);
    buf
}

/// Strict PKCS#7 removal: the pad byte must be in 1..=32 and every pad byte
/// must match it. The buffer is zeroed before reporting failure so recovered
/// garbage never outlives the call.
fn unpad(mut buf: Vec<u8>) -> Result<Vec<u8>> {
    let pad_len = match buf.last() {
        Some(&b) => b as usize,
        None => return Err(PassblobError::PaddingOrKeyError),
    };
    if pad_len == 0 || pad_len > BLOCK_LEN || pad_len > buf.len() {
        buf.zeroize();
        return Err(PassblobError::PaddingOrKeyError);
    }
    let split = buf.len() - pad_len;
    if buf[split..].iter().any(|&b| b as usize != pad_len) {
        buf.zeroize();
        return Err(PassblobError::PaddingOrKeyError);
    }
    buf.truncate(split);
    Ok(buf)
}

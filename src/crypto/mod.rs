//! Cryptographic primitives for passblob
//!
//! This module provides:
//! - PBKDF2-HMAC-SHA1 for passphrase-based key derivation
//! - Rijndael with a 256-bit block in CBC mode with PKCS#7 padding
//! - MD5 fingerprints for opaque identifiers
//! - Secure memory handling with automatic zeroing

mod blob;
mod cbc;
mod fingerprint;
mod pbkdf;
mod random;
mod rijndael;
mod secure_bytes;

pub use blob::{decrypt, decrypt_bytes, encrypt, encrypt_bytes};
pub use fingerprint::md5_hex;
pub use pbkdf::{derive_key, KDF_ITERATIONS, SALT_LEN};
pub use rijndael::BLOCK_LEN;
pub use secure_bytes::SecureBytes;

/// IV length, equal to the cipher block size (256 bits)
pub const IV_LEN: usize = BLOCK_LEN;

/// Blob structure (before base64 encoding):
/// [32 bytes: salt][32 bytes: iv][N bytes: ciphertext, N a positive multiple of 32]
///
/// There is no version or length prefix; the salt and IV lengths are fixed
/// by the format.
pub const HEADER_LEN: usize = SALT_LEN + IV_LEN;

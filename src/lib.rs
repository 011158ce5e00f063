//! passblob - passphrase-based encryption into self-contained portable blobs
//!
//! This crate provides:
//! - Symmetric encryption of arbitrary payloads under a human-supplied
//!   passphrase, producing a single base64 string that carries its own salt
//!   and IV (nothing to store or transmit besides the blob itself)
//! - An unkeyed 128-bit fingerprint for opaque identifiers
//! - Secure memory handling with automatic zeroing of key material
//!
//! The blob format is `base64( salt[32] || iv[32] || ciphertext )` with
//! PBKDF2-HMAC-SHA1 key stretching and Rijndael (256-bit block) CBC
//! encryption. Field order and lengths are fixed; blobs produced by other
//! implementations of the same format decrypt here and vice versa.
//!
//! # Security
//!
//! This is a confidentiality-only format: there is no MAC or AEAD tag, so a
//! bit-flipped blob may decrypt to garbage instead of failing, and the format
//! is open to padding-oracle-style attacks if decryption errors are exposed
//! to an attacker. New systems that do not need to read existing blobs should
//! use an authenticated scheme instead. The 1000-round key stretching is a
//! compatibility constant, far below current recommendations.

pub mod crypto;
pub mod error;

pub use crypto::{decrypt, decrypt_bytes, derive_key, encrypt, encrypt_bytes, md5_hex};
pub use error::{PassblobError, Result};

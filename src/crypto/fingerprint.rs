//! Unkeyed MD5 fingerprints
//!
//! A legacy fingerprinting primitive for opaque identifiers. MD5 is
//! collision-weak: fingerprints must not be used for password storage or
//! integrity checks. This module takes no key material and is deliberately
//! independent of the key-derivation and encryption paths.

use md5::{Digest, Md5};

/// Fingerprint `input` as exactly 32 lowercase hex characters.
///
/// Deterministic over the UTF-8 bytes of the input; the empty string is
/// valid; never fails.
pub fn md5_hex(input: &str) -> String {
    let digest = Md5::digest(input.as_bytes());
    let encoded = hex::encode(digest);
    // a 16-byte digest always encodes to 32 chars; the pad pins the width
    format!("{encoded:0>32}")
}

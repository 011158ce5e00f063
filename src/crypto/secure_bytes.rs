//! Secure byte container with automatic zeroing on drop
//!
//! Holds derived key material for the lifetime of a single cipher operation:
//! zeroed when dropped, locked against swapping where possible, and never
//! printable through `Debug`.

use std::ops::Deref;

use zeroize::Zeroize;

/// A secure container for sensitive bytes that automatically zeroes on drop
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct SecureBytes(Vec<u8>);

impl SecureBytes {
    /// Take ownership of `data`; its memory is managed securely from here on.
    pub fn new(data: Vec<u8>) -> Self {
        let secure = Self(data);
        secure.lock_memory();
        secure
    }

    /// Best-effort mlock so key material is not swapped to disk. May fail
    /// without privileges; the contents are still zeroed on drop either way.
    #[cfg(unix)]
    fn lock_memory(&self) {
        unsafe {
            libc::mlock(self.0.as_ptr() as *const libc::c_void, self.0.len());
        }
    }

    #[cfg(not(unix))]
    fn lock_memory(&self) {}

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Deref for SecureBytes {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<u8>> for SecureBytes {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

// Prevent accidental debug printing of key material
impl std::fmt::Debug for SecureBytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecureBytes")
            .field("len", &self.0.len())
            .field("data", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deref_exposes_bytes() {
        let secure = SecureBytes::new(vec![1, 2, 3, 4]);
        assert_eq!(secure.len(), 4);
        assert!(!secure.is_empty());
        assert_eq!(&*secure, &[1, 2, 3, 4]);
    }

    #[test]
    fn test_debug_redacts_contents() {
        let secure = SecureBytes::new(vec![0xDE, 0xAD]);
        let printed = format!("{secure:?}");
        assert!(printed.contains("REDACTED"));
        assert!(!printed.contains("222"));
        assert!(!printed.contains("de"));
    }
}

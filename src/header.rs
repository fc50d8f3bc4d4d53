//! # Stream Header
//!
//! The first 48 bytes of every sealed stream carry the session parameters in
//! the clear: the cipher IV and the two KDF salts.
//!
//! ```text
//! header := iv(16) || cipher_salt(16) || mac_salt(16)
//! ```
//!
//! The header appears exactly once and is immutable once written. It is fed
//! into the MAC accumulator before any ciphertext, so tampering with it is
//! caught at trailer verification. The PBKDF2 iteration count is deliberately
//! not part of the header; both sides supply it out-of-band.

use crate::aliases::{Iv16, Salt16};
use crate::consts::{HEADER_LEN, IV_LEN, SALT_LEN};
use crate::crypto::rng::fill_random;
use crate::error::SealstreamError;

/// Per-session stream parameters, transmitted in-band as the stream prefix.
#[derive(Debug, Clone)]
pub struct StreamHeader {
    /// Initial counter block for AES-CTR.
    pub iv: Iv16,
    /// Salt for deriving the cipher key.
    pub cipher_salt: Salt16,
    /// Salt for deriving the MAC key. Distinct from `cipher_salt` so the two
    /// derived keys are independent.
    pub mac_salt: Salt16,
}

impl StreamHeader {
    /// Generate a fresh header from the OS RNG. Called once per encryption
    /// session; never reused.
    pub fn generate() -> Result<Self, SealstreamError> {
        let mut header = Self {
            iv: [0u8; IV_LEN],
            cipher_salt: [0u8; SALT_LEN],
            mac_salt: [0u8; SALT_LEN],
        };
        fill_random(&mut header.iv)?;
        fill_random(&mut header.cipher_salt)?;
        fill_random(&mut header.mac_salt)?;
        Ok(header)
    }

    /// Serialize to the 48-byte wire form.
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut bytes = [0u8; HEADER_LEN];
        bytes[..IV_LEN].copy_from_slice(&self.iv);
        bytes[IV_LEN..IV_LEN + SALT_LEN].copy_from_slice(&self.cipher_salt);
        bytes[IV_LEN + SALT_LEN..].copy_from_slice(&self.mac_salt);
        bytes
    }

    /// Split the 48-byte wire form back into IV and salts.
    ///
    /// Infallible: any 48 bytes parse. Whether they are the *right* 48 bytes
    /// is only decided by trailer verification.
    pub fn parse(bytes: &[u8; HEADER_LEN]) -> Self {
        let mut header = Self {
            iv: [0u8; IV_LEN],
            cipher_salt: [0u8; SALT_LEN],
            mac_salt: [0u8; SALT_LEN],
        };
        header.iv.copy_from_slice(&bytes[..IV_LEN]);
        header
            .cipher_salt
            .copy_from_slice(&bytes[IV_LEN..IV_LEN + SALT_LEN]);
        header.mac_salt.copy_from_slice(&bytes[IV_LEN + SALT_LEN..]);
        header
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_form_roundtrip() {
        let header = StreamHeader {
            iv: [0x11; 16],
            cipher_salt: [0x22; 16],
            mac_salt: [0x33; 16],
        };

        let bytes = header.to_bytes();
        assert_eq!(&bytes[..16], &[0x11; 16]);
        assert_eq!(&bytes[16..32], &[0x22; 16]);
        assert_eq!(&bytes[32..], &[0x33; 16]);

        let parsed = StreamHeader::parse(&bytes);
        assert_eq!(parsed.iv, header.iv);
        assert_eq!(parsed.cipher_salt, header.cipher_salt);
        assert_eq!(parsed.mac_salt, header.mac_salt);
    }

    #[test]
    fn generate_is_fresh() {
        let a = StreamHeader::generate().unwrap();
        let b = StreamHeader::generate().unwrap();

        // 16 random bytes colliding twice across three fields is
        // astronomically unlikely
        assert_ne!(a.to_bytes(), b.to_bytes());
        assert_ne!(a.cipher_salt, a.mac_salt);
    }
}

//! src/crypto/kdf.rs

use crate::aliases::{Passphrase, Salt16, StreamKey16};
use crate::SealstreamError;

use hmac::Hmac;
use pbkdf2::pbkdf2;
use secrecy::ExposeSecret;
use sha2::Sha256;

/// Derive a 16-byte stream key with PBKDF2-HMAC-SHA256, directly into the
/// caller's zeroizing buffer.
///
/// Deterministic: the same (passphrase, salt, iterations) always yields the
/// same key. Each session calls this twice with independent salts (once for
/// the cipher key, once for the MAC key) so the two keys never coincide.
#[inline(always)]
pub fn derive_stream_key(
    passphrase: &Passphrase,
    salt: &Salt16,
    iterations: u32,
    out_key: &mut StreamKey16,
) -> Result<(), SealstreamError> {
    if iterations == 0 {
        return Err(SealstreamError::KeyDerivation(
            "PBKDF2 iterations must be >= 1".into(),
        ));
    }

    pbkdf2::<Hmac<Sha256>>(
        passphrase.expose_secret().as_bytes(),
        salt,
        iterations,
        &mut out_key[..],
    )
    .map_err(|e| SealstreamError::KeyDerivation(format!("PBKDF2 failed: {e}")))?;

    Ok(())
}

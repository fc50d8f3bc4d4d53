// src/crypto/rng.rs
//! Secure randomness for per-session IVs and salts.

use crate::SealstreamError;
use rand::{rngs::OsRng, TryRngCore};

/// Fill `buf` from the operating system CSPRNG.
///
/// Session setup aborts if the OS RNG is unavailable; encrypting with a
/// predictable IV or salt is never acceptable.
#[inline(always)]
pub fn fill_random(buf: &mut [u8]) -> Result<(), SealstreamError> {
    OsRng
        .try_fill_bytes(buf)
        .map_err(|e| SealstreamError::EncryptionSetup(format!("system RNG unavailable: {e}")))
}

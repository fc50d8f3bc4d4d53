//! # Scheme Selection
//!
//! Closed set of stream transforms a session can run under: pass bytes
//! through untouched, or seal them with the authenticated-encryption core.
//! A scheme is selected once per session and never swapped mid-stream.
//!
//! `Plain` exists so callers measuring or wiring up pipelines can keep one
//! code path and zero out the crypto cost.

use crate::aliases::Passphrase;
use crate::decryptor::decrypt;
use crate::encryptor::encrypt;
use crate::error::SealstreamError;
use std::io::{Read, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// Identity transform: bytes pass through unchanged.
    Plain,
    /// AES-128-CTR + HMAC-SHA256 sealed stream.
    Aes,
}

impl Scheme {
    /// Every available scheme, for callers that sweep all of them.
    pub const fn all() -> [Scheme; 2] {
        [Scheme::Plain, Scheme::Aes]
    }

    /// Filename extension conventionally appended to output produced under
    /// this scheme. Empty for the identity transform.
    pub const fn extension(&self) -> &'static str {
        match self {
            Scheme::Plain => "",
            Scheme::Aes => "aes",
        }
    }

    /// Transform `source` into sealed (or passthrough) form on `destination`.
    pub fn seal<R, W>(
        &self,
        mut source: R,
        mut destination: W,
        passphrase: &Passphrase,
        kdf_iterations: u32,
    ) -> Result<(), SealstreamError>
    where
        R: Read,
        W: Write,
    {
        match self {
            Scheme::Plain => {
                std::io::copy(&mut source, &mut destination)?;
                Ok(())
            }
            Scheme::Aes => encrypt(source, destination, passphrase, kdf_iterations),
        }
    }

    /// Recover plaintext from `source` onto `destination`, verifying
    /// authenticity for schemes that provide it.
    pub fn open<R, W>(
        &self,
        mut source: R,
        mut destination: W,
        passphrase: &Passphrase,
        kdf_iterations: u32,
    ) -> Result<(), SealstreamError>
    where
        R: Read,
        W: Write,
    {
        match self {
            Scheme::Plain => {
                std::io::copy(&mut source, &mut destination)?;
                Ok(())
            }
            Scheme::Aes => decrypt(source, destination, passphrase, kdf_iterations),
        }
    }
}

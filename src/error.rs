//! # Error Types
//!
//! This module defines the error types used throughout the library.
//! All operations return [`Result<T, SealstreamError>`](SealstreamError).
//!
//! Every variant is terminal for its session: none of these conditions can
//! succeed on retry with identical inputs, so nothing is retried internally.

use thiserror::Error;

/// The error type for all sealstream operations.
#[derive(Error, Debug)]
pub enum SealstreamError {
    /// I/O error occurred while reading the source or writing the sink.
    ///
    /// This variant wraps [`std::io::Error`] and is only produced by the
    /// `encrypt`/`decrypt` facades; the push-driven state machines perform
    /// no I/O of their own.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Key derivation failed.
    ///
    /// Produced when the KDF is misconfigured, e.g. a zero iteration count.
    /// Derivation is pure and deterministic, so this never depends on input
    /// data, only on parameters.
    #[error("Key derivation error: {0}")]
    KeyDerivation(String),

    /// Encryption session could not be set up.
    ///
    /// Covers backend misconfiguration (bad key/IV length for the cipher)
    /// and system RNG failure. Surfaced before any output is produced.
    #[error("Encryption setup error: {0}")]
    EncryptionSetup(String),

    /// Decryption session could not be set up.
    ///
    /// Covers backend misconfiguration and out-of-range parameters on the
    /// decrypting side.
    #[error("Decryption setup error: {0}")]
    DecryptionSetup(String),

    /// The ciphertext stream ended too early.
    ///
    /// Either fewer than 48 bytes ever arrived (no complete header), or the
    /// stream ended with a header but less than a full 32-byte trailer.
    /// The ciphertext is unusable.
    #[error("Truncated stream: {0}")]
    TruncatedStream(&'static str),

    /// The recomputed MAC does not match the stream trailer.
    ///
    /// The stream was tampered with, corrupted, or produced under a
    /// different passphrase or iteration count. Any plaintext already
    /// released by the session is unauthenticated and must be discarded.
    #[error("Authentication failed: MAC trailer mismatch")]
    Authentication,
}

// src/decryptor/mod.rs

//! High-level decryption facade.
//!
//! Core API: `decrypt(src, dst, &passphrase, iterations)?` for full streams.
//! Incremental: `StreamDecryptor` for callers that feed chunks themselves.

pub(crate) mod decrypt;
pub(crate) mod stream;

pub use decrypt::decrypt;
pub use stream::StreamDecryptor;

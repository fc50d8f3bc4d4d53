// src/encryptor/mod.rs

//! High-level encryption facade.
//!
//! Core API: `encrypt(src, dst, &passphrase, iterations)?` for full streams.
//! Incremental: `StreamEncryptor` for callers that feed chunks themselves.

pub(crate) mod encrypt;
pub(crate) mod stream;

pub use encrypt::encrypt;
pub use stream::StreamEncryptor;

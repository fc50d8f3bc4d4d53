// src/lib.rs

pub mod aliases;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod consts;
pub mod crypto;
pub mod decryptor;
pub mod encryptor;
pub mod error;
pub mod header;
pub mod scheme;

// High-level API, what 99% of users import
pub use decryptor::{decrypt, StreamDecryptor};
pub use encryptor::{encrypt, StreamEncryptor};
pub use error::SealstreamError;

// Low-level KDF, public at the root because custom flows (pre-deriving keys,
// decrypting streams produced elsewhere) need it directly
pub use crypto::kdf::derive_stream_key;

pub use header::StreamHeader;
pub use scheme::Scheme;

#[cfg(feature = "batch-ops")]
pub use batch_ops::{decrypt_batch, encrypt_batch};

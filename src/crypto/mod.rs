// src/crypto/mod.rs

//! Low-level crypto primitives (KDF, randomness).
//!
//! Sub-modules for primitives; see crate root for re-exports
//! (e.g. `derive_stream_key`). HMAC and cipher types are defined in
//! `aliases.rs`.

pub mod kdf;
pub mod rng;

//! # Type Aliases
//!
//! Shared primitive aliases used across the library.
//!
//! ## Secret material
//! - [`Passphrase`] - secret passphrase wrapper; access requires an explicit
//!   `.expose_secret()`, and the backing string is zeroized on drop
//! - [`StreamKey16`] - 16-byte derived key buffer, zeroized on drop
//!
//! ## Public wire values
//! IVs, salts and trailers travel in the clear inside the stream, so they are
//! plain fixed-size arrays:
//! - [`Iv16`] - 16-byte cipher IV (initial CTR counter block)
//! - [`Salt16`] - 16-byte KDF salt
//! - [`Trailer32`] - 32-byte HMAC trailer
//!
//! ## Primitives
//! - [`Aes128Ctr`] - AES-128 in counter mode, big-endian 128-bit counter
//! - [`HmacSha256`] - HMAC-SHA256, used for both the stream MAC and PBKDF2

use hmac::Hmac;
use secrecy::SecretString;
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::consts::{IV_LEN, KEY_LEN, SALT_LEN, TRAILER_LEN};

pub type HmacSha256 = Hmac<Sha256>;

pub type Aes128Ctr = ctr::Ctr128BE<aes::Aes128>;

/// Secret passphrase. Construct with `Passphrase::from(String)`.
pub type Passphrase = SecretString;

/// Derived symmetric key material, auto-zeroized on drop.
pub type StreamKey16 = Zeroizing<[u8; KEY_LEN]>;

pub type Iv16 = [u8; IV_LEN];
pub type Salt16 = [u8; SALT_LEN];
pub type Trailer32 = [u8; TRAILER_LEN];

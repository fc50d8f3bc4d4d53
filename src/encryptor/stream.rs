//! src/encryptor/stream.rs
//! Push-driven streaming encryption.
//!
//! Output layout: `header(48) || ciphertext(N) || trailer(32)`. The CTR
//! cipher state carries forward across chunks (no re-initialization per
//! chunk) and the MAC accumulates header-then-ciphertext in stream order.

use crate::aliases::{Aes128Ctr, HmacSha256, Passphrase, StreamKey16};
use crate::consts::{HEADER_LEN, KEY_LEN, TRAILER_LEN};
use crate::crypto::kdf::derive_stream_key;
use crate::error::SealstreamError;
use crate::header::StreamHeader;
use aes::cipher::{KeyIvInit, StreamCipher};
use hmac::Mac;

/// One encryption session.
///
/// Feed plaintext chunks in order with [`update`](Self::update); every call
/// returns the bytes to append to the output stream. [`finalize`](Self::finalize)
/// returns the closing bytes. The first bytes produced are always the 48-byte
/// header (emitted by the first `update`, or by `finalize` for an empty
/// plaintext), so concatenating all returned chunks yields a well-formed
/// stream regardless of how the input was chunked.
///
/// Not restartable: a session owns its cipher and MAC state exclusively and
/// is consumed by `finalize`.
pub struct StreamEncryptor {
    cipher: Aes128Ctr,
    mac: HmacSha256,
    pending_header: Option<[u8; HEADER_LEN]>,
}

impl StreamEncryptor {
    /// Set up a session: fresh IV and salts, both keys derived, header
    /// absorbed into the MAC. Fails before any output can be produced.
    pub fn new(passphrase: &Passphrase, iterations: u32) -> Result<Self, SealstreamError> {
        let header = StreamHeader::generate()?;

        let mut cipher_key = StreamKey16::new([0u8; KEY_LEN]);
        let mut mac_key = StreamKey16::new([0u8; KEY_LEN]);
        derive_stream_key(passphrase, &header.cipher_salt, iterations, &mut cipher_key)?;
        derive_stream_key(passphrase, &header.mac_salt, iterations, &mut mac_key)?;

        let cipher = Aes128Ctr::new_from_slices(&cipher_key[..], &header.iv)
            .map_err(|e| SealstreamError::EncryptionSetup(format!("cipher init: {e}")))?;
        let mut mac = <HmacSha256 as Mac>::new_from_slice(&mac_key[..])
            .expect("HMAC-SHA256 accepts keys of any length");

        let header_bytes = header.to_bytes();
        mac.update(&header_bytes);

        Ok(Self {
            cipher,
            mac,
            pending_header: Some(header_bytes),
        })
    }

    /// Encrypt one plaintext chunk and return the stream bytes it produced.
    ///
    /// The first call prepends the header. Empty chunks are legal.
    pub fn update(&mut self, plaintext: &[u8]) -> Vec<u8> {
        let mut out = match self.pending_header.take() {
            Some(header) => {
                let mut out = Vec::with_capacity(HEADER_LEN + plaintext.len());
                out.extend_from_slice(&header);
                out
            }
            None => Vec::with_capacity(plaintext.len()),
        };

        let ciphertext_start = out.len();
        out.extend_from_slice(plaintext);
        self.cipher.apply_keystream(&mut out[ciphertext_start..]);
        self.mac.update(&out[ciphertext_start..]);
        out
    }

    /// Close the session and return the final stream bytes: the header if no
    /// chunk was ever fed, then the 32-byte MAC trailer. CTR is a pure stream
    /// cipher, so there is no buffered ciphertext left to flush.
    pub fn finalize(mut self) -> Vec<u8> {
        let mut out = match self.pending_header.take() {
            Some(header) => {
                let mut out = Vec::with_capacity(HEADER_LEN + TRAILER_LEN);
                out.extend_from_slice(&header);
                out
            }
            None => Vec::with_capacity(TRAILER_LEN),
        };

        out.extend_from_slice(&self.mac.finalize().into_bytes());
        out
    }
}

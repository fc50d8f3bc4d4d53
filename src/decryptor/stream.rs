//! src/decryptor/stream.rs
//! Push-driven streaming decryption with trailing-window rebuffering.
//!
//! The decryptor faces two framing problems the encryptor does not:
//! the first 48 bytes must arrive before any key material is known, and the
//! last 32 bytes are a trailer that must be excluded from both decryption and
//! MAC input, yet nothing marks a chunk as "last" until the source reports
//! exhaustion. Both are solved by buffering: accumulate until the header is
//! complete, then always retain the trailing 32 bytes of whatever has been
//! buffered, releasing earlier bytes only once the buffer holds more than
//! [`REBUFFER_THRESHOLD`] bytes. When the stream ends, the retained tail is
//! exactly the trailer.

use crate::aliases::{Aes128Ctr, HmacSha256, Passphrase, StreamKey16};
use crate::consts::{HEADER_LEN, KEY_LEN, REBUFFER_THRESHOLD, TRAILER_LEN};
use crate::crypto::kdf::derive_stream_key;
use crate::error::SealstreamError;
use crate::header::StreamHeader;
use aes::cipher::{KeyIvInit, StreamCipher};
use hmac::Mac;
use secrecy::ExposeSecret;

enum DecryptState {
    /// Accumulating the first 48 bytes. No keys exist yet.
    AwaitingHeader { pending: Vec<u8> },
    /// Header parsed, keys derived. `pending` holds ciphertext not yet
    /// committed; its trailing 32 bytes are the candidate trailer.
    Streaming {
        cipher: Aes128Ctr,
        mac: HmacSha256,
        pending: Vec<u8>,
    },
}

/// One decryption session.
///
/// Feed ciphertext chunks in order with [`update`](Self::update); chunk
/// boundaries are arbitrary (empty and 1-byte chunks are legal). Call
/// [`finalize`](Self::finalize) once the source is exhausted to strip and
/// verify the trailer.
///
/// Plaintext is released eagerly: bytes returned by `update` have **not**
/// yet been authenticated. Only a successful `finalize` vouches for the
/// session; on [`SealstreamError::Authentication`] every byte previously
/// released must be discarded. Callers that cannot tolerate that window
/// should buffer the output until `finalize` returns `Ok`.
pub struct StreamDecryptor {
    passphrase: Passphrase,
    iterations: u32,
    state: DecryptState,
}

impl StreamDecryptor {
    /// Set up a session. Key derivation is deferred until the header has
    /// arrived, since the salts live in the header.
    pub fn new(passphrase: &Passphrase, iterations: u32) -> Self {
        Self {
            passphrase: Passphrase::from(passphrase.expose_secret().to_owned()),
            iterations,
            state: DecryptState::AwaitingHeader {
                pending: Vec::with_capacity(HEADER_LEN),
            },
        }
    }

    /// Consume one ciphertext chunk, returning any plaintext it released.
    ///
    /// Returns an empty vector while the header is still incomplete and
    /// whenever the buffered tail is too short to commit safely.
    pub fn update(&mut self, chunk: &[u8]) -> Result<Vec<u8>, SealstreamError> {
        match &mut self.state {
            DecryptState::AwaitingHeader { pending } => {
                pending.extend_from_slice(chunk);
                if pending.len() < HEADER_LEN {
                    return Ok(Vec::new());
                }
                let buffered = std::mem::take(pending);
                self.enter_streaming(&buffered)?;
            }
            DecryptState::Streaming { pending, .. } => {
                pending.extend_from_slice(chunk);
            }
        }

        Ok(self.drain_committed())
    }

    /// The source is exhausted: the buffered tail ends in the 32-byte
    /// signature. Decrypt and MAC any ciphertext before it, then verify.
    pub fn finalize(self) -> Result<Vec<u8>, SealstreamError> {
        match self.state {
            DecryptState::AwaitingHeader { .. } => Err(SealstreamError::TruncatedStream(
                "stream ended before a complete 48-byte header",
            )),
            DecryptState::Streaming {
                mut cipher,
                mut mac,
                mut pending,
            } => {
                if pending.len() < TRAILER_LEN {
                    return Err(SealstreamError::TruncatedStream(
                        "stream ended before a complete 32-byte trailer",
                    ));
                }

                let signature = pending.split_off(pending.len() - TRAILER_LEN);
                mac.update(&pending);
                cipher.apply_keystream(&mut pending);

                mac.verify_slice(&signature)
                    .map_err(|_| SealstreamError::Authentication)?;

                Ok(pending)
            }
        }
    }

    /// Parse the header out of `buffered`, derive both keys, and move to
    /// `Streaming` with the remainder as initial ciphertext.
    fn enter_streaming(&mut self, buffered: &[u8]) -> Result<(), SealstreamError> {
        let mut header_bytes = [0u8; HEADER_LEN];
        header_bytes.copy_from_slice(&buffered[..HEADER_LEN]);
        let header = StreamHeader::parse(&header_bytes);

        let mut cipher_key = StreamKey16::new([0u8; KEY_LEN]);
        let mut mac_key = StreamKey16::new([0u8; KEY_LEN]);
        derive_stream_key(
            &self.passphrase,
            &header.cipher_salt,
            self.iterations,
            &mut cipher_key,
        )?;
        derive_stream_key(
            &self.passphrase,
            &header.mac_salt,
            self.iterations,
            &mut mac_key,
        )?;

        let cipher = Aes128Ctr::new_from_slices(&cipher_key[..], &header.iv)
            .map_err(|e| SealstreamError::DecryptionSetup(format!("cipher init: {e}")))?;
        let mut mac = <HmacSha256 as Mac>::new_from_slice(&mac_key[..])
            .expect("HMAC-SHA256 accepts keys of any length");
        mac.update(&header_bytes);

        self.state = DecryptState::Streaming {
            cipher,
            mac,
            pending: buffered[HEADER_LEN..].to_vec(),
        };
        Ok(())
    }

    /// Release all but the trailing 32 buffered bytes, but only once the
    /// buffer exceeds the threshold. Keeping the tail back is what lets
    /// `finalize` find the trailer without ever rereading the stream.
    fn drain_committed(&mut self) -> Vec<u8> {
        match &mut self.state {
            DecryptState::Streaming { cipher, mac, pending }
                if pending.len() > REBUFFER_THRESHOLD =>
            {
                let cut = pending.len() - TRAILER_LEN;
                let mut out: Vec<u8> = pending.drain(..cut).collect();
                mac.update(&out);
                cipher.apply_keystream(&mut out);
                out
            }
            _ => Vec::new(),
        }
    }
}

//! src/decryptor/decrypt.rs

use crate::aliases::Passphrase;
use crate::consts::{IO_CHUNK_LEN, PBKDF2_MAX_ITER, PBKDF2_MIN_ITER};
use crate::decryptor::stream::StreamDecryptor;
use crate::error::SealstreamError;
use std::io::{Read, Write};

/// Decrypt a sealed stream from `source` into `destination`, verifying the
/// MAC trailer once the source is exhausted.
///
/// Plaintext is written to `destination` as it is recovered, before the
/// trailer has been seen. On any `Err`, in particular
/// [`SealstreamError::Authentication`], everything already written is
/// unauthenticated and must be discarded by the caller.
///
/// `passphrase` and `kdf_iterations` must match the values used to encrypt;
/// a mismatch in either surfaces as `Authentication`.
pub fn decrypt<R, W>(
    mut source: R,
    mut destination: W,
    passphrase: &Passphrase,
    kdf_iterations: u32,
) -> Result<(), SealstreamError>
where
    R: Read,
    W: Write,
{
    if !(PBKDF2_MIN_ITER..=PBKDF2_MAX_ITER).contains(&kdf_iterations) {
        return Err(SealstreamError::DecryptionSetup(
            "KDF iterations out of range".into(),
        ));
    }

    let mut decryptor = StreamDecryptor::new(passphrase, kdf_iterations);

    let mut buf = vec![0u8; IO_CHUNK_LEN];
    loop {
        let n = source.read(&mut buf)?;
        if n == 0 {
            break;
        }
        destination.write_all(&decryptor.update(&buf[..n])?)?;
    }

    destination.write_all(&decryptor.finalize()?)?;
    Ok(())
}

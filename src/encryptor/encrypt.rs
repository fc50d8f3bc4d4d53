//! src/encryptor/encrypt.rs

use crate::aliases::Passphrase;
use crate::consts::{IO_CHUNK_LEN, PBKDF2_MAX_ITER, PBKDF2_MIN_ITER};
use crate::encryptor::stream::StreamEncryptor;
use crate::error::SealstreamError;
use std::io::{Read, Write};

/// Encrypt everything from `source` into a sealed stream on `destination`.
///
/// Output is `header(48) || ciphertext || trailer(32)`; the ciphertext is
/// exactly as long as the plaintext. Only a fixed-size read buffer is held in
/// memory, so arbitrarily large sources stream through.
///
/// The decryptor must be given the same passphrase and the same iteration
/// count; neither travels with the stream.
pub fn encrypt<R, W>(
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
        return Err(SealstreamError::EncryptionSetup(
            "KDF iterations out of range".into(),
        ));
    }

    let mut encryptor = StreamEncryptor::new(passphrase, kdf_iterations)?;

    let mut buf = vec![0u8; IO_CHUNK_LEN];
    loop {
        let n = source.read(&mut buf)?;
        if n == 0 {
            break;
        }
        destination.write_all(&encryptor.update(&buf[..n]))?;
    }

    destination.write_all(&encryptor.finalize())?;
    Ok(())
}

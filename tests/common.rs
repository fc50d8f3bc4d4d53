//! tests/common.rs
//! Common constants and helpers shared across test files

use sealstream::aliases::Passphrase;
use sealstream::SealstreamError;
use std::io::Cursor;

/// Fast iteration count for tests - performance testing is in benches/
#[allow(dead_code)]
pub const TEST_ITERATIONS: u32 = 5;

/// Standard test passphrase used across test files
#[allow(dead_code)]
pub const TEST_PASSPHRASE: &str = "correct-horse";

#[allow(dead_code)]
pub fn passphrase(s: &str) -> Passphrase {
    Passphrase::from(s.to_string())
}

#[allow(dead_code)]
pub fn encrypt_to_vec(pw: &Passphrase, plaintext: &[u8]) -> Vec<u8> {
    let mut sealed = Vec::new();
    sealstream::encrypt(Cursor::new(plaintext), &mut sealed, pw, TEST_ITERATIONS).unwrap();
    sealed
}

#[allow(dead_code)]
pub fn decrypt_to_vec(pw: &Passphrase, stream: &[u8]) -> Result<Vec<u8>, SealstreamError> {
    let mut plaintext = Vec::new();
    sealstream::decrypt(Cursor::new(stream), &mut plaintext, pw, TEST_ITERATIONS)?;
    Ok(plaintext)
}

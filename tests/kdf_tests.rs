//! tests/kdf_tests.rs
//! Key derivation: determinism and input sensitivity

mod common;

use common::passphrase;
use sealstream::aliases::{Salt16, StreamKey16};
use sealstream::consts::KEY_LEN;
use sealstream::{derive_stream_key, SealstreamError};

fn derive(pw: &str, salt: Salt16, iterations: u32) -> StreamKey16 {
    let pw = passphrase(pw);
    let mut key = StreamKey16::new([0u8; KEY_LEN]);
    derive_stream_key(&pw, &salt, iterations, &mut key).unwrap();
    key
}

#[test]
fn derivation_is_deterministic() {
    let a = derive("testpassword", [0x42; 16], 10);
    let b = derive("testpassword", [0x42; 16], 10);
    assert_eq!(*a, *b);
}

#[test]
fn salt_changes_the_key() {
    // Independent salts are what keep the cipher key and MAC key distinct
    let a = derive("testpassword", [0x00; 16], 10);
    let b = derive("testpassword", [0x01; 16], 10);
    assert_ne!(*a, *b);
}

#[test]
fn passphrase_changes_the_key() {
    let a = derive("passphrase-one", [0x42; 16], 10);
    let b = derive("passphrase-two", [0x42; 16], 10);
    assert_ne!(*a, *b);
}

#[test]
fn iteration_count_changes_the_key() {
    let a = derive("testpassword", [0x42; 16], 10);
    let b = derive("testpassword", [0x42; 16], 11);
    assert_ne!(*a, *b);
}

#[test]
fn zero_iterations_rejected() {
    let pw = passphrase("testpassword");
    let mut key = StreamKey16::new([0u8; KEY_LEN]);
    let err = derive_stream_key(&pw, &[0x42; 16], 0, &mut key).unwrap_err();
    assert!(matches!(err, SealstreamError::KeyDerivation(_)));
}

#[test]
fn empty_passphrase_still_derives() {
    // An empty passphrase is weak, not invalid; rejection policy belongs to
    // callers
    let key = derive("", [0x42; 16], 10);
    assert_ne!(*key, [0u8; KEY_LEN]);
}

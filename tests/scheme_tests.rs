//! tests/scheme_tests.rs
//! Scheme dispatch: every backend round-trips; sealing backends hide content

mod common;

use common::{passphrase, TEST_ITERATIONS};
use sealstream::Scheme;
use std::io::Cursor;

#[test]
fn all_schemes_roundtrip() {
    let pw = passphrase("scheme-roundtrip");
    let plaintext = b"some bytes";

    for scheme in Scheme::all() {
        let mut sealed = Vec::new();
        scheme
            .seal(Cursor::new(plaintext), &mut sealed, &pw, TEST_ITERATIONS)
            .unwrap();

        // Backends with a real transform must not leave the content readable
        if !scheme.extension().is_empty() {
            assert_ne!(sealed, plaintext, "{scheme:?} left plaintext visible");
        }

        let mut recovered = Vec::new();
        scheme
            .open(Cursor::new(&sealed), &mut recovered, &pw, TEST_ITERATIONS)
            .unwrap();
        assert_eq!(recovered, plaintext, "{scheme:?} failed roundtrip");
    }
}

#[test]
fn plain_scheme_is_identity() {
    let pw = passphrase("unused");
    let plaintext = b"pass through untouched";

    let mut out = Vec::new();
    Scheme::Plain
        .seal(Cursor::new(plaintext), &mut out, &pw, TEST_ITERATIONS)
        .unwrap();
    assert_eq!(out, plaintext);
}

#[test]
fn scheme_extensions() {
    assert_eq!(Scheme::Plain.extension(), "");
    assert_eq!(Scheme::Aes.extension(), "aes");
    assert_eq!(Scheme::all().len(), 2);
}

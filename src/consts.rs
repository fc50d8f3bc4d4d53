//! Global constants for the sealstream wire format and KDF defaults.

/// Cipher IV length in bytes (one AES block, used as the initial CTR counter).
pub const IV_LEN: usize = 16;

/// Salt length in bytes. One salt for the cipher key, a distinct one for the
/// MAC key, both freshly random per encryption session.
pub const SALT_LEN: usize = 16;

/// Derived key length in bytes (128-bit AES key; also the HMAC key length).
pub const KEY_LEN: usize = 16;

/// Stream header length: IV || cipher salt || MAC salt.
pub const HEADER_LEN: usize = IV_LEN + 2 * SALT_LEN;

/// Stream trailer length: one HMAC-SHA256 digest.
pub const TRAILER_LEN: usize = 32;

/// Recommended PBKDF2 iteration count.
/// Encryptor and decryptor must agree on it; it is not transmitted in-band.
pub const DEFAULT_PBKDF2_ITERATIONS: u32 = 100_000;

/// Minimum allowed PBKDF2 iterations.
pub const PBKDF2_MIN_ITER: u32 = 1;

/// Maximum allowed PBKDF2 iterations (5 million).
pub const PBKDF2_MAX_ITER: u32 = 5_000_000;

/// Read-buffer size used by the `encrypt`/`decrypt` facades.
pub const IO_CHUNK_LEN: usize = 64 * 1024;

/// The decryptor releases buffered ciphertext only once its pending buffer
/// exceeds this many bytes, retaining the trailing [`TRAILER_LEN`] as the
/// candidate trailer. `HEADER_LEN` gives comfortable headroom over the
/// 32-byte trailer.
pub const REBUFFER_THRESHOLD: usize = HEADER_LEN;

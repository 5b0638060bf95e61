//! Password-to-seed derivation via the sdbm rolling hash.
//!
//! Collapses a password string into the 64-bit seed that initializes
//! [`LcGen`](super::lcgen::LcGen). The hash is the sdbm polynomial
//! `hash = b + (hash << 6) + (hash << 16) - hash` over the password's
//! UTF-8 bytes, with all arithmetic wrapping mod 2^64. Deterministic and
//! collision-prone; it preserves no secrecy beyond obscuring the password
//! itself.

/// Derives a 64-bit keystream seed from a password.
///
/// Pure function with no failure modes. The empty password hashes to 0.
///
/// # Examples
///
/// ```
/// use sbcrypt::random::password_seed::derive_seed;
///
/// assert_eq!(derive_seed("a"), 97);
/// assert_eq!(derive_seed(""), 0);
/// ```
pub fn derive_seed(password: &str) -> u64 {
    let mut hash: u64 = 0;
    for byte in password.bytes() {
        hash = (byte as u64)
            .wrapping_add(hash << 6)
            .wrapping_add(hash << 16)
            .wrapping_sub(hash);
    }
    hash
}

//! Password hashing and verification
//!
//! Passwords are never stored in plaintext. The stored form is
//! `<salt>$<digest>` where salt is 16 random bytes (32 hex chars) and digest
//! is SHA-256 over `salt_hex + password`, as 64 hex chars.
//!
//! # Pure Functions
//!
//! This module contains only pure functions plus salt generation.
//! No HTTP framework or database dependencies - those live in bookrec-api.

use sha2::{Digest, Sha256};

/// Separator between salt and digest in the stored form
const SEPARATOR: char = '$';

/// Hash a password with a fresh random salt
///
/// # Examples
///
/// ```
/// use bookrec_common::auth::{hash_password, verify_password};
///
/// let stored = hash_password("sekrit");
/// assert!(verify_password("sekrit", &stored));
/// assert!(!verify_password("wrong", &stored));
/// ```
pub fn hash_password(password: &str) -> String {
    use rand::RngCore;

    let mut salt = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut salt);
    let salt_hex: String = salt.iter().map(|b| format!("{:02x}", b)).collect();

    format!("{}{}{}", salt_hex, SEPARATOR, digest_hex(&salt_hex, password))
}

/// Verify a password against a stored `salt$digest` value
///
/// Returns false for any malformed stored value rather than erroring; a
/// corrupt hash is indistinguishable from a wrong password to the caller.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let Some((salt_hex, digest)) = stored.split_once(SEPARATOR) else {
        return false;
    };
    digest_hex(salt_hex, password) == digest
}

fn digest_hex(salt_hex: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt_hex.as_bytes());
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

//! bcrypt password hashing and key derivation.
//!
//! Generates `$2a$`/`$2b$` salts, hashes passwords against them, derives
//! raw key material via bcrypt-pbkdf, and verifies candidate passwords in
//! constant time without ever surfacing an error.

mod crypto;
mod error;

pub use crate::crypto::{
    DEFAULT_COST, HASH_LEN, MAX_COST, MAX_KEY_LEN, MIN_COST, MIN_KDF_ROUNDS, Version,
};
pub use crate::error::{Error, Result};

use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

/// Generate a fresh salt with the default revision and cost (`$2b$12$`).
pub fn gen_salt() -> Result<String> {
    gen_salt_with(Version::default(), DEFAULT_COST)
}

/// Generate a fresh salt with an explicit revision and cost factor.
pub fn gen_salt_with(version: Version, cost: u32) -> Result<String> {
    if !(MIN_COST..=MAX_COST).contains(&cost) {
        return Err(Error::InvalidRounds(cost));
    }

    let entropy = crypto::gen_entropy()?;
    let encoded = crypto::encode_salt(&entropy)?;
    crypto::format_salt(version, cost, &encoded)
}

/// Hash `password` under `salt`, returning the full 60-character hash.
///
/// `salt` is a formatted `$2b$12$...` string as produced by [`gen_salt`];
/// a full stored hash is accepted too, its digest part being ignored. The
/// output always begins with the same four bytes as `salt`.
pub fn hash(password: &str, salt: &str) -> Result<String> {
    crypto::hashpass(password, salt)
}

/// Derive `key_len` bytes of key material with bcrypt-pbkdf.
///
/// Round counts below [`MIN_KDF_ROUNDS`] are refused; see
/// [`derive_key_relaxed`] when interoperating with deployments that chose
/// fewer.
pub fn derive_key(
    password: &str,
    salt: &str,
    key_len: usize,
    rounds: u32,
) -> Result<Zeroizing<Vec<u8>>> {
    crypto::derive(password, salt, key_len, rounds, false)
}

/// Like [`derive_key`], but without the round floor.
pub fn derive_key_relaxed(
    password: &str,
    salt: &str,
    key_len: usize,
    rounds: u32,
) -> Result<Zeroizing<Vec<u8>>> {
    crypto::derive(password, salt, key_len, rounds, true)
}

/// Check `password` against a stored hash.
///
/// Never fails: malformed, foreign-format, or otherwise unusable hashes
/// compare unequal instead of surfacing an error, so a caller cannot
/// distinguish "wrong password" from "bad hash". The comparison is
/// constant-time.
pub fn verify(password: &str, hashed: &str) -> bool {
    let Ok(candidate) = crypto::hashpass(password, hashed) else {
        return false;
    };

    if candidate.len() != hashed.len() {
        return false;
    }

    candidate.as_bytes().ct_eq(hashed.as_bytes()).into()
}

//! Error types for salt generation, hashing, and key derivation.

use thiserror::Error;

/// Result type for hashing and key-derivation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating salts, hashing passwords, or
/// deriving key material.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Cost factor outside the range the operation accepts.
    #[error("invalid cost factor: {0}")]
    InvalidRounds(u32),

    /// The OS random source could not be opened.
    #[error("OS random source unavailable")]
    RandomDevice,

    /// The OS returned fewer random bytes than requested, or the encoded
    /// salt failed its sanity decode.
    #[error("salt entropy could not be acquired")]
    RandomAllocation,

    /// The assembled hash string is not valid UTF-8.
    #[error("hash output is not valid UTF-8")]
    InvalidUtf8,

    /// Requested key length outside `[1, 513]`.
    #[error("unsupported key length: {0}")]
    UnsupportedKeyLength(usize),

    /// Empty or malformed salt, or a salt header the hash primitive
    /// rejected.
    #[error("invalid salt")]
    InvalidSalt,

    /// Empty password supplied to key derivation.
    #[error("password must not be empty")]
    InvalidPassword,

    /// The bcrypt-pbkdf primitive reported failure.
    #[error("key derivation failed: {0}")]
    KeyDerivation(String),
}

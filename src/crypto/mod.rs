//! Cryptographic building blocks for the bcrypt hash lifecycle.
//!
//! Provides OS entropy acquisition, the radix-64 salt codec, and the
//! bindings to the bcrypt and bcrypt-pbkdf primitives.

pub mod hash;
pub mod kdf;
pub mod rand;
pub mod salt;

pub use hash::hashpass;
pub use kdf::derive;
pub use rand::gen_entropy;
pub use salt::{Version, encode_salt, format_salt};

/// Length of the raw salt entropy (16 bytes).
pub const SALT_LEN: usize = 16;
/// Length of the radix-64 encoded salt (22 characters).
pub const ENCODED_SALT_LEN: usize = 22;
/// Length of a full formatted hash string (60 characters).
pub const HASH_LEN: usize = 60;
/// Minimum accepted cost factor for salt generation.
pub const MIN_COST: u32 = 4;
/// Maximum accepted cost factor for salt generation.
pub const MAX_COST: u32 = 31;
/// Default cost factor (2^12 expansion rounds).
pub const DEFAULT_COST: u32 = 12;
/// Maximum derivable key length in bytes.
pub const MAX_KEY_LEN: usize = 513;
/// Minimum bcrypt-pbkdf round count accepted by default.
pub const MIN_KDF_ROUNDS: u32 = 50;

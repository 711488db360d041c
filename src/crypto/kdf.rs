use zeroize::Zeroizing;

use super::{MAX_KEY_LEN, MIN_KDF_ROUNDS};
use crate::error::{Error, Result};

/// Derive `key_len` bytes of key material from `password` and `salt`
/// with bcrypt-pbkdf.
///
/// Preconditions are checked in a fixed order so the caller always sees
/// the first violated one: password, salt, key length, rounds. The round
/// floor of [`MIN_KDF_ROUNDS`] is skipped when `allow_few_rounds` is set.
pub fn derive(
    password: &str,
    salt: &str,
    key_len: usize,
    rounds: u32,
    allow_few_rounds: bool,
) -> Result<Zeroizing<Vec<u8>>> {
    if password.is_empty() {
        return Err(Error::InvalidPassword);
    }
    if salt.is_empty() {
        return Err(Error::InvalidSalt);
    }
    if key_len == 0 || key_len > MAX_KEY_LEN {
        return Err(Error::UnsupportedKeyLength(key_len));
    }
    if rounds == 0 {
        return Err(Error::InvalidRounds(rounds));
    }
    if !allow_few_rounds && rounds < MIN_KDF_ROUNDS {
        return Err(Error::InvalidRounds(rounds));
    }

    let mut key = Zeroizing::new(vec![0u8; key_len]);
    bcrypt_pbkdf::bcrypt_pbkdf(password.as_bytes(), salt.as_bytes(), rounds, key.as_mut())
        .map_err(|e| Error::KeyDerivation(e.to_string()))?;

    Ok(key)
}

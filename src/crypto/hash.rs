use super::salt::{ParsedSalt, Version};
use crate::error::{Error, Result};

/// Longest password bcrypt consumes; anything beyond is truncated.
const MAX_PASSWORD_LEN: usize = 72;
/// Length of the `$2b$` revision tag copied from the salt onto the output.
const PREFIX_LEN: usize = 4;

impl From<Version> for bcrypt::Version {
    fn from(version: Version) -> Self {
        match version {
            Version::TwoA => bcrypt::Version::TwoA,
            Version::TwoB => bcrypt::Version::TwoB,
        }
    }
}

/// Hash `password` under a formatted salt and return the full 60-character
/// hash string.
///
/// The salt may be a bare salt or a full stored hash whose trailing digest
/// is ignored. The first four bytes of the output are copied verbatim from
/// the salt string, so the revision tag the caller supplied round-trips
/// exactly.
pub fn hashpass(password: &str, salt: &str) -> Result<String> {
    let parsed = ParsedSalt::parse(salt)?;

    if password.len() > MAX_PASSWORD_LEN {
        log::warn!(
            "password of length {} is truncated to {MAX_PASSWORD_LEN} bytes by bcrypt",
            password.len()
        );
    }

    let parts = bcrypt::hash_with_salt(password.as_bytes(), parsed.cost, *parsed.salt)
        .map_err(|_| Error::InvalidSalt)?;

    let mut out = parts.format_for_version(parsed.version.into()).into_bytes();
    out[..PREFIX_LEN].copy_from_slice(&salt.as_bytes()[..PREFIX_LEN]);

    String::from_utf8(out).map_err(|_| Error::InvalidUtf8)
}

use getrandom::fill;
use zeroize::Zeroizing;

use super::SALT_LEN;
use crate::error::{Error, Result};

/// Fill buffer with cryptographically secure random bytes
pub(crate) fn secure_random(buf: &mut [u8]) -> Result<()> {
    fill(buf).map_err(|_| Error::RandomDevice)
}

/// Draw fresh salt entropy from the OS random source.
///
/// Entropy is drawn per call; nothing is cached or reused.
pub fn gen_entropy() -> Result<Zeroizing<[u8; SALT_LEN]>> {
    let mut entropy = Zeroizing::new([0u8; SALT_LEN]);
    secure_random(entropy.as_mut())?;
    Ok(entropy)
}

use std::fmt;
use std::str::{self, FromStr};

use base64::{Engine, alphabet::BCRYPT, engine::GeneralPurpose, engine::general_purpose::NO_PAD};
use zeroize::Zeroizing;

use super::{ENCODED_SALT_LEN, MAX_COST, MIN_COST, SALT_LEN};
use crate::error::{Error, Result};

/// The bcrypt radix-64 engine (`./A-Za-z0-9` alphabet, no padding).
///
/// This alphabet differs from RFC 4648 base64; it must match the bcrypt
/// convention exactly so stored hashes from other implementations decode.
pub const BCRYPT_B64: GeneralPurpose = GeneralPurpose::new(&BCRYPT, NO_PAD);

/// bcrypt format revision carried in the `$2x$` header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Version {
    TwoA,
    #[default]
    TwoB,
}

impl Version {
    pub fn as_str(self) -> &'static str {
        match self {
            Version::TwoA => "2a",
            Version::TwoB => "2b",
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "2a" => Ok(Version::TwoA),
            "2b" => Ok(Version::TwoB),
            _ => Err(Error::InvalidSalt),
        }
    }
}

/// Encode 16 bytes of entropy into the 22-character salt form.
pub fn encode_salt(entropy: &[u8; SALT_LEN]) -> Result<String> {
    let mut encoded = [0u8; ENCODED_SALT_LEN];

    let written = BCRYPT_B64
        .encode_slice(entropy, &mut encoded)
        .map_err(|_| Error::RandomAllocation)?;
    if written != ENCODED_SALT_LEN {
        return Err(Error::RandomAllocation);
    }

    // sanity decode; the engine only emits ASCII
    let encoded = str::from_utf8(&encoded).map_err(|_| Error::RandomAllocation)?;
    Ok(encoded.to_string())
}

/// Assemble the `$<version>$<cost>$<salt>` string, cost zero-padded to
/// two digits.
pub fn format_salt(version: Version, cost: u32, encoded_salt: &str) -> Result<String> {
    if !(MIN_COST..=MAX_COST).contains(&cost) {
        return Err(Error::InvalidRounds(cost));
    }

    Ok(format!("${version}${cost:02}${encoded_salt}"))
}

/// A decoded salt header.
///
/// Parses both a bare 29-character salt and a full 60-character stored
/// hash; a trailing digest is ignored.
#[derive(Debug)]
pub struct ParsedSalt {
    pub version: Version,
    pub cost: u32,
    pub salt: Zeroizing<[u8; SALT_LEN]>,
}

impl ParsedSalt {
    pub fn parse(salt: &str) -> Result<Self> {
        let rest = salt.strip_prefix('$').ok_or(Error::InvalidSalt)?;
        let (version, rest) = rest.split_once('$').ok_or(Error::InvalidSalt)?;
        let (cost, rest) = rest.split_once('$').ok_or(Error::InvalidSalt)?;

        let version: Version = version.parse()?;

        if cost.len() != 2 || !cost.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidSalt);
        }
        let cost: u32 = cost.parse().map_err(|_| Error::InvalidSalt)?;

        // index by byte so multi-byte input cannot panic on a char boundary
        let encoded = rest.as_bytes();
        if encoded.len() < ENCODED_SALT_LEN {
            return Err(Error::InvalidSalt);
        }

        let mut raw = Zeroizing::new([0u8; SALT_LEN]);
        let written = BCRYPT_B64
            .decode_slice(&encoded[..ENCODED_SALT_LEN], raw.as_mut())
            .map_err(|_| Error::InvalidSalt)?;
        if written != SALT_LEN {
            return Err(Error::InvalidSalt);
        }

        Ok(Self {
            version,
            cost,
            salt: raw,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTROPY: [u8; SALT_LEN] = [
        38, 113, 212, 141, 108, 213, 195, 166, 201, 38, 20, 13, 47, 40, 104, 18,
    ];

    #[test]
    fn encode_matches_known_vector() {
        assert_eq!(encode_salt(&ENTROPY).unwrap(), "HlFShUxTu4ZHHfOLJwfmCe");
    }

    #[test]
    fn format_pads_cost_to_two_digits() {
        let encoded = encode_salt(&ENTROPY).unwrap();

        let salt = format_salt(Version::TwoB, 4, &encoded).unwrap();
        assert_eq!(salt, "$2b$04$HlFShUxTu4ZHHfOLJwfmCe");

        let salt = format_salt(Version::TwoA, 31, &encoded).unwrap();
        assert_eq!(salt, "$2a$31$HlFShUxTu4ZHHfOLJwfmCe");
    }

    #[test]
    fn format_rejects_out_of_range_cost() {
        let encoded = encode_salt(&ENTROPY).unwrap();

        assert!(matches!(
            format_salt(Version::TwoB, 3, &encoded),
            Err(Error::InvalidRounds(3))
        ));
        assert!(matches!(
            format_salt(Version::TwoB, 32, &encoded),
            Err(Error::InvalidRounds(32))
        ));
    }

    #[test]
    fn parse_roundtrips_a_bare_salt() {
        let parsed = ParsedSalt::parse("$2b$05$HlFShUxTu4ZHHfOLJwfmCe").unwrap();

        assert_eq!(parsed.version, Version::TwoB);
        assert_eq!(parsed.cost, 5);
        assert_eq!(*parsed.salt, ENTROPY);
    }

    #[test]
    fn parse_accepts_a_full_stored_hash() {
        let parsed =
            ParsedSalt::parse("$2a$04$UuTkLRZZ6QofpDOlMz32MuuxEHA43WOemOYHPz6.SjsVsyO1tDU96")
                .unwrap();

        assert_eq!(parsed.version, Version::TwoA);
        assert_eq!(parsed.cost, 4);
    }

    #[test]
    fn parse_rejects_malformed_input() {
        // no leading dollar
        assert!(ParsedSalt::parse("2b$04$HlFShUxTu4ZHHfOLJwfmCe").is_err());
        // unsupported revision
        assert!(ParsedSalt::parse("$2y$04$HlFShUxTu4ZHHfOLJwfmCe").is_err());
        // cost not zero-padded
        assert!(ParsedSalt::parse("$2b$4$HlFShUxTu4ZHHfOLJwfmCe").is_err());
        // cost not a number
        assert!(ParsedSalt::parse("$2b$ab$HlFShUxTu4ZHHfOLJwfmCe").is_err());
        // salt section too short
        assert!(ParsedSalt::parse("$2b$04$HlFShUxTu4").is_err());
        // salt contains characters outside the alphabet
        assert!(ParsedSalt::parse("$2b$04$HlFShUxTu4ZHHfOLJwfmC$").is_err());
        assert!(ParsedSalt::parse("").is_err());
    }

    #[test]
    fn parse_survives_multibyte_input() {
        // must report an error, not panic on a char boundary
        assert!(ParsedSalt::parse("$2a$04$OOOOOOOOOOOOOOOOOOOOO£OOOOOOOO").is_err());
    }
}

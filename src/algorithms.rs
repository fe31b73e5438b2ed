use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::*;

/// Signature algorithms that can appear in a token header.
///
/// HS256 is the only supported algorithm. Verification never reads the
/// algorithm back from a token: the key decides which one is used.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    HS256,
}

impl Algorithm {
    /// The JWT algorithm name ("alg")
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::HS256 => "HS256",
        }
    }

    /// Length of an authentication tag, in bytes
    pub fn tag_len(self) -> usize {
        match self {
            Algorithm::HS256 => 32,
        }
    }

    pub(crate) fn authentication_tag(self, key: &[u8], authenticated: &[u8]) -> Vec<u8> {
        match self {
            Algorithm::HS256 => hmac_sha256::HMAC::mac(authenticated, key).to_vec(),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "HS256" => Ok(Algorithm::HS256),
            _ => bail!(JWTError::UnsupportedAlgorithm(name.to_string())),
        }
    }
}

#[test]
fn hs256_names() {
    assert_eq!(Algorithm::HS256.to_string(), "HS256");
    assert_eq!("HS256".parse::<Algorithm>().unwrap(), Algorithm::HS256);
    assert!("hs256".parse::<Algorithm>().is_err());
    assert!("none".parse::<Algorithm>().is_err());
}

#[test]
fn hs256_tag() {
    // RFC 4231, test case 2
    let tag = Algorithm::HS256.authentication_tag(b"Jefe", b"what do ya want for nothing?");
    assert_eq!(tag.len(), Algorithm::HS256.tag_len());
    assert_eq!(
        tag,
        [
            0x5b, 0xdc, 0xc1, 0x46, 0xbf, 0x60, 0x75, 0x4e, 0x6a, 0x04, 0x24, 0x26, 0x08, 0x95,
            0x75, 0xc7, 0x5a, 0x00, 0x3f, 0x08, 0x9d, 0x27, 0x39, 0x83, 0x9d, 0xec, 0x58, 0xb9,
            0x64, 0xec, 0x38, 0x43,
        ]
    );
}

#[test]
fn serde_as_name() {
    assert_eq!(serde_json::to_string(&Algorithm::HS256).unwrap(), r#""HS256""#);
    assert_eq!(
        serde_json::from_str::<Algorithm>(r#""HS256""#).unwrap(),
        Algorithm::HS256
    );
    assert!(serde_json::from_str::<Algorithm>(r#""none""#).is_err());
}

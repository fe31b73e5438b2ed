use rand::RngCore;
use zeroize::Zeroize;

use crate::algorithms::Algorithm;
use crate::common::*;
use crate::error::*;
use crate::token::*;

#[doc(hidden)]
#[derive(Clone)]
pub struct HMACKey {
    raw_key: Vec<u8>,
}

impl Drop for HMACKey {
    fn drop(&mut self) {
        self.raw_key.zeroize();
    }
}

impl std::fmt::Debug for HMACKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HMACKey").finish_non_exhaustive()
    }
}

impl HMACKey {
    /// Create a HMAC key from a byte slice.
    pub fn from_bytes(raw_key: &[u8]) -> Self {
        HMACKey {
            raw_key: raw_key.to_vec(),
        }
    }

    /// Convert the HMAC key to a byte slice.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.raw_key.clone()
    }

    /// Generate a random HMAC key.
    pub fn generate() -> Self {
        let mut raw_key = vec![0u8; 32];
        rand::thread_rng().fill_bytes(&mut raw_key);
        HMACKey { raw_key }
    }
}

impl AsRef<[u8]> for HMACKey {
    /// Get the raw key, as a byte slice
    fn as_ref(&self) -> &[u8] {
        &self.raw_key
    }
}

pub trait MACLike {
    fn algorithm() -> Algorithm;
    fn key(&self) -> &HMACKey;

    fn authentication_tag(&self, authenticated: &[u8]) -> Result<Vec<u8>, Error> {
        Ok(Self::algorithm().authentication_tag(self.key().as_ref(), authenticated))
    }

    /// Create a token carrying `payload`.
    fn authenticate(&self, payload: impl AsRef<[u8]>) -> Result<String, Error> {
        Token::build(Self::algorithm(), payload.as_ref(), |authenticated| {
            self.authentication_tag(authenticated.as_bytes())
        })
    }

    /// Check that a token was created with this key.
    ///
    /// Malformed tokens are not errors: they simply don't verify.
    fn verify_token(&self, token: &str) -> bool {
        self.verify_token_with_options(token, None)
    }

    fn verify_token_with_options(
        &self,
        token: &str,
        options: Option<VerificationOptions>,
    ) -> bool {
        Token::verify(token, options, |authenticated| {
            self.authentication_tag(authenticated.as_bytes())
        })
    }

    /// Verify a token, then return its payload.
    fn verify_and_decode(&self, token: &str) -> Result<Vec<u8>, Error> {
        self.verify_and_decode_with_options(token, None)
    }

    fn verify_and_decode_with_options(
        &self,
        token: &str,
        options: Option<VerificationOptions>,
    ) -> Result<Vec<u8>, Error> {
        Token::verify_and_decode(token, options, |authenticated| {
            self.authentication_tag(authenticated.as_bytes())
        })
    }
}

#[derive(Debug, Clone)]
pub struct HS256Key {
    key: HMACKey,
}

impl MACLike for HS256Key {
    fn algorithm() -> Algorithm {
        Algorithm::HS256
    }

    fn key(&self) -> &HMACKey {
        &self.key
    }
}

impl HS256Key {
    pub fn from_bytes(raw_key: &[u8]) -> Self {
        HS256Key {
            key: HMACKey::from_bytes(raw_key),
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.key.to_bytes()
    }

    pub fn generate() -> Self {
        HS256Key {
            key: HMACKey::generate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_keys_differ() {
        let a = HS256Key::generate();
        let b = HS256Key::generate();
        assert_eq!(a.to_bytes().len(), 32);
        assert_ne!(a.to_bytes(), b.to_bytes());

        let token = a.authenticate(r#"{"sub":"42","role":"admin"}"#).unwrap();
        assert!(a.verify_token(&token));
        assert!(!b.verify_token(&token));
    }

    #[test]
    fn key_round_trip() {
        let key = HS256Key::generate();
        let restored = HS256Key::from_bytes(&key.to_bytes());
        let token = key.authenticate("{}").unwrap();
        assert!(restored.verify_token(&token));
    }

    #[test]
    fn wrong_secrets_are_rejected() {
        let payload = r#"{"sub":"123"}"#;
        let secrets: [&[u8]; 5] = [b"", b"s", b"supersecret", b"supersecreT", b"supersecret!"];
        for (i, signer) in secrets.iter().enumerate() {
            let token = HS256Key::from_bytes(signer).authenticate(payload).unwrap();
            for (j, verifier) in secrets.iter().enumerate() {
                assert_eq!(HS256Key::from_bytes(verifier).verify_token(&token), i == j);
            }
        }
    }

    #[test]
    fn short_secrets_cross_reject() {
        let empty = HS256Key::from_bytes(b"");
        let one = HS256Key::from_bytes(b"s");
        assert!(!one.verify_token(&empty.authenticate("{}").unwrap()));
        assert!(!empty.verify_token(&one.authenticate("{}").unwrap()));
    }

    #[test]
    fn zero_padded_secrets_are_equivalent() {
        // HMAC pads keys shorter than a block with zeros
        let token = HS256Key::from_bytes(b"supersecret")
            .authenticate("{}")
            .unwrap();
        assert!(HS256Key::from_bytes(b"supersecret\0").verify_token(&token));
    }

    #[test]
    fn debug_does_not_leak_key() {
        let key = HS256Key::from_bytes(b"supersecret");
        assert!(!format!("{:?}", key).contains("supersecret"));
        assert!(!format!("{:?}", key).contains("raw_key"));
    }

    #[test]
    fn failing_authenticator() {
        struct Broken(HMACKey);

        impl MACLike for Broken {
            fn algorithm() -> Algorithm {
                Algorithm::HS256
            }

            fn key(&self) -> &HMACKey {
                &self.0
            }

            fn authentication_tag(&self, _authenticated: &[u8]) -> Result<Vec<u8>, Error> {
                bail!(JWTError::InternalError("HMAC unavailable".to_string()))
            }
        }

        let broken = Broken(HMACKey::from_bytes(b"supersecret"));
        let e = broken.authenticate("{}").unwrap_err();
        assert!(matches!(
            e.downcast_ref::<JWTError>(),
            Some(JWTError::InternalError(_))
        ));

        let token = HS256Key::from_bytes(b"supersecret")
            .authenticate("{}")
            .unwrap();
        assert!(!broken.verify_token(&token));
    }
}

//! Compact HS256 JSON Web Tokens.
//!
//! A token is `base64url(header).base64url(payload).base64url(tag)`, where the
//! header is always `{"alg":"HS256","typ":"JWT"}` and the tag is
//! HMAC-SHA256 of the first two segments, exactly as they appear in the token.
//! Payloads are opaque bytes: nothing here parses or validates claims.
//!
//! ```
//! use jwt_hs256::prelude::*;
//!
//! let token = jwt_hs256::encode(r#"{"sub":"123","name":"Alice"}"#, b"supersecret")?;
//! assert!(jwt_hs256::verify(&token, b"supersecret"));
//! assert!(!jwt_hs256::verify(&token, b"wrongsecret"));
//!
//! // The same, with a reusable key
//! let key = HS256Key::from_bytes(b"supersecret");
//! let payload = key.verify_and_decode(&token)?;
//! assert_eq!(payload, br#"{"sub":"123","name":"Alice"}"#);
//! # Ok::<(), jwt_hs256::Error>(())
//! ```

#![forbid(unsafe_code)]

#[macro_use]
extern crate tracing;

pub mod algorithms;
pub mod base64url;
pub mod common;
pub mod error;
pub mod hmac;
pub mod token;

mod jwt_header;

pub use crate::error::Error;

use crate::hmac::{HS256Key, MACLike};
use crate::token::Token;

pub mod prelude {
    pub use crate::algorithms::*;
    pub use crate::base64url::*;
    pub use crate::common::*;
    pub use crate::error::{Error, JWTError};
    pub use crate::hmac::*;
    pub use crate::token::*;
}

/// Create an HS256 token carrying `payload`, authenticated with `secret`.
pub fn encode(payload: impl AsRef<[u8]>, secret: impl AsRef<[u8]>) -> Result<String, Error> {
    HS256Key::from_bytes(secret.as_ref()).authenticate(payload)
}

/// Check that `token` was created with `secret`.
///
/// This never fails: malformed tokens, undecodable tags and tag mismatches
/// all return `false`.
pub fn verify(token: &str, secret: impl AsRef<[u8]>) -> bool {
    HS256Key::from_bytes(secret.as_ref()).verify_token(token)
}

/// Return the payload of `token` WITHOUT verifying it.
///
/// The result is attacker-controlled unless [`verify`] returned `true` for the
/// same token; never use it to make trust decisions. Fails with
/// `JWTError::MalformedToken` if the token doesn't have two separators, and
/// with `JWTError::InvalidEncoding` if the payload segment isn't base64url.
pub fn decode_without_verify(token: &str) -> Result<Vec<u8>, Error> {
    Token::decode_without_verify(token)
}

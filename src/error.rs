#[allow(unused)]
pub use anyhow::{anyhow, bail, ensure, Error};

#[derive(Debug, thiserror::Error)]
pub enum JWTError {
    #[error("Internal error: [{0}]")]
    InternalError(String),
    #[error("Invalid base64url encoding")]
    InvalidEncoding,
    #[error("Malformed JWT compact encoding")]
    MalformedToken,
    #[error("JWT header too large")]
    HeaderTooLarge,
    #[error("Authentication tag didn't verify")]
    InvalidAuthenticationTag,
    #[error("Unsupported algorithm: [{0}]")]
    UnsupportedAlgorithm(String),
    #[error("Token is too long")]
    TokenTooLong,
}

impl From<&str> for JWTError {
    fn from(e: &str) -> JWTError {
        JWTError::InternalError(e.into())
    }
}

use serde::{Deserialize, Serialize};

use crate::algorithms::Algorithm;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct JWTHeader {
    #[serde(rename = "alg")]
    pub(crate) algorithm: String,

    #[serde(rename = "typ", default, skip_serializing_if = "Option::is_none")]
    pub(crate) signature_type: Option<String>,

    #[serde(rename = "cty", default, skip_serializing_if = "Option::is_none")]
    pub(crate) content_type: Option<String>,

    #[serde(rename = "kid", default, skip_serializing_if = "Option::is_none")]
    pub(crate) key_id: Option<String>,
}

impl JWTHeader {
    pub(crate) fn new(algorithm: Algorithm) -> Self {
        JWTHeader {
            algorithm: algorithm.name().to_string(),
            signature_type: Some("JWT".to_string()),
            content_type: None,
            key_id: None,
        }
    }
}

#[test]
fn hs256_header_bytes() {
    let json = serde_json::to_string(&JWTHeader::new(Algorithm::HS256)).unwrap();
    assert_eq!(json, r#"{"alg":"HS256","typ":"JWT"}"#);
}

#[test]
fn foreign_header_fields() {
    let header: JWTHeader =
        serde_json::from_str(r#"{"typ":"at+jwt","kid":"k1","alg":"RS256","x5u":"ignored"}"#)
            .unwrap();
    assert_eq!(header.algorithm, "RS256");
    assert_eq!(header.signature_type.as_deref(), Some("at+jwt"));
    assert_eq!(header.key_id.as_deref(), Some("k1"));
    assert!(header.content_type.is_none());
}

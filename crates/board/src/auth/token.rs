//! Bearer-token identity derivation
//!
//! The board issues three-segment signed tokens whose middle segment is a
//! base64-encoded JSON claims record. The client decodes that payload to
//! show who is signed in; it never verifies the signature — the server
//! remains the sole authorization authority.

use base64::prelude::*;
use log::warn;
use serde::Deserialize;
use thiserror::Error;

use crate::models::Identity;

/// Failure to decode a token payload into claims
#[derive(Debug, Error)]
pub enum TokenError {
    /// The token does not have a payload segment
    #[error("token has no payload segment")]
    MissingPayload,

    /// The payload segment is not valid base64
    #[error("payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The decoded payload is not a valid claims record
    #[error("payload is not a valid claims record: {0}")]
    Claims(#[from] serde_json::Error),
}

/// Claims carried in the token payload
#[derive(Debug, Clone, Deserialize)]
pub struct TokenClaims {
    /// Numeric user ID
    pub user_id: i64,
    /// Display name
    pub name: String,
    /// Expiry, seconds since the Unix epoch
    #[serde(default)]
    pub exp: Option<i64>,
}

impl TokenClaims {
    /// Whether the expiry claim has passed (false when absent)
    pub fn is_expired(&self) -> bool {
        match self.exp {
            Some(exp) => chrono::Utc::now().timestamp() >= exp,
            None => false,
        }
    }

    /// The identity these claims describe
    pub fn identity(&self) -> Identity {
        Identity::new(self.user_id, self.name.clone())
    }
}

/// Decode the payload segment of a token into typed claims
pub fn decode_claims(token: &str) -> Result<TokenClaims, TokenError> {
    let payload = token
        .split('.')
        .nth(1)
        .filter(|segment| !segment.is_empty())
        .ok_or(TokenError::MissingPayload)?;

    let bytes = BASE64_URL_SAFE_NO_PAD.decode(payload)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Derive the session identity from an optional raw token.
///
/// Absent or empty tokens yield the anonymous identity — that is a normal
/// signed-out session, not an error. A malformed token also yields the
/// anonymous identity and is logged; it must never take the UI down.
pub fn resolve_identity(token: Option<&str>) -> Identity {
    let Some(token) = token.filter(|t| !t.is_empty()) else {
        return Identity::anonymous();
    };

    match decode_claims(token) {
        Ok(claims) => {
            if claims.is_expired() {
                warn!("session token for {:?} is expired", claims.name);
            }
            claims.identity()
        }
        Err(err) => {
            warn!("could not derive identity from token: {err}");
            Identity::anonymous()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build an unsigned token with the given JSON claims payload
    fn make_token(claims: &str) -> String {
        let header = BASE64_URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = BASE64_URL_SAFE_NO_PAD.encode(claims.as_bytes());
        format!("{header}.{payload}.signature")
    }

    #[test]
    fn test_decode_valid_token() {
        let token = make_token(r#"{"user_id":5,"name":"alice","exp":32503680000}"#);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.user_id, 5);
        assert_eq!(claims.name, "alice");
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_resolve_identity_from_valid_token() {
        let token = make_token(r#"{"user_id":5,"name":"alice"}"#);
        let identity = resolve_identity(Some(&token));
        assert_eq!(identity, Identity::new(5, "alice"));
    }

    #[test]
    fn test_missing_token_is_anonymous() {
        assert_eq!(resolve_identity(None), Identity::anonymous());
        assert_eq!(resolve_identity(Some("")), Identity::anonymous());
    }

    #[test]
    fn test_malformed_tokens_are_anonymous_never_errors() {
        for bad in [
            "no-dots-at-all",
            "only.",
            "..",
            "a.!!!not-base64!!!.c",
            "a.bm90IGpzb24.c", // "not json"
        ] {
            assert_eq!(
                resolve_identity(Some(bad)),
                Identity::anonymous(),
                "token {bad:?} should resolve to anonymous"
            );
        }
    }

    #[test]
    fn test_decode_errors_are_typed() {
        assert!(matches!(
            decode_claims("no-dots"),
            Err(TokenError::MissingPayload)
        ));
        assert!(matches!(
            decode_claims("a.!!!.c"),
            Err(TokenError::Base64(_))
        ));
        let not_claims = make_token(r#"{"something":"else"}"#);
        assert!(matches!(
            decode_claims(&not_claims),
            Err(TokenError::Claims(_))
        ));
    }

    #[test]
    fn test_expired_claims_still_identify() {
        let token = make_token(r#"{"user_id":5,"name":"alice","exp":1000000}"#);
        let claims = decode_claims(&token).unwrap();
        assert!(claims.is_expired());
        // Display identity still derives; the server enforces real auth.
        assert_eq!(resolve_identity(Some(&token)), Identity::new(5, "alice"));
    }
}

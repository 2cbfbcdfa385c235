//! JWT signing and verification.
//!
//! Summify session tokens are HS256 JWTs carrying the username and admin flag.
//! `TokenCodec` owns the server secret and the validation settings; it is
//! built once at startup and shared process-wide.

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default token lifetime in hours.
pub const DEFAULT_TOKEN_EXPIRY_HOURS: i64 = 24;

/// Token verification errors.
///
/// These never cross the request pipeline: [`crate::authenticate`] collapses
/// all of them to "anonymous" and only downstream guards decide whether that
/// is acceptable.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token has expired")]
    Expired,

    #[error("token signature is invalid")]
    InvalidSignature,

    #[error("malformed token: {0}")]
    Malformed(String),

    #[error("token signing failed: {0}")]
    Signing(String),
}

/// Claims carried by a summify session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Username the token was issued for
    pub username: String,

    /// Admin flag, absent means false
    #[serde(rename = "isAdmin", default)]
    pub is_admin: bool,

    /// Issued at (Unix timestamp)
    pub iat: usize,

    /// Expiration time (Unix timestamp)
    pub exp: usize,
}

/// Signs and verifies session tokens against a fixed server secret.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiry_hours: i64,
}

impl TokenCodec {
    /// Create a codec with the default token lifetime.
    pub fn new(secret: &str) -> Self {
        Self::with_expiry(secret, DEFAULT_TOKEN_EXPIRY_HOURS)
    }

    /// Create a codec with an explicit token lifetime in hours.
    pub fn with_expiry(secret: &str, expiry_hours: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 60; // clock-skew tolerance in seconds

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            expiry_hours,
        }
    }

    /// Sign a new session token for a user.
    pub fn sign(&self, username: &str, is_admin: bool) -> Result<String, TokenError> {
        let now = chrono::Utc::now();
        let expires = now + chrono::Duration::hours(self.expiry_hours);
        let claims = Claims {
            username: username.to_string(),
            is_admin,
            iat: now.timestamp() as usize,
            exp: expires.timestamp() as usize,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Verify a token's signature and expiry and return its claims.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                    _ => TokenError::Malformed(e.to_string()),
                }
            })?;

        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn token_with_offset(secret: &str, exp_offset_secs: i64) -> String {
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            username: "testuser".to_string(),
            is_admin: false,
            iat: now as usize,
            exp: (now + exp_offset_secs) as usize,
        };
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn sign_then_verify_round_trips_claims() {
        let codec = TokenCodec::new("test-secret");
        let token = codec.sign("a", false).unwrap();
        let claims = codec.verify(&token).unwrap();
        assert_eq!(claims.username, "a");
        assert!(!claims.is_admin);
    }

    #[test]
    fn admin_flag_survives_the_round_trip() {
        let codec = TokenCodec::new("test-secret");
        let token = codec.sign("root", true).unwrap();
        assert!(codec.verify(&token).unwrap().is_admin);
    }

    #[test]
    fn expired_token_is_rejected() {
        let codec = TokenCodec::new("test-secret");
        // Expired beyond the 60s leeway
        let token = token_with_offset("test-secret", -3600);
        assert!(matches!(codec.verify(&token), Err(TokenError::Expired)));
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let codec = TokenCodec::new("right-secret");
        let token = token_with_offset("wrong-secret", 3600);
        assert!(matches!(
            codec.verify(&token),
            Err(TokenError::InvalidSignature)
        ));
    }

    #[test]
    fn garbage_token_is_malformed_not_a_panic() {
        let codec = TokenCodec::new("test-secret");
        assert!(matches!(
            codec.verify("garbage"),
            Err(TokenError::Malformed(_))
        ));
        assert!(codec.verify("").is_err());
    }

    #[test]
    fn missing_is_admin_claim_defaults_to_false() {
        // Tokens minted by older clients may omit isAdmin entirely.
        let now = chrono::Utc::now().timestamp() as usize;
        let payload = serde_json::json!({
            "username": "legacy",
            "iat": now,
            "exp": now + 3600,
        });
        let token = encode(
            &Header::new(Algorithm::HS256),
            &payload,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        let codec = TokenCodec::new("test-secret");
        let claims = codec.verify(&token).unwrap();
        assert!(!claims.is_admin);
    }
}

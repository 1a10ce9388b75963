//! HS256 bearer tokens for an authenticated admin.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use crate::claims::{AdminClaims, TokenValidationError, validate_claims};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("token could not be encoded: {0}")]
    Encode(String),

    #[error("token could not be decoded: {0}")]
    Decode(String),

    #[error(transparent)]
    Claims(#[from] TokenValidationError),
}

/// Verifies a bearer token and returns its claims.
pub trait TokenValidator: Send + Sync {
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<AdminClaims, TokenError>;
}

/// A freshly signed token plus the claims it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub claims: AdminClaims,
}

/// Issues and validates HS256 tokens with a shared secret.
#[derive(Clone)]
pub struct Hs256Tokens {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl Hs256Tokens {
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn issue(&self, subject: &str, now: DateTime<Utc>) -> Result<IssuedToken, TokenError> {
        let claims = AdminClaims::new(subject, now, self.ttl);
        let token = jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| TokenError::Encode(e.to_string()))?;
        Ok(IssuedToken { token, claims })
    }
}

impl TokenValidator for Hs256Tokens {
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<AdminClaims, TokenError> {
        // Expiry is checked against the caller's clock below.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;

        let data = jsonwebtoken::decode::<AdminClaims>(token, &self.decoding, &validation)
            .map_err(|e| TokenError::Decode(e.to_string()))?;
        validate_claims(&data.claims, now)?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 20, 10, 0, 0).unwrap()
    }

    fn tokens() -> Hs256Tokens {
        Hs256Tokens::new(b"test-secret", Duration::minutes(60))
    }

    #[test]
    fn issued_token_validates() {
        let issued = tokens().issue("admin", now()).unwrap();
        let claims = tokens().validate(&issued.token, now() + Duration::minutes(1)).unwrap();
        assert_eq!(claims, issued.claims);
        assert_eq!(claims.sub, "admin");
    }

    #[test]
    fn expired_token_is_rejected() {
        let issued = tokens().issue("admin", now()).unwrap();
        let err = tokens()
            .validate(&issued.token, now() + Duration::minutes(61))
            .unwrap_err();
        assert_eq!(err, TokenError::Claims(TokenValidationError::Expired));
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let issued = tokens().issue("admin", now()).unwrap();
        let other = Hs256Tokens::new(b"other-secret", Duration::minutes(60));
        assert!(matches!(
            other.validate(&issued.token, now()),
            Err(TokenError::Decode(_))
        ));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(matches!(
            tokens().validate("not-a-token", now()),
            Err(TokenError::Decode(_))
        ));
    }
}

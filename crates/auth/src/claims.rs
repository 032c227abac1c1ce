use jsonwebtoken::{Algorithm, DecodingKey, Validation, errors::ErrorKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{PrincipalId, Role};

/// JWT claims model.
///
/// The minimal claim set expected once a token has been issued by whatever
/// identity provider is in use: a subject, its role groups, and the standard
/// numeric `iat`/`exp` timestamps (seconds since the epoch).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Subject / principal identifier.
    pub sub: PrincipalId,

    /// Role groups granted to the subject.
    pub roles: Vec<Role>,

    /// Issued-at timestamp.
    pub iat: i64,

    /// Expiration timestamp.
    pub exp: i64,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("token has expired")]
    Expired,

    #[error("invalid token")]
    Invalid,
}

/// Verifies a presented bearer token and produces its claims.
pub trait JwtValidator: Send + Sync {
    fn validate(&self, token: &str) -> Result<JwtClaims, TokenError>;
}

/// HMAC-SHA256 validation against a shared secret.
pub struct Hs256JwtValidator {
    key: DecodingKey,
    validation: Validation,
}

impl Hs256JwtValidator {
    pub fn new(secret: Vec<u8>) -> Self {
        Self {
            key: DecodingKey::from_secret(&secret),
            validation: Validation::new(Algorithm::HS256),
        }
    }
}

impl JwtValidator for Hs256JwtValidator {
    fn validate(&self, token: &str) -> Result<JwtClaims, TokenError> {
        jsonwebtoken::decode::<JwtClaims>(token, &self.key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use jsonwebtoken::{EncodingKey, Header};

    fn mint(secret: &str, offset_minutes: i64) -> String {
        let now = Utc::now();
        let claims = JwtClaims {
            sub: PrincipalId::new(),
            roles: vec![Role::Admin],
            iat: (now - Duration::minutes(60)).timestamp(),
            exp: (now + Duration::minutes(offset_minutes)).timestamp(),
        };
        jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn accepts_a_valid_token() {
        let validator = Hs256JwtValidator::new(b"secret".to_vec());
        let claims = validator.validate(&mint("secret", 10)).unwrap();
        assert_eq!(claims.roles, vec![Role::Admin]);
    }

    #[test]
    fn rejects_a_wrong_secret() {
        let validator = Hs256JwtValidator::new(b"secret".to_vec());
        assert_eq!(
            validator.validate(&mint("other", 10)).unwrap_err(),
            TokenError::Invalid
        );
    }

    #[test]
    fn rejects_an_expired_token() {
        let validator = Hs256JwtValidator::new(b"secret".to_vec());
        // Well past the default leeway.
        assert_eq!(
            validator.validate(&mint("secret", -10)).unwrap_err(),
            TokenError::Expired
        );
    }

    #[test]
    fn rejects_garbage() {
        let validator = Hs256JwtValidator::new(b"secret".to_vec());
        assert_eq!(
            validator.validate("not-a-token").unwrap_err(),
            TokenError::Invalid
        );
    }
}

//! HS256 JSON Web Tokens for the auth gateway.
//!
//! Two token types share one secret: short-lived access tokens presented as bearer
//! tokens on every request, and longer-lived refresh tokens that can only be exchanged
//! for a new access token. The `token_type` claim keeps them apart.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::server::{
    error::{auth::AuthError, internal::InternalError},
    model::user::User,
};

const JTI_LENGTH: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

impl TokenType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Access => "access",
            Self::Refresh => "refresh",
        }
    }
}

/// Claims carried by both token types.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID.
    pub sub: String,
    pub username: String,
    pub token_type: TokenType,
    /// Unique token ID; two tokens issued in the same second still differ.
    pub jti: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn user_id(&self) -> Result<i32, AuthError> {
        self.sub
            .parse()
            .map_err(|_| AuthError::InvalidToken(format!("malformed subject '{}'", self.sub)))
    }
}

/// Signs and verifies tokens.
///
/// Cheap to clone; keys are derived once from the configured secret.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl JwtService {
    pub fn new(secret: &str, access_ttl: Duration, refresh_ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_ttl,
            refresh_ttl,
        }
    }

    /// Issues a signed token of the given type for a user.
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded JWT
    /// - `Err(InternalError::TokenSigning)` - Signing failed
    pub fn issue(&self, user: &User, token_type: TokenType) -> Result<String, InternalError> {
        let now = Utc::now();
        let ttl = match token_type {
            TokenType::Access => self.access_ttl,
            TokenType::Refresh => self.refresh_ttl,
        };

        let claims = Claims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            token_type,
            jti: generate_jti(),
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|source| {
            InternalError::TokenSigning {
                token_type: token_type.as_str(),
                source,
            }
        })
    }

    /// Verifies signature and expiry and checks the token is of the expected type.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Valid token of type `expected`
    /// - `Err(AuthError::InvalidToken)` - Bad signature, expired, malformed or wrong type
    pub fn verify(&self, token: &str, expected: TokenType) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?
            .claims;

        if claims.token_type != expected {
            return Err(AuthError::InvalidToken(format!(
                "expected {} token, got {}",
                expected.as_str(),
                claims.token_type.as_str()
            )));
        }

        Ok(claims)
    }
}

fn generate_jti() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                             abcdefghijklmnopqrstuvwxyz\
                             0123456789";

    let mut rng = rand::rng();

    (0..JTI_LENGTH)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-that-is-at-least-32-bytes-long";

    fn service() -> JwtService {
        JwtService::new(SECRET, Duration::minutes(5), Duration::days(1))
    }

    fn user() -> User {
        User {
            id: 7,
            username: "frontdesk".to_string(),
            is_admin: true,
        }
    }

    #[test]
    fn access_token_round_trips_claims() {
        let jwt = service();

        let token = jwt.issue(&user(), TokenType::Access).unwrap();
        let claims = jwt.verify(&token, TokenType::Access).unwrap();

        assert_eq!(claims.user_id().unwrap(), 7);
        assert_eq!(claims.username, "frontdesk");
        assert_eq!(claims.token_type, TokenType::Access);
    }

    #[test]
    fn tokens_issued_together_are_distinct() {
        let jwt = service();

        let first = jwt.issue(&user(), TokenType::Access).unwrap();
        let second = jwt.issue(&user(), TokenType::Access).unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn rejects_access_token_as_refresh_token() {
        let jwt = service();
        let token = jwt.issue(&user(), TokenType::Access).unwrap();

        assert!(matches!(
            jwt.verify(&token, TokenType::Refresh),
            Err(AuthError::InvalidToken(_))
        ));
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let other = JwtService::new(
            "another-secret-that-is-at-least-32-bytes",
            Duration::minutes(5),
            Duration::days(1),
        );
        let token = other.issue(&user(), TokenType::Access).unwrap();

        assert!(service().verify(&token, TokenType::Access).is_err());
    }

    #[test]
    fn rejects_expired_token() {
        let jwt = JwtService::new(SECRET, Duration::minutes(-5), Duration::days(1));
        let token = jwt.issue(&user(), TokenType::Access).unwrap();

        assert!(jwt.verify(&token, TokenType::Access).is_err());
    }
}

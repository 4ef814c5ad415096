//! Username/password login and token refresh.

pub mod jwt;

use sea_orm::DatabaseConnection;

use crate::{
    model::auth::TokenPairDto,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        service::auth::jwt::{JwtService, TokenType},
        util::password::verify_password,
    },
};

/// Access and refresh token issued on login.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

impl TokenPair {
    pub fn into_dto(self) -> TokenPairDto {
        TokenPairDto {
            access: self.access,
            refresh: self.refresh,
        }
    }
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtService) -> Self {
        Self { db, jwt }
    }

    /// Verifies credentials and issues a token pair.
    ///
    /// # Returns
    /// - `Ok(TokenPair)` - Credentials valid
    /// - `Err(AuthError::UnknownUsername)` - No account with that username (404)
    /// - `Err(AuthError::InvalidCredentials)` - Password does not match (401)
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenPair, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some((user, hash)) = user_repo.find_credentials(username).await? else {
            return Err(AuthError::UnknownUsername(username.to_string()).into());
        };

        if !verify_password(password, &hash) {
            return Err(AuthError::InvalidCredentials(username.to_string()).into());
        }

        tracing::info!("User {} logged in", user.username);

        Ok(TokenPair {
            access: self.jwt.issue(&user, TokenType::Access)?,
            refresh: self.jwt.issue(&user, TokenType::Refresh)?,
        })
    }

    /// Exchanges a refresh token for a new access token.
    ///
    /// No bearer token is needed; possession of a valid refresh token is the credential.
    ///
    /// # Returns
    /// - `Ok(String)` - New access token
    /// - `Err(AuthError::InvalidToken)` - Token invalid, expired or not a refresh token
    /// - `Err(AuthError::UserNotInDatabase)` - Token subject was deleted
    pub async fn refresh(&self, refresh_token: &str) -> Result<String, AppError> {
        let claims = self.jwt.verify(refresh_token, TokenType::Refresh)?;
        let user_id = claims.user_id()?;

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        Ok(self.jwt.issue(&user, TokenType::Access)?)
    }
}

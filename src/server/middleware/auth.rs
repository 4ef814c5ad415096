use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::auth::jwt::{JwtService, TokenType},
};

pub enum Permission {
    Admin,
}

/// API resources guarded by the permission policy.
///
/// Login, token refresh, the device mode endpoints and the OpenAPI document are open
/// and never reach the guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Members,
    Memberships,
    Payments,
    Renewal,
    Ledger,
    Attendance,
    AuthProbe,
}

impl Resource {
    /// Permissions a caller needs on top of a valid access token.
    pub fn permissions(self) -> &'static [Permission] {
        match self {
            Self::Members
            | Self::Memberships
            | Self::Payments
            | Self::Renewal
            | Self::Ledger
            | Self::Attendance => &[Permission::Admin],
            Self::AuthProbe => &[],
        }
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtService, headers: &'a HeaderMap) -> Self {
        Self { db, jwt, headers }
    }

    /// Authenticates the bearer token and checks the resource's permissions.
    pub async fn authorize(&self, resource: Resource) -> Result<User, AppError> {
        self.require(resource.permissions()).await
    }

    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let token = bearer_token(self.headers)?;
        let claims = self.jwt.verify(token, TokenType::Access)?;
        let user_id = claims.user_id()?;

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted to access an admin resource without admin permissions"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?
        .to_str()
        .map_err(|_| AuthError::InvalidToken("authorization header is not ASCII".to_string()))?;

    value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(AuthError::MissingToken)
}

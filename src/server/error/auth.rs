use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer` header was sent with the request.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Request has no bearer token")]
    MissingToken,

    /// The bearer token failed signature, expiry or type validation.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Token subject no longer exists in the user table.
    ///
    /// Results in a 401 Unauthorized response as the token cannot be honoured.
    #[error("User {0} from token not found in database")]
    UserNotInDatabase(i32),

    /// Login attempted with a username that has no account.
    ///
    /// Results in a 404 Not Found response.
    #[error("Login attempted for unknown user '{0}'")]
    UnknownUsername(String),

    /// Login attempted with the wrong password.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid password for user '{0}'")]
    InvalidCredentials(String),

    /// Authenticated user lacks the permission required by the resource.
    ///
    /// Results in a 403 Forbidden response.
    ///
    /// # Fields
    /// - User ID of the caller
    /// - Description of the denied access for server-side logging
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Client bodies stay generic; the detailed `Display` text goes to the debug log.
/// Missing or bad tokens and deleted token subjects are 401, a wrong password is 401
/// with `Invalid credentials.`, an unknown username is 404 and a non-admin is 403.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken | Self::InvalidToken(_) | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                "Authentication credentials were not provided or are invalid.",
            ),
            Self::InvalidCredentials(_) => (StatusCode::UNAUTHORIZED, "Invalid credentials."),
            Self::UnknownUsername(_) => (StatusCode::NOT_FOUND, "User not found."),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You do not have permission to perform this action.",
            ),
        };

        (status, Json(ErrorDto::new(message))).into_response()
    }
}

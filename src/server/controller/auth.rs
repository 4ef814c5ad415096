use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::{AccessTokenDto, LoginDto, RefreshDto, TokenPairDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Resource},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in with username and password.
///
/// Verifies the credentials of a staff account and issues an access/refresh token
/// pair. Open to unauthenticated callers.
///
/// # Returns
/// - `200 OK` - Access and refresh tokens
/// - `400 Bad Request` - Username or password missing
/// - `401 Unauthorized` - Wrong password
/// - `404 Not Found` - No account with that username
#[utoipa::path(
    post,
    path = "/api/token",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Credentials accepted", body = TokenPairDto),
        (status = 400, description = "Username or password missing", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let service = AuthService::new(&state.db, &state.jwt);

    let tokens = service
        .login(
            &payload.username.unwrap_or_default(),
            &payload.password.unwrap_or_default(),
        )
        .await?;

    Ok((StatusCode::OK, Json(tokens.into_dto())))
}

/// Exchange a refresh token for a new access token.
///
/// Open to unauthenticated callers; the refresh token itself is the credential.
///
/// # Returns
/// - `200 OK` - New access token
/// - `400 Bad Request` - Refresh token missing
/// - `401 Unauthorized` - Refresh token invalid, expired or of the wrong type
#[utoipa::path(
    post,
    path = "/api/token/refresh",
    tag = AUTH_TAG,
    request_body = RefreshDto,
    responses(
        (status = 200, description = "New access token", body = AccessTokenDto),
        (status = 400, description = "Refresh token missing", body = ErrorDto),
        (status = 401, description = "Refresh token rejected", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn refresh(
    State(state): State<AppState>,
    payload: Result<Json<RefreshDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let service = AuthService::new(&state.db, &state.jwt);

    let access = service
        .refresh(&payload.refresh.unwrap_or_default())
        .await?;

    Ok((StatusCode::OK, Json(AccessTokenDto { access })))
}

/// Probe whether the caller's access token is accepted.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - Token accepted
/// - `401 Unauthorized` - Token missing or invalid
#[utoipa::path(
    get,
    path = "/api/auth-check",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Caller is authenticated", body = MessageDto),
        (status = 401, description = "Caller is not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn auth_check(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(Resource::AuthProbe)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "You are authenticated!".to_string(),
        }),
    ))
}

//! Application errors and their HTTP mapping.
//!
//! Repositories return `DbErr`; services and handlers return `AppError`, which every
//! lower-level error converts into with `?`. `AppError` implements `IntoResponse`, so a
//! handler can return it directly and the client receives an `ErrorDto` body with the
//! matching status code.

pub mod auth;
pub mod config;
pub mod internal;

use std::collections::BTreeMap;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use validator::{ValidationError, ValidationErrors};

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, internal::InternalError},
};

/// Every failure a request or background job can end in.
#[derive(Error, Debug)]
pub enum AppError {
    /// Environment configuration is missing or unusable. Only raised at startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Login, token or permission failure. `AuthError` picks its own status code.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// SeaORM query or transaction failure (500).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// The membership expiry job could not be registered or started (500).
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Token signing, password hashing or receipt rendering failed (500).
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// One or more request fields are invalid (400 with a `fields` map).
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// Body is not JSON or has the wrong shape (400).
    #[error(transparent)]
    JsonBody(#[from] JsonRejection),

    /// Query string does not deserialize, e.g. `page=abc` (400).
    #[error(transparent)]
    QueryString(#[from] QueryRejection),

    /// Path segment does not parse, e.g. a non-numeric ID (400).
    #[error(transparent)]
    PathParam(#[from] PathRejection),

    /// No such member, plan, payment, ledger entry or page (404).
    #[error("{0}")]
    NotFound(String),

    /// Request is well-formed but cannot be honoured, e.g. an unknown `query` (400).
    #[error("{0}")]
    BadRequest(String),

    /// Unexpected condition described for the server log only (500).
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Builds a validation error for a single field.
    ///
    /// Used for checks the `validator` derive cannot express, such as an unknown plan
    /// label or an unrecognised enum value.
    ///
    /// # Arguments
    /// - `field` - Name of the offending request field
    /// - `message` - Human-readable message reported for the field
    ///
    /// # Returns
    /// - `AppError::Validation` holding exactly one field error
    pub fn field(field: &'static str, message: impl Into<String>) -> Self {
        let message: String = message.into();
        let mut errors = ValidationErrors::new();
        errors.add(
            field,
            ValidationError::new("invalid").with_message(message.into()),
        );
        Self::Validation(errors)
    }
}

/// Flattens `validator` errors into `field -> [messages]`.
///
/// Fields without a custom message report their validation code instead.
fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let messages = errors
                .iter()
                .map(|error| {
                    error
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| format!("Invalid value ({}).", error.code))
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

fn bad_request(message: String) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorDto::new(message))).into_response()
}

/// Status codes: 400 for `BadRequest`, `Validation` and the extractor rejections, 404 for `NotFound`,
/// whatever `AuthError` chooses for `AuthErr`, 500 for everything else. 500 bodies never
/// carry the underlying message.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, Json(ErrorDto::new(msg))).into_response(),
            Self::BadRequest(msg) => bad_request(msg),
            Self::JsonBody(rejection) => bad_request(rejection.body_text()),
            Self::QueryString(rejection) => bad_request(rejection.body_text()),
            Self::PathParam(rejection) => bad_request(rejection.body_text()),
            Self::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "Validation failed".to_string(),
                    fields: Some(field_messages(&errors)),
                }),
            )
                .into_response(),
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto::new("Internal server error")),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Logs the wrapped error and answers with a bare 500.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error")),
        )
            .into_response()
    }
}

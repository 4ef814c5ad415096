use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{HeaderMap, StatusCode, Uri},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use validator::Validate;

use crate::{
    model::{
        api::{ErrorDto, PageDto},
        payment::{AcceptPaymentDto, PaymentDto, RenewalDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Resource},
        model::{
            page::PageRequest,
            payment::{Payment, RenewMembershipParams},
        },
        service::payment::PaymentService,
        state::AppState,
        util::pagination::into_page_dto,
    },
};

/// Tag for grouping renewal and payment endpoints in OpenAPI documentation
pub static PAYMENT_TAG: &str = "payment";

#[derive(Deserialize)]
pub struct PaymentListParams {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
    pub member_id: Option<i32>,
}

/// Renew a member onto a plan and record the payment.
///
/// The plan is looked up by label. The member's validity window starts today (UTC)
/// and lasts the plan's `duration_days`; earlier payments of the member are marked
/// inactive. Member update and payment insert happen in one transaction.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - Updated member and the recorded payment
/// - `400 Bad Request` - Missing fields or unknown plan; nothing is written
/// - `404 Not Found` - Member not found; nothing is written
#[utoipa::path(
    post,
    path = "/api/accept-payment",
    tag = PAYMENT_TAG,
    request_body = AcceptPaymentDto,
    responses(
        (status = 200, description = "Membership renewed", body = RenewalDto),
        (status = 400, description = "Invalid renewal data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn accept_payment(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<AcceptPaymentDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(Resource::Renewal)
        .await?;

    let Json(payload) = payload?;
    payload.validate()?;

    let (Some(member_id), Some(plan)) = (payload.member_id, payload.plan) else {
        return Err(AppError::BadRequest(
            "member_id and plan are required".to_string(),
        ));
    };

    let renewal = PaymentService::new(&state.db)
        .renew(RenewMembershipParams {
            member_id,
            plan,
            renewed_on: Utc::now().date_naive(),
        })
        .await?;

    Ok((StatusCode::OK, Json(renewal.into_dto())))
}

/// List recorded payments, newest first.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/payments",
    tag = PAYMENT_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("page_size" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)"),
        ("member_id" = Option<i32>, Query, description = "Only payments of this member")
    ),
    responses(
        (status = 200, description = "Page of payments", body = PageDto<PaymentDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Invalid page", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_payments(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    query: Result<Query<PaymentListParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(Resource::Payments)
        .await?;

    let Query(params) = query?;

    let page = PageRequest::new(params.page, params.page_size)?;
    let payments = PaymentService::new(&state.db)
        .get_paginated(params.member_id, page)
        .await?;

    let dto = into_page_dto(payments, &state.public_base_url, &uri, Payment::into_dto);

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/api/payments/{id}",
    tag = PAYMENT_TAG,
    params(("id" = i32, Path, description = "Payment ID")),
    responses(
        (status = 200, description = "Payment details", body = PaymentDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Payment not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_payment_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(Resource::Payments)
        .await?;

    let Path(id) = path?;

    let payment = PaymentService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(payment.into_dto())))
}

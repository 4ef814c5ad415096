use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{HeaderMap, StatusCode, Uri},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use validator::Validate;

use crate::{
    model::{
        api::{ErrorDto, PageDto},
        membership::{MembershipPlanDto, MembershipPlanInputDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Resource},
        model::{
            membership::{MembershipPlan, MembershipPlanParams},
            page::PageRequest,
        },
        service::membership::MembershipPlanService,
        state::AppState,
        util::pagination::into_page_dto,
    },
};

/// Tag for grouping membership plan endpoints in OpenAPI documentation
pub static MEMBERSHIP_TAG: &str = "membership";

#[derive(Deserialize)]
pub struct MembershipListParams {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
    pub global_search: Option<String>,
}

/// List membership plans.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - Page of plans in creation order
/// - `401 Unauthorized` / `403 Forbidden` - Caller not an authenticated admin
/// - `404 Not Found` - Page out of range
#[utoipa::path(
    get,
    path = "/api/memberships",
    tag = MEMBERSHIP_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("page_size" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)"),
        ("global_search" = Option<String>, Query, description = "Case-insensitive search over label, class and description")
    ),
    responses(
        (status = 200, description = "Page of membership plans", body = PageDto<MembershipPlanDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Invalid page", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_memberships(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    query: Result<Query<MembershipListParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(Resource::Memberships)
        .await?;

    let Query(params) = query?;

    let page = PageRequest::new(params.page, params.page_size)?;
    let plans = MembershipPlanService::new(&state.db)
        .get_paginated(params.global_search.as_deref(), page)
        .await?;

    let dto = into_page_dto(plans, &state.public_base_url, &uri, MembershipPlan::into_dto);

    Ok((StatusCode::OK, Json(dto)))
}

/// Create a membership plan.
///
/// Labels are unique; renewals look plans up by label.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - Created plan
/// - `400 Bad Request` - Invalid fields or label already in use
#[utoipa::path(
    post,
    path = "/api/memberships",
    tag = MEMBERSHIP_TAG,
    request_body = MembershipPlanInputDto,
    responses(
        (status = 201, description = "Plan created", body = MembershipPlanDto),
        (status = 400, description = "Invalid plan data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_membership(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<MembershipPlanInputDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(Resource::Memberships)
        .await?;

    let Json(payload) = payload?;
    payload.validate()?;

    let plan = MembershipPlanService::new(&state.db)
        .create(MembershipPlanParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(plan.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/memberships/{id}",
    tag = MEMBERSHIP_TAG,
    params(("id" = i32, Path, description = "Membership plan ID")),
    responses(
        (status = 200, description = "Plan details", body = MembershipPlanDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Plan not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_membership_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(Resource::Memberships)
        .await?;

    let Path(id) = path?;

    let plan = MembershipPlanService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(plan.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/memberships/{id}",
    tag = MEMBERSHIP_TAG,
    params(("id" = i32, Path, description = "Membership plan ID")),
    request_body = MembershipPlanInputDto,
    responses(
        (status = 200, description = "Plan updated", body = MembershipPlanDto),
        (status = 400, description = "Invalid plan data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Plan not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_membership(
    State(state): State<AppState>,
    headers: HeaderMap,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<MembershipPlanInputDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(Resource::Memberships)
        .await?;

    let Path(id) = path?;

    let Json(payload) = payload?;
    payload.validate()?;

    let plan = MembershipPlanService::new(&state.db)
        .update(id, MembershipPlanParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(plan.into_dto())))
}

/// Delete a membership plan.
///
/// Plans referenced by recorded payments cannot be deleted.
#[utoipa::path(
    delete,
    path = "/api/memberships/{id}",
    tag = MEMBERSHIP_TAG,
    params(("id" = i32, Path, description = "Membership plan ID")),
    responses(
        (status = 204, description = "Plan deleted"),
        (status = 400, description = "Plan has payments", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Plan not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_membership(
    State(state): State<AppState>,
    headers: HeaderMap,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(Resource::Memberships)
        .await?;

    let Path(id) = path?;

    MembershipPlanService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

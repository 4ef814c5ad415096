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

use crate::{
    model::{
        api::{ErrorDto, PageDto},
        attendance::{AttendanceDto, CreateAttendanceDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Resource},
        model::{
            attendance::{AttendanceFilter, AttendanceRecord, CreateAttendanceParams},
            page::PageRequest,
        },
        service::attendance::AttendanceService,
        state::AppState,
        util::pagination::into_page_dto,
    },
};

/// Tag for grouping attendance endpoints in OpenAPI documentation
pub static ATTENDANCE_TAG: &str = "attendance";

#[derive(Deserialize)]
pub struct AttendanceListParams {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
    pub member_id: Option<i32>,
    pub global_search: Option<String>,
}

/// List check-in/check-out punches, latest first.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/inout",
    tag = ATTENDANCE_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("page_size" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)"),
        ("member_id" = Option<i32>, Query, description = "Only punches of this member"),
        ("global_search" = Option<String>, Query, description = "Case-insensitive search over direction and role name")
    ),
    responses(
        (status = 200, description = "Page of attendance records", body = PageDto<AttendanceDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Invalid page", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_attendance(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    query: Result<Query<AttendanceListParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(Resource::Attendance)
        .await?;

    let Query(params) = query?;

    let page = PageRequest::new(params.page, params.page_size)?;
    let filter = AttendanceFilter {
        member_id: params.member_id,
        search: params.global_search,
    };
    let records = AttendanceService::new(&state.db)
        .get_paginated(&filter, page)
        .await?;

    let dto = into_page_dto(
        records,
        &state.public_base_url,
        &uri,
        AttendanceRecord::into_dto,
    );

    Ok((StatusCode::OK, Json(dto)))
}

/// Record a punch.
///
/// `recorded_at` defaults to the current time.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - Recorded punch
/// - `400 Bad Request` - Unknown member or direction other than `in`/`out`
#[utoipa::path(
    post,
    path = "/api/inout",
    tag = ATTENDANCE_TAG,
    request_body = CreateAttendanceDto,
    responses(
        (status = 201, description = "Punch recorded", body = AttendanceDto),
        (status = 400, description = "Invalid attendance data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_attendance(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateAttendanceDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(Resource::Attendance)
        .await?;

    let Json(payload) = payload?;
    let params = CreateAttendanceParams::from_dto(payload, Utc::now())?;

    let record = AttendanceService::new(&state.db).record(params).await?;

    Ok((StatusCode::CREATED, Json(record.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/inout/{id}",
    tag = ATTENDANCE_TAG,
    params(("id" = i32, Path, description = "Attendance record ID")),
    responses(
        (status = 200, description = "Attendance record", body = AttendanceDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Record not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_attendance_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(Resource::Attendance)
        .await?;

    let Path(id) = path?;

    let record = AttendanceService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(record.into_dto())))
}

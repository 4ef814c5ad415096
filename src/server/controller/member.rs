use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use validator::Validate;

use crate::{
    model::{
        api::{ErrorDto, PageDto},
        member::{
            ActiveMembersDto, LeftMembersDto, MemberDto, MemberInputDto, MembershipCountsDto,
            TotalMembersDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Resource},
        model::{
            member::{Member, MemberParams, MemberQuery, MembershipCount},
            page::PageRequest,
        },
        service::member::MemberService,
        state::AppState,
        util::pagination::into_page_dto,
    },
};

/// Tag for grouping member endpoints in OpenAPI documentation
pub static MEMBER_TAG: &str = "member";

#[derive(Deserialize)]
pub struct MemberListParams {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
    pub global_search: Option<String>,
    pub query: Option<String>,
}

/// List members, or return one of the member counters.
///
/// Without `query` this returns a page of members (role `member` only), newest first,
/// optionally narrowed by `global_search`. With `query` it returns a counter instead:
/// - `total-members` → `{total_members}`
/// - `active-members` → `{active_members}`
/// - `left-members` → `{left_members}`
/// - `membership-counts` → `{membership_counts: [...]}`
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - Page of members or the requested counter
/// - `400 Bad Request` - Unrecognised `query`
/// - `401 Unauthorized` / `403 Forbidden` - Caller not an authenticated admin
/// - `404 Not Found` - Page out of range
#[utoipa::path(
    get,
    path = "/api/members",
    tag = MEMBER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("page_size" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)"),
        ("global_search" = Option<String>, Query, description = "Case-insensitive search over name, email, mobile and address"),
        ("query" = Option<String>, Query, description = "Counter to return instead of a page")
    ),
    responses(
        (status = 200, description = "Page of members", body = PageDto<MemberDto>),
        (status = 400, description = "Unrecognised query", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Invalid page", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_members(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    query: Result<Query<MemberListParams>, QueryRejection>,
) -> Result<Response, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(Resource::Members)
        .await?;

    let Query(params) = query?;
    let service = MemberService::new(&state.db);

    if let Some(query) = params.query.as_deref() {
        let response = match query.parse::<MemberQuery>()? {
            MemberQuery::TotalMembers => Json(TotalMembersDto {
                total_members: service.total_members().await?,
            })
            .into_response(),
            MemberQuery::ActiveMembers => Json(ActiveMembersDto {
                active_members: service.active_members().await?,
            })
            .into_response(),
            MemberQuery::LeftMembers => Json(LeftMembersDto {
                left_members: service.left_members().await?,
            })
            .into_response(),
            MemberQuery::MembershipCounts => Json(MembershipCountsDto {
                membership_counts: service
                    .membership_counts()
                    .await?
                    .into_iter()
                    .map(MembershipCount::into_dto)
                    .collect(),
            })
            .into_response(),
        };

        return Ok(response);
    }

    let page = PageRequest::new(params.page, params.page_size)?;
    let members = service
        .get_paginated(params.global_search.as_deref(), page)
        .await?;

    let dto = into_page_dto(members, &state.public_base_url, &uri, Member::into_dto);

    Ok((StatusCode::OK, Json(dto)).into_response())
}

/// Register a member.
///
/// `role_name` defaults to `member`; new members start in status `expired` until
/// their first renewal unless a status is given.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - Created member
/// - `400 Bad Request` - Invalid fields, unknown plan or mobile number already in use
#[utoipa::path(
    post,
    path = "/api/members",
    tag = MEMBER_TAG,
    request_body = MemberInputDto,
    responses(
        (status = 201, description = "Member created", body = MemberDto),
        (status = 400, description = "Invalid member data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_member(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<MemberInputDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(Resource::Members)
        .await?;

    let Json(payload) = payload?;
    payload.validate()?;

    let service = MemberService::new(&state.db);

    let member = service.create(MemberParams::from_dto(payload)?).await?;

    Ok((StatusCode::CREATED, Json(member.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/members/{id}",
    tag = MEMBER_TAG,
    params(("id" = i32, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Member details", body = MemberDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_member_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(Resource::Members)
        .await?;

    let Path(id) = path?;

    let member = MemberService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(member.into_dto())))
}

/// Update a member's details.
///
/// The validity window is only changed by renewals. Omitting `membership_status`
/// keeps the stored status.
#[utoipa::path(
    put,
    path = "/api/members/{id}",
    tag = MEMBER_TAG,
    params(("id" = i32, Path, description = "Member ID")),
    request_body = MemberInputDto,
    responses(
        (status = 200, description = "Member updated", body = MemberDto),
        (status = 400, description = "Invalid member data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_member(
    State(state): State<AppState>,
    headers: HeaderMap,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<MemberInputDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(Resource::Members)
        .await?;

    let Path(id) = path?;

    let Json(payload) = payload?;
    payload.validate()?;

    let member = MemberService::new(&state.db)
        .update(id, MemberParams::from_dto(payload)?)
        .await?;

    Ok((StatusCode::OK, Json(member.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/members/{id}",
    tag = MEMBER_TAG,
    params(("id" = i32, Path, description = "Member ID")),
    responses(
        (status = 204, description = "Member deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_member(
    State(state): State<AppState>,
    headers: HeaderMap,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(Resource::Members)
        .await?;

    let Path(id) = path?;

    MemberService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

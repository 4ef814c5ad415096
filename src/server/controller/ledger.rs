use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use validator::Validate;

use crate::{
    model::{
        api::{ErrorDto, PageDto},
        ledger::{
            IncomeExpenseDto, LedgerEntryDto, LedgerEntryInputDto, TotalExpensesDto,
            TotalRevenueDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Resource},
        model::{
            ledger::{
                EntryType, LedgerEntry, LedgerEntryParams, LedgerFilter, LedgerQuery,
                MonthlyReportRow,
            },
            page::PageRequest,
        },
        service::ledger::LedgerService,
        state::AppState,
        util::pagination::into_page_dto,
    },
};

/// Tag for grouping ledger endpoints in OpenAPI documentation
pub static LEDGER_TAG: &str = "income-expense";

#[derive(Deserialize)]
pub struct LedgerListParams {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
    pub global_search: Option<String>,
    pub query: Option<String>,
    pub income_id: Option<i32>,
}

#[derive(Deserialize)]
pub struct DeleteEntryParams {
    pub reason: Option<String>,
}

/// List ledger entries, or return one of the ledger reports.
///
/// Without `query` this returns a page of live entries, latest entry date first. With
/// `query`:
/// - `invoice-type-income` / `invoice-type-expense` → page of entries of that type
/// - `total-revenue` → `{total_revenue}`
/// - `total-expenses` → `{total_expenses}`
/// - `income-expense` → `{total_revenue, total_expenses}`
/// - `monthly-income-expense-profit` → page of `{year, month, total_revenue,
///   total_expenses, profit}`, latest month first, months without entries reported as 0
/// - `download-receipt` with `income_id` → PDF receipt attachment
///
/// Soft-deleted entries are excluded from every view.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - Page, totals or PDF bytes
/// - `400 Bad Request` - Unrecognised `query`, or `income_id` missing for a receipt
/// - `401 Unauthorized` / `403 Forbidden` - Caller not an authenticated admin
/// - `404 Not Found` - Page out of range, or no income entry with that ID
#[utoipa::path(
    get,
    path = "/api/income-expense",
    tag = LEDGER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("page_size" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)"),
        ("global_search" = Option<String>, Query, description = "Case-insensitive search over type, label, party and payment status"),
        ("query" = Option<String>, Query, description = "Report to return instead of the plain listing"),
        ("income_id" = Option<i32>, Query, description = "Income entry for `download-receipt`")
    ),
    responses(
        (status = 200, description = "Page of ledger entries", body = PageDto<LedgerEntryDto>),
        (status = 400, description = "Unrecognised query or missing income_id", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Invalid page or income entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_ledger_entries(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    query: Result<Query<LedgerListParams>, QueryRejection>,
) -> Result<Response, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(Resource::Ledger)
        .await?;

    let Query(params) = query?;
    let service = LedgerService::new(&state.db);

    let query = params
        .query
        .as_deref()
        .map(str::parse::<LedgerQuery>)
        .transpose()?;

    let entry_type = match query {
        None => None,
        Some(LedgerQuery::InvoiceTypeIncome) => Some(EntryType::Income),
        Some(LedgerQuery::InvoiceTypeExpense) => Some(EntryType::Expense),
        Some(LedgerQuery::TotalRevenue) => {
            let total_revenue = service.total(EntryType::Income).await?;
            return Ok(Json(TotalRevenueDto { total_revenue }).into_response());
        }
        Some(LedgerQuery::TotalExpenses) => {
            let total_expenses = service.total(EntryType::Expense).await?;
            return Ok(Json(TotalExpensesDto { total_expenses }).into_response());
        }
        Some(LedgerQuery::IncomeExpense) => {
            let totals = service.totals().await?;
            return Ok(Json(IncomeExpenseDto {
                total_revenue: totals.total_revenue,
                total_expenses: totals.total_expenses,
            })
            .into_response());
        }
        Some(LedgerQuery::MonthlyIncomeExpenseProfit) => {
            let page = PageRequest::new(params.page, params.page_size)?;
            let rows = service.monthly_report(page).await?;
            let dto = into_page_dto(
                rows,
                &state.public_base_url,
                &uri,
                MonthlyReportRow::into_dto,
            );
            return Ok(Json(dto).into_response());
        }
        Some(LedgerQuery::DownloadReceipt) => {
            let Some(income_id) = params.income_id else {
                return Err(AppError::BadRequest("income_id is required".to_string()));
            };
            let pdf = service.receipt(&state.gym_name, income_id).await?;
            return Ok(pdf_attachment(income_id, pdf));
        }
    };

    let page = PageRequest::new(params.page, params.page_size)?;
    let filter = LedgerFilter {
        entry_type,
        search: params.global_search,
    };
    let entries = service.get_paginated(&filter, page).await?;

    let dto = into_page_dto(entries, &state.public_base_url, &uri, LedgerEntry::into_dto);

    Ok((StatusCode::OK, Json(dto)).into_response())
}

fn pdf_attachment(income_id: i32, pdf: Vec<u8>) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"receipt_{}.pdf\"", income_id),
            ),
        ],
        pdf,
    )
        .into_response()
}

/// Record an income or expense entry.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/income-expense",
    tag = LEDGER_TAG,
    request_body = LedgerEntryInputDto,
    responses(
        (status = 201, description = "Entry recorded", body = LedgerEntryDto),
        (status = 400, description = "Invalid entry data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_ledger_entry(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<LedgerEntryInputDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(Resource::Ledger)
        .await?;

    let Json(payload) = payload?;
    payload.validate()?;

    let entry = LedgerService::new(&state.db)
        .create(LedgerEntryParams::from_dto(payload)?)
        .await?;

    Ok((StatusCode::CREATED, Json(entry.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/income-expense/{id}",
    tag = LEDGER_TAG,
    params(("id" = i32, Path, description = "Ledger entry ID")),
    responses(
        (status = 200, description = "Entry details", body = LedgerEntryDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Entry not found or deleted", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_ledger_entry_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(Resource::Ledger)
        .await?;

    let Path(id) = path?;

    let entry = LedgerService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(entry.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/income-expense/{id}",
    tag = LEDGER_TAG,
    params(("id" = i32, Path, description = "Ledger entry ID")),
    request_body = LedgerEntryInputDto,
    responses(
        (status = 200, description = "Entry updated", body = LedgerEntryDto),
        (status = 400, description = "Invalid entry data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Entry not found or deleted", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_ledger_entry(
    State(state): State<AppState>,
    headers: HeaderMap,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<LedgerEntryInputDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(Resource::Ledger)
        .await?;

    let Path(id) = path?;

    let Json(payload) = payload?;
    payload.validate()?;

    let entry = LedgerService::new(&state.db)
        .update(id, LedgerEntryParams::from_dto(payload)?)
        .await?;

    Ok((StatusCode::OK, Json(entry.into_dto())))
}

/// Soft-delete a ledger entry.
///
/// The entry keeps its row with `deleted_at` and the optional `reason`, and drops out
/// of listings, totals and reports.
#[utoipa::path(
    delete,
    path = "/api/income-expense/{id}",
    tag = LEDGER_TAG,
    params(
        ("id" = i32, Path, description = "Ledger entry ID"),
        ("reason" = Option<String>, Query, description = "Why the entry was removed")
    ),
    responses(
        (status = 204, description = "Entry deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Entry not found or already deleted", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_ledger_entry(
    State(state): State<AppState>,
    headers: HeaderMap,
    path: Result<Path<i32>, PathRejection>,
    query: Result<Query<DeleteEntryParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(Resource::Ledger)
        .await?;

    let Path(id) = path?;
    let Query(params) = query?;

    let reason = params.reason.filter(|reason| !reason.trim().is_empty());

    LedgerService::new(&state.db).delete(id, reason).await?;

    Ok(StatusCode::NO_CONTENT)
}

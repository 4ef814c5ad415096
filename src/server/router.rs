use axum::{
    routing::{get, post},
    Json, Router,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        attendance::{AttendanceDto, CreateAttendanceDto},
        auth::{AccessTokenDto, LoginDto, RefreshDto, TokenPairDto},
        device::{DeviceModeDto, SetDeviceModeDto},
        ledger::{
            IncomeExpenseDto, LedgerEntryDto, LedgerEntryInputDto, MonthlyReportRowDto,
            TotalExpensesDto, TotalRevenueDto,
        },
        member::{
            ActiveMembersDto, LeftMembersDto, MemberDto, MemberInputDto, MembershipCountDto,
            MembershipCountsDto, TotalMembersDto,
        },
        membership::{MembershipPlanDto, MembershipPlanInputDto},
        payment::{AcceptPaymentDto, PaymentDto, RenewalDto},
    },
    server::{
        controller::{attendance, auth, device_mode, ledger, member, membership, payment},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Gymdesk API"),
    paths(
        auth::login,
        auth::refresh,
        auth::auth_check,
        member::get_members,
        member::create_member,
        member::get_member_by_id,
        member::update_member,
        member::delete_member,
        membership::get_memberships,
        membership::create_membership,
        membership::get_membership_by_id,
        membership::update_membership,
        membership::delete_membership,
        payment::accept_payment,
        payment::get_payments,
        payment::get_payment_by_id,
        ledger::get_ledger_entries,
        ledger::create_ledger_entry,
        ledger::get_ledger_entry_by_id,
        ledger::update_ledger_entry,
        ledger::delete_ledger_entry,
        attendance::get_attendance,
        attendance::create_attendance,
        attendance::get_attendance_by_id,
        device_mode::get_device_mode,
        device_mode::set_device_mode,
    ),
    components(schemas(
        ErrorDto,
        MessageDto,
        LoginDto,
        RefreshDto,
        TokenPairDto,
        AccessTokenDto,
        MemberDto,
        MemberInputDto,
        TotalMembersDto,
        ActiveMembersDto,
        LeftMembersDto,
        MembershipCountDto,
        MembershipCountsDto,
        MembershipPlanDto,
        MembershipPlanInputDto,
        AcceptPaymentDto,
        PaymentDto,
        RenewalDto,
        LedgerEntryDto,
        LedgerEntryInputDto,
        TotalRevenueDto,
        TotalExpensesDto,
        IncomeExpenseDto,
        MonthlyReportRowDto,
        AttendanceDto,
        CreateAttendanceDto,
        SetDeviceModeDto,
        DeviceModeDto,
    )),
    modifiers(&BearerAuth),
)]
pub struct ApiDoc;

/// Registers the `bearer` scheme referenced by guarded endpoints.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/token", post(auth::login))
        .route("/api/token/refresh", post(auth::refresh))
        .route("/api/auth-check", get(auth::auth_check))
        .route(
            "/api/members",
            get(member::get_members).post(member::create_member),
        )
        .route(
            "/api/members/{id}",
            get(member::get_member_by_id)
                .put(member::update_member)
                .delete(member::delete_member),
        )
        .route(
            "/api/memberships",
            get(membership::get_memberships).post(membership::create_membership),
        )
        .route(
            "/api/memberships/{id}",
            get(membership::get_membership_by_id)
                .put(membership::update_membership)
                .delete(membership::delete_membership),
        )
        .route("/api/accept-payment", post(payment::accept_payment))
        .route("/api/payments", get(payment::get_payments))
        .route("/api/payments/{id}", get(payment::get_payment_by_id))
        .route(
            "/api/income-expense",
            get(ledger::get_ledger_entries).post(ledger::create_ledger_entry),
        )
        .route(
            "/api/income-expense/{id}",
            get(ledger::get_ledger_entry_by_id)
                .put(ledger::update_ledger_entry)
                .delete(ledger::delete_ledger_entry),
        )
        .route(
            "/api/inout",
            get(attendance::get_attendance).post(attendance::create_attendance),
        )
        .route("/api/inout/{id}", get(attendance::get_attendance_by_id))
        .route(
            "/api/device-mode",
            get(device_mode::get_device_mode).post(device_mode::set_device_mode),
        )
        .route("/api/openapi.json", get(openapi))
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct LedgerEntryDto {
    pub id: i32,
    /// `income` or `expense`.
    pub entry_type: String,
    pub label: String,
    pub party: String,
    pub receiver_id: Option<i32>,
    pub amount: f64,
    pub entry_date: NaiveDate,
    pub payment_status: String,
}

/// Body for both entry creation and full update.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct LedgerEntryInputDto {
    pub entry_type: String,
    #[validate(length(min = 1, max = 100))]
    pub label: String,
    #[validate(length(min = 1, max = 200))]
    pub party: String,
    pub receiver_id: Option<i32>,
    #[validate(range(min = 0.0))]
    pub amount: f64,
    pub entry_date: NaiveDate,
    /// Defaults to `paid`.
    pub payment_status: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct TotalRevenueDto {
    pub total_revenue: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct TotalExpensesDto {
    pub total_expenses: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct IncomeExpenseDto {
    pub total_revenue: f64,
    pub total_expenses: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct MonthlyReportRowDto {
    pub year: i32,
    pub month: u32,
    pub total_revenue: f64,
    pub total_expenses: f64,
    pub profit: f64,
}

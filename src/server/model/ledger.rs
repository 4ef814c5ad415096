//! Income/expense ledger domain models and parameters.
//!
//! Ledger entries are either income or expense. Deleting an entry only stamps
//! `deleted_at` and a reason; such entries never reach the service layer because the
//! repository filters them out of every read.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use sea_orm::DbErr;

use crate::{
    model::ledger::{LedgerEntryDto, LedgerEntryInputDto, MonthlyReportRowDto},
    server::error::AppError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryType {
    Income,
    Expense,
}

impl EntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(format!("Unknown entry type '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Paid,
    Unpaid,
    Partial,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Unpaid => "unpaid",
            Self::Partial => "partial",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "paid" => Ok(Self::Paid),
            "unpaid" => Ok(Self::Unpaid),
            "partial" => Ok(Self::Partial),
            other => Err(format!("Unknown payment status '{}'", other)),
        }
    }
}

/// A live (not soft-deleted) ledger entry.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerEntry {
    pub id: i32,
    pub entry_type: EntryType,
    pub label: String,
    /// Supplier for expenses, payer for income.
    pub party: String,
    pub receiver_id: Option<i32>,
    pub amount: f64,
    pub entry_date: NaiveDate,
    pub payment_status: PaymentStatus,
}

impl LedgerEntry {
    /// Converts an entity model to a ledger domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(LedgerEntry)` - The converted entry
    /// - `Err(DbErr::Custom)` - Stored entry type or payment status is not recognised
    pub fn from_entity(entity: entity::ledger_entry::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            entry_type: entity.entry_type.parse().map_err(DbErr::Custom)?,
            label: entity.label,
            party: entity.party,
            receiver_id: entity.receiver_id,
            amount: entity.amount,
            entry_date: entity.entry_date,
            payment_status: entity.payment_status.parse().map_err(DbErr::Custom)?,
        })
    }

    pub fn into_dto(self) -> LedgerEntryDto {
        LedgerEntryDto {
            id: self.id,
            entry_type: self.entry_type.to_string(),
            label: self.label,
            party: self.party,
            receiver_id: self.receiver_id,
            amount: self.amount,
            entry_date: self.entry_date,
            payment_status: self.payment_status.to_string(),
        }
    }
}

/// Parameters for creating or fully updating a ledger entry.
#[derive(Debug, Clone)]
pub struct LedgerEntryParams {
    pub entry_type: EntryType,
    pub label: String,
    pub party: String,
    pub receiver_id: Option<i32>,
    pub amount: f64,
    pub entry_date: NaiveDate,
    pub payment_status: PaymentStatus,
}

impl LedgerEntryParams {
    /// Converts a validated request body into params.
    ///
    /// # Returns
    /// - `Ok(LedgerEntryParams)` - Converted params, `payment_status` defaulted to `paid`
    /// - `Err(AppError::Validation)` - Unknown `entry_type` or `payment_status`
    pub fn from_dto(dto: LedgerEntryInputDto) -> Result<Self, AppError> {
        let entry_type = dto
            .entry_type
            .parse::<EntryType>()
            .map_err(|_| AppError::field("entry_type", "Must be one of: income, expense."))?;

        let payment_status = match dto.payment_status.as_deref() {
            None => PaymentStatus::Paid,
            Some(status) => status.parse::<PaymentStatus>().map_err(|_| {
                AppError::field("payment_status", "Must be one of: paid, unpaid, partial.")
            })?,
        };

        Ok(Self {
            entry_type,
            label: dto.label,
            party: dto.party,
            receiver_id: dto.receiver_id,
            amount: dto.amount,
            entry_date: dto.entry_date,
            payment_status,
        })
    }
}

/// Filter applied to ledger listings.
#[derive(Debug, Clone, Default)]
pub struct LedgerFilter {
    pub entry_type: Option<EntryType>,
    pub search: Option<String>,
}

/// Revenue and expense totals over live entries.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LedgerTotals {
    pub total_revenue: f64,
    pub total_expenses: f64,
}

/// Income and expense of one calendar month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyReportRow {
    pub year: i32,
    /// 1-based month.
    pub month: u32,
    pub total_revenue: f64,
    pub total_expenses: f64,
}

impl MonthlyReportRow {
    pub fn empty(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            total_revenue: 0.0,
            total_expenses: 0.0,
        }
    }

    pub fn profit(&self) -> f64 {
        self.total_revenue - self.total_expenses
    }

    pub fn into_dto(self) -> MonthlyReportRowDto {
        MonthlyReportRowDto {
            year: self.year,
            month: self.month,
            total_revenue: self.total_revenue,
            total_expenses: self.total_expenses,
            profit: self.profit(),
        }
    }
}

/// Sub-views of the ledger list endpoint selected by `?query=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerQuery {
    TotalRevenue,
    TotalExpenses,
    IncomeExpense,
    MonthlyIncomeExpenseProfit,
    InvoiceTypeIncome,
    InvoiceTypeExpense,
    DownloadReceipt,
}

impl FromStr for LedgerQuery {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "total-revenue" => Ok(Self::TotalRevenue),
            "total-expenses" => Ok(Self::TotalExpenses),
            "income-expense" => Ok(Self::IncomeExpense),
            "monthly-income-expense-profit" => Ok(Self::MonthlyIncomeExpenseProfit),
            "invoice-type-income" => Ok(Self::InvoiceTypeIncome),
            "invoice-type-expense" => Ok(Self::InvoiceTypeExpense),
            "download-receipt" => Ok(Self::DownloadReceipt),
            other => Err(AppError::BadRequest(format!(
                "Unrecognised query '{}'.",
                other
            ))),
        }
    }
}

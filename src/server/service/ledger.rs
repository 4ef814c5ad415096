//! Income/expense ledger, its aggregates and receipts.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::ledger::LedgerRepository,
    error::AppError,
    model::{
        ledger::{
            EntryType, LedgerEntry, LedgerEntryParams, LedgerFilter, LedgerTotals,
            MonthlyReportRow,
        },
        page::{Page, PageRequest},
    },
    service::{receipt::render_receipt, report::fill_month_gaps},
};

pub struct LedgerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LedgerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: LedgerEntryParams) -> Result<LedgerEntry, AppError> {
        Ok(LedgerRepository::new(self.db).create(params).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<LedgerEntry, AppError> {
        LedgerRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| entry_not_found(id))
    }

    pub async fn get_paginated(
        &self,
        filter: &LedgerFilter,
        page: PageRequest,
    ) -> Result<Page<LedgerEntry>, AppError> {
        let (entries, total) = LedgerRepository::new(self.db)
            .get_paginated(filter, page)
            .await?;

        Page::new(entries, total, page)
    }

    pub async fn update(&self, id: i32, params: LedgerEntryParams) -> Result<LedgerEntry, AppError> {
        LedgerRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| entry_not_found(id))
    }

    /// Soft-deletes an entry; it disappears from listings and totals
    pub async fn delete(&self, id: i32, reason: Option<String>) -> Result<(), AppError> {
        if !LedgerRepository::new(self.db).soft_delete(id, reason).await? {
            return Err(entry_not_found(id));
        }

        tracing::info!("Ledger entry {} soft-deleted", id);

        Ok(())
    }

    pub async fn total(&self, entry_type: EntryType) -> Result<f64, AppError> {
        Ok(LedgerRepository::new(self.db).sum_amount(entry_type).await?)
    }

    pub async fn totals(&self) -> Result<LedgerTotals, AppError> {
        Ok(LedgerTotals {
            total_revenue: self.total(EntryType::Income).await?,
            total_expenses: self.total(EntryType::Expense).await?,
        })
    }

    /// One page of the gap-filled monthly rollup, latest month first
    pub async fn monthly_report(
        &self,
        page: PageRequest,
    ) -> Result<Page<MonthlyReportRow>, AppError> {
        let rows = LedgerRepository::new(self.db).get_monthly_totals().await?;

        Page::from_vec(fill_month_gaps(rows), page)
    }

    /// Renders the PDF receipt of an income entry.
    ///
    /// # Returns
    /// - `Ok(Vec<u8>)` - PDF bytes
    /// - `Err(AppError::NotFound)` - No live entry with that ID, or it is an expense
    pub async fn receipt(&self, issuer: &str, income_id: i32) -> Result<Vec<u8>, AppError> {
        let entry = LedgerRepository::new(self.db)
            .get_by_id(income_id)
            .await?
            .filter(|entry| entry.entry_type == EntryType::Income)
            .ok_or_else(|| AppError::NotFound(format!("Income entry {} not found", income_id)))?;

        Ok(render_receipt(issuer, &entry, Utc::now())?)
    }
}

fn entry_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Ledger entry {} not found", id))
}

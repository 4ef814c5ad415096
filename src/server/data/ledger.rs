//! Income/expense ledger repository.
//!
//! Every read filters on `deleted_at IS NULL`: soft-deleted entries are invisible to
//! listings, lookups, updates and aggregates alike.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::server::model::{
    ledger::{EntryType, LedgerEntry, LedgerEntryParams, LedgerFilter, MonthlyReportRow},
    page::PageRequest,
};

use entity::ledger_entry::Column;

const YEAR_OF_ENTRY: &str = "CAST(strftime('%Y', entry_date) AS INTEGER)";
const MONTH_OF_ENTRY: &str = "CAST(strftime('%m', entry_date) AS INTEGER)";

pub struct LedgerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LedgerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn live() -> Select<entity::prelude::LedgerEntry> {
        entity::prelude::LedgerEntry::find().filter(Column::DeletedAt.is_null())
    }

    async fn find_live_model(
        &self,
        id: i32,
    ) -> Result<Option<entity::ledger_entry::Model>, DbErr> {
        Self::live().filter(Column::Id.eq(id)).one(self.db).await
    }

    pub async fn create(&self, params: LedgerEntryParams) -> Result<LedgerEntry, DbErr> {
        let entity = entity::ledger_entry::ActiveModel {
            entry_type: ActiveValue::Set(params.entry_type.to_string()),
            label: ActiveValue::Set(params.label),
            party: ActiveValue::Set(params.party),
            receiver_id: ActiveValue::Set(params.receiver_id),
            amount: ActiveValue::Set(params.amount),
            entry_date: ActiveValue::Set(params.entry_date),
            payment_status: ActiveValue::Set(params.payment_status.to_string()),
            delete_reason: ActiveValue::Set(None),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        LedgerEntry::from_entity(entity)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<LedgerEntry>, DbErr> {
        self.find_live_model(id)
            .await?
            .map(LedgerEntry::from_entity)
            .transpose()
    }

    /// Gets one page of live entries, latest entry date first.
    ///
    /// `filter.search` is matched as a substring of type, label, party, payment status
    /// and delete reason.
    ///
    /// # Returns
    /// - `Ok((entries, total))` - Entries on the page and the total matching count
    pub async fn get_paginated(
        &self,
        filter: &LedgerFilter,
        page: PageRequest,
    ) -> Result<(Vec<LedgerEntry>, u64), DbErr> {
        let mut query = Self::live()
            .order_by_desc(Column::EntryDate)
            .order_by_desc(Column::Id);
        if let Some(entry_type) = filter.entry_type {
            query = query.filter(Column::EntryType.eq(entry_type.as_str()));
        }
        if let Some(term) = filter.search.as_deref() {
            query = query.filter(
                Condition::any()
                    .add(Column::EntryType.contains(term))
                    .add(Column::Label.contains(term))
                    .add(Column::Party.contains(term))
                    .add(Column::PaymentStatus.contains(term))
                    .add(Column::DeleteReason.contains(term)),
            );
        }

        let paginator = query.paginate(self.db, page.page_size);
        let total = paginator.num_items().await?;
        if !page.contains(total) {
            return Ok((Vec::new(), total));
        }
        let entries = paginator
            .fetch_page(page.index())
            .await?
            .into_iter()
            .map(LedgerEntry::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((entries, total))
    }

    /// Replaces every editable field of a live entry.
    ///
    /// # Returns
    /// - `Ok(Some(entry))` - Updated entry
    /// - `Ok(None)` - No live entry with that ID
    pub async fn update(
        &self,
        id: i32,
        params: LedgerEntryParams,
    ) -> Result<Option<LedgerEntry>, DbErr> {
        let Some(existing) = self.find_live_model(id).await? else {
            return Ok(None);
        };

        let mut active: entity::ledger_entry::ActiveModel = existing.into();
        active.entry_type = ActiveValue::Set(params.entry_type.to_string());
        active.label = ActiveValue::Set(params.label);
        active.party = ActiveValue::Set(params.party);
        active.receiver_id = ActiveValue::Set(params.receiver_id);
        active.amount = ActiveValue::Set(params.amount);
        active.entry_date = ActiveValue::Set(params.entry_date);
        active.payment_status = ActiveValue::Set(params.payment_status.to_string());

        let entity = active.update(self.db).await?;

        LedgerEntry::from_entity(entity).map(Some)
    }

    /// Soft-deletes a live entry, recording why.
    ///
    /// # Returns
    /// - `Ok(true)` - Entry stamped as deleted
    /// - `Ok(false)` - No live entry with that ID
    pub async fn soft_delete(&self, id: i32, reason: Option<String>) -> Result<bool, DbErr> {
        let Some(existing) = self.find_live_model(id).await? else {
            return Ok(false);
        };

        let mut active: entity::ledger_entry::ActiveModel = existing.into();
        active.delete_reason = ActiveValue::Set(reason);
        active.deleted_at = ActiveValue::Set(Some(Utc::now()));
        active.update(self.db).await?;

        Ok(true)
    }

    /// Sums the amounts of live entries of one type. An empty set sums to 0.
    pub async fn sum_amount(&self, entry_type: EntryType) -> Result<f64, DbErr> {
        let total = Self::live()
            .select_only()
            .column_as(Column::Amount.sum(), "total")
            .filter(Column::EntryType.eq(entry_type.as_str()))
            .into_tuple::<Option<f64>>()
            .one(self.db)
            .await?;

        Ok(total.flatten().unwrap_or(0.0))
    }

    /// Sums live income and expense per calendar month of the entry date.
    ///
    /// Only months with at least one live entry are returned, in no particular order.
    /// A side with no entries in a month sums to 0.
    pub async fn get_monthly_totals(&self) -> Result<Vec<MonthlyReportRow>, DbErr> {
        let rows = Self::live()
            .select_only()
            .column_as(Expr::cust(YEAR_OF_ENTRY), "year")
            .column_as(Expr::cust(MONTH_OF_ENTRY), "month")
            .column_as(
                Expr::cust("TOTAL(CASE WHEN entry_type = 'income' THEN amount ELSE 0.0 END)"),
                "total_revenue",
            )
            .column_as(
                Expr::cust("TOTAL(CASE WHEN entry_type = 'expense' THEN amount ELSE 0.0 END)"),
                "total_expenses",
            )
            .group_by(Expr::cust(YEAR_OF_ENTRY))
            .group_by(Expr::cust(MONTH_OF_ENTRY))
            .into_tuple::<(i32, i32, f64, f64)>()
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(year, month, total_revenue, total_expenses)| {
                let month = u32::try_from(month)
                    .map_err(|_| DbErr::Custom(format!("Invalid report month {}", month)))?;
                Ok(MonthlyReportRow {
                    year,
                    month,
                    total_revenue,
                    total_expenses,
                })
            })
            .collect()
    }
}

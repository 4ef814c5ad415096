//! Ledger entry factory for income and expense records.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating ledger entries.
///
/// # Example
///
/// ```rust,ignore
/// let rent = LedgerEntryFactory::new(&db)
///     .expense()
///     .label("Rent")
///     .amount(900.0)
///     .entry_date(date)
///     .build()
///     .await?;
/// ```
pub struct LedgerEntryFactory<'a> {
    db: &'a DatabaseConnection,
    entry_type: String,
    label: String,
    party: String,
    amount: f64,
    entry_date: NaiveDate,
    payment_status: String,
    deleted: Option<String>,
}

impl<'a> LedgerEntryFactory<'a> {
    /// Creates a new factory with default values.
    ///
    /// Defaults:
    /// - entry_type: `"income"`
    /// - label: `"Entry {id}"`
    /// - party: `"Walk-in"`
    /// - amount: `100.0`
    /// - entry_date: today (UTC)
    /// - payment_status: `"paid"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            entry_type: "income".to_string(),
            label: format!("Entry {}", id),
            party: "Walk-in".to_string(),
            amount: 100.0,
            entry_date: Utc::now().date_naive(),
            payment_status: "paid".to_string(),
            deleted: None,
        }
    }

    pub fn income(mut self) -> Self {
        self.entry_type = "income".to_string();
        self
    }

    pub fn expense(mut self) -> Self {
        self.entry_type = "expense".to_string();
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn party(mut self, party: impl Into<String>) -> Self {
        self.party = party.into();
        self
    }

    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = amount;
        self
    }

    pub fn entry_date(mut self, entry_date: NaiveDate) -> Self {
        self.entry_date = entry_date;
        self
    }

    pub fn payment_status(mut self, payment_status: impl Into<String>) -> Self {
        self.payment_status = payment_status.into();
        self
    }

    /// Marks the entry as soft-deleted with the given reason.
    pub fn deleted(mut self, reason: impl Into<String>) -> Self {
        self.deleted = Some(reason.into());
        self
    }

    /// Builds and inserts the entry.
    ///
    /// # Returns
    /// - `Ok(entity::ledger_entry::Model)` - Created entry
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::ledger_entry::Model, DbErr> {
        let deleted_at = self.deleted.as_ref().map(|_| Utc::now());

        entity::ledger_entry::ActiveModel {
            entry_type: ActiveValue::Set(self.entry_type),
            label: ActiveValue::Set(self.label),
            party: ActiveValue::Set(self.party),
            receiver_id: ActiveValue::Set(None),
            amount: ActiveValue::Set(self.amount),
            entry_date: ActiveValue::Set(self.entry_date),
            payment_status: ActiveValue::Set(self.payment_status),
            delete_reason: ActiveValue::Set(self.deleted),
            deleted_at: ActiveValue::Set(deleted_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an income entry for `amount` on `entry_date`.
pub async fn create_income(
    db: &DatabaseConnection,
    amount: f64,
    entry_date: NaiveDate,
) -> Result<entity::ledger_entry::Model, DbErr> {
    LedgerEntryFactory::new(db)
        .income()
        .amount(amount)
        .entry_date(entry_date)
        .build()
        .await
}

/// Creates an expense entry for `amount` on `entry_date`.
pub async fn create_expense(
    db: &DatabaseConnection,
    amount: f64,
    entry_date: NaiveDate,
) -> Result<entity::ledger_entry::Model, DbErr> {
    LedgerEntryFactory::new(db)
        .expense()
        .amount(amount)
        .entry_date(entry_date)
        .build()
        .await
}

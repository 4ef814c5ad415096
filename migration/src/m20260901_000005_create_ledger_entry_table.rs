use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LedgerEntry::Table)
                    .if_not_exists()
                    .col(pk_auto(LedgerEntry::Id))
                    .col(string(LedgerEntry::EntryType))
                    .col(string(LedgerEntry::Label))
                    .col(string(LedgerEntry::Party))
                    .col(integer_null(LedgerEntry::ReceiverId))
                    .col(double(LedgerEntry::Amount))
                    .col(date(LedgerEntry::EntryDate))
                    .col(string(LedgerEntry::PaymentStatus))
                    .col(text_null(LedgerEntry::DeleteReason))
                    .col(timestamp_with_time_zone_null(LedgerEntry::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_ledger_entry_type_date")
                    .table(LedgerEntry::Table)
                    .col(LedgerEntry::EntryType)
                    .col(LedgerEntry::EntryDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LedgerEntry::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LedgerEntry {
    Table,
    Id,
    EntryType,
    Label,
    Party,
    ReceiverId,
    Amount,
    EntryDate,
    PaymentStatus,
    DeleteReason,
    DeletedAt,
}

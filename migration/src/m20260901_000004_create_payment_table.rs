use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260901_000002_create_membership_plan_table::MembershipPlan,
    m20260901_000003_create_member_table::Member,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Payment::Table)
                    .if_not_exists()
                    .col(pk_auto(Payment::Id))
                    .col(integer(Payment::MemberId))
                    .col(integer(Payment::MembershipId))
                    .col(double(Payment::Amount))
                    .col(date(Payment::ValidFrom))
                    .col(date(Payment::ValidTo))
                    .col(string(Payment::Status))
                    .col(boolean(Payment::Active).default(true))
                    .col(
                        timestamp_with_time_zone(Payment::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payment_member_id")
                            .from(Payment::Table, Payment::MemberId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payment_membership_id")
                            .from(Payment::Table, Payment::MembershipId)
                            .to(MembershipPlan::Table, MembershipPlan::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Payment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Payment {
    Table,
    Id,
    MemberId,
    MembershipId,
    Amount,
    ValidFrom,
    ValidTo,
    Status,
    Active,
    CreatedAt,
}

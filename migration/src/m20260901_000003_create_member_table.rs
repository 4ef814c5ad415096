use sea_orm_migration::{prelude::*, schema::*};

use super::m20260901_000002_create_membership_plan_table::MembershipPlan;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Member::Table)
                    .if_not_exists()
                    .col(pk_auto(Member::Id))
                    .col(string(Member::FirstName))
                    .col(string(Member::LastName))
                    .col(string_null(Member::Email))
                    .col(string_uniq(Member::Mobile))
                    .col(date(Member::Dob))
                    .col(text_null(Member::Address))
                    .col(string(Member::RoleName).default("member"))
                    .col(string_null(Member::RegCode))
                    .col(integer_null(Member::MembershipId))
                    .col(date_null(Member::MembershipValidFrom))
                    .col(date_null(Member::MembershipValidTo))
                    .col(string(Member::MembershipStatus).default("expired"))
                    .col(
                        timestamp_with_time_zone(Member::JoinedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_member_membership_id")
                            .from(Member::Table, Member::MembershipId)
                            .to(MembershipPlan::Table, MembershipPlan::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Member::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Member {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Mobile,
    Dob,
    Address,
    RoleName,
    RegCode,
    MembershipId,
    MembershipValidFrom,
    MembershipValidTo,
    MembershipStatus,
    JoinedAt,
}

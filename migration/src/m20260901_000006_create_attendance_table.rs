use sea_orm_migration::{prelude::*, schema::*};

use super::m20260901_000003_create_member_table::Member;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Attendance::Table)
                    .if_not_exists()
                    .col(pk_auto(Attendance::Id))
                    .col(integer(Attendance::MemberId))
                    .col(string(Attendance::Direction))
                    .col(
                        timestamp_with_time_zone(Attendance::RecordedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(integer_null(Attendance::ClassId))
                    .col(string_null(Attendance::RoleName))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attendance_member_id")
                            .from(Attendance::Table, Attendance::MemberId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Attendance::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Attendance {
    Table,
    Id,
    MemberId,
    Direction,
    RecordedAt,
    ClassId,
    RoleName,
}

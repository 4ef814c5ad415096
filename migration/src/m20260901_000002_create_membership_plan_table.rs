use sea_orm_migration::{prelude::*, schema::*};

/// Plans carried over from the fixed renewal rules, now stored as data.
const SEED_PLANS: [(&str, &str, f64, i32); 4] = [
    ("Regular Monthly", "regular", 1500.0, 30),
    ("Monthly Cardio", "cardio", 2000.0, 30),
    ("3 month Regular", "regular", 4000.0, 90),
    ("3 month Cardio", "cardio", 5500.0, 90),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MembershipPlan::Table)
                    .if_not_exists()
                    .col(pk_auto(MembershipPlan::Id))
                    .col(string_uniq(MembershipPlan::Label))
                    .col(string(MembershipPlan::Class))
                    .col(text_null(MembershipPlan::Description))
                    .col(double(MembershipPlan::Price))
                    .col(double_null(MembershipPlan::SignupFee))
                    .col(integer(MembershipPlan::DurationDays))
                    .col(
                        timestamp_with_time_zone(MembershipPlan::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        let mut insert = Query::insert();
        insert.into_table(MembershipPlan::Table).columns([
            MembershipPlan::Label,
            MembershipPlan::Class,
            MembershipPlan::Price,
            MembershipPlan::DurationDays,
        ]);
        for (label, class, price, days) in SEED_PLANS {
            insert.values_panic([label.into(), class.into(), price.into(), days.into()]);
        }

        manager.exec_stmt(insert.to_owned()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MembershipPlan::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MembershipPlan {
    Table,
    Id,
    Label,
    Class,
    Description,
    Price,
    SignupFee,
    DurationDays,
    CreatedAt,
}

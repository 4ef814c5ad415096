pub use sea_orm_migration::prelude::*;

mod m20260901_000001_create_user_table;
mod m20260901_000002_create_membership_plan_table;
mod m20260901_000003_create_member_table;
mod m20260901_000004_create_payment_table;
mod m20260901_000005_create_ledger_entry_table;
mod m20260901_000006_create_attendance_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260901_000001_create_user_table::Migration),
            Box::new(m20260901_000002_create_membership_plan_table::Migration),
            Box::new(m20260901_000003_create_member_table::Migration),
            Box::new(m20260901_000004_create_payment_table::Migration),
            Box::new(m20260901_000005_create_ledger_entry_table::Migration),
            Box::new(m20260901_000006_create_attendance_table::Migration),
        ]
    }
}

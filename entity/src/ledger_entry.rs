use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ledger_entry")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub entry_type: String,
    pub label: String,
    pub party: String,
    #[sea_orm(nullable)]
    pub receiver_id: Option<i32>,
    #[sea_orm(column_type = "Double")]
    pub amount: f64,
    pub entry_date: Date,
    pub payment_status: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub delete_reason: Option<String>,
    #[sea_orm(nullable)]
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

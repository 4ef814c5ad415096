use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "payment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub member_id: i32,
    pub membership_id: i32,
    #[sea_orm(column_type = "Double")]
    pub amount: f64,
    pub valid_from: Date,
    pub valid_to: Date,
    pub status: String,
    pub active: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::member::Entity",
        from = "Column::MemberId",
        to = "super::member::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Member,
    #[sea_orm(
        belongs_to = "super::membership_plan::Entity",
        from = "Column::MembershipId",
        to = "super::membership_plan::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    MembershipPlan,
}

impl Related<super::member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Member.def()
    }
}

impl Related<super::membership_plan::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MembershipPlan.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

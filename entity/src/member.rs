use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "member")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(nullable)]
    pub email: Option<String>,
    #[sea_orm(unique)]
    pub mobile: String,
    pub dob: Date,
    #[sea_orm(column_type = "Text", nullable)]
    pub address: Option<String>,
    pub role_name: String,
    #[sea_orm(nullable)]
    pub reg_code: Option<String>,
    #[sea_orm(nullable)]
    pub membership_id: Option<i32>,
    #[sea_orm(nullable)]
    pub membership_valid_from: Option<Date>,
    #[sea_orm(nullable)]
    pub membership_valid_to: Option<Date>,
    pub membership_status: String,
    pub joined_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::membership_plan::Entity",
        from = "Column::MembershipId",
        to = "super::membership_plan::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    MembershipPlan,
    #[sea_orm(has_many = "super::payment::Entity")]
    Payment,
    #[sea_orm(has_many = "super::attendance::Entity")]
    Attendance,
}

impl Related<super::membership_plan::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MembershipPlan.def()
    }
}

impl Related<super::payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payment.def()
    }
}

impl Related<super::attendance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attendance.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

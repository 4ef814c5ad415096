use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct MemberDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub mobile: String,
    pub dob: NaiveDate,
    pub address: Option<String>,
    pub role_name: String,
    pub reg_code: Option<String>,
    pub membership_id: Option<i32>,
    pub membership_valid_from: Option<NaiveDate>,
    pub membership_valid_to: Option<NaiveDate>,
    pub membership_status: String,
    pub joined_at: DateTime<Utc>,
}

/// Body for both member creation and full update.
///
/// `role_name` defaults to `member`; `membership_status` defaults to `expired` on
/// creation and keeps the stored value on update.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct MemberInputDto {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 6, max = 20))]
    pub mobile: String,
    pub dob: NaiveDate,
    pub address: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub role_name: Option<String>,
    pub reg_code: Option<String>,
    pub membership_id: Option<i32>,
    pub membership_status: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct TotalMembersDto {
    pub total_members: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ActiveMembersDto {
    pub active_members: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct LeftMembersDto {
    pub left_members: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct MembershipCountDto {
    pub membership_id: i32,
    pub label: String,
    pub members: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct MembershipCountsDto {
    pub membership_counts: Vec<MembershipCountDto>,
}

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::member::MemberDto;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct PaymentDto {
    pub id: i32,
    pub member_id: i32,
    pub membership_id: i32,
    pub amount: f64,
    pub valid_from: NaiveDate,
    pub valid_to: NaiveDate,
    pub status: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct AcceptPaymentDto {
    #[validate(required(message = "This field is required."))]
    pub member_id: Option<i32>,
    /// Label of the plan to renew onto, e.g. `Regular Monthly`.
    #[validate(required(message = "This field is required."))]
    pub plan: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct RenewalDto {
    pub member: MemberDto,
    pub payment: PaymentDto,
}

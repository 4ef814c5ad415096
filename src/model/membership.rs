use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct MembershipPlanDto {
    pub id: i32,
    pub label: String,
    pub class: String,
    pub description: Option<String>,
    pub price: f64,
    pub signup_fee: Option<f64>,
    pub duration_days: i32,
    pub created_at: DateTime<Utc>,
}

/// Body for both plan creation and full update.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct MembershipPlanInputDto {
    #[validate(length(min = 1, max = 100))]
    pub label: String,
    #[validate(length(min = 1, max = 50))]
    pub class: String,
    pub description: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 0.0))]
    pub signup_fee: Option<f64>,
    #[validate(range(min = 1, max = 3650))]
    pub duration_days: i32,
}

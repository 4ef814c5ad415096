use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct AttendanceDto {
    pub id: i32,
    pub member_id: i32,
    /// `in` or `out`.
    pub direction: String,
    pub recorded_at: DateTime<Utc>,
    pub class_id: Option<i32>,
    pub role_name: Option<String>,
}

#[derive(Deserialize, Debug, Clone, ToSchema)]
pub struct CreateAttendanceDto {
    pub member_id: i32,
    pub direction: String,
    /// Defaults to the time the request is handled.
    pub recorded_at: Option<DateTime<Utc>>,
    pub class_id: Option<i32>,
    pub role_name: Option<String>,
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, Debug, ToSchema)]
pub struct SetDeviceModeDto {
    /// `register` or `attendance`.
    pub mode: Option<String>,
    pub member_id: Option<i32>,
    /// Device key; the shared `default` slot is used when omitted.
    pub device: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct DeviceModeDto {
    pub mode: String,
    pub member_id: Option<i32>,
}

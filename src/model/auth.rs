use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Deserialize, Debug, Validate, ToSchema)]
pub struct LoginDto {
    #[validate(required(message = "This field is required."))]
    pub username: Option<String>,
    #[validate(required(message = "This field is required."))]
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct TokenPairDto {
    pub access: String,
    pub refresh: String,
}

#[derive(Deserialize, Debug, Validate, ToSchema)]
pub struct RefreshDto {
    #[validate(required(message = "This field is required."))]
    pub refresh: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct AccessTokenDto {
    pub access: String,
}

use std::{str::FromStr, time::Duration};

use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PUBLIC_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_ACCESS_TOKEN_MINUTES: i64 = 5;
const DEFAULT_REFRESH_TOKEN_DAYS: i64 = 1;
const DEFAULT_DEVICE_MODE_TTL_SECONDS: u64 = 300;
const DEFAULT_GYM_NAME: &str = "Fitness First Gym";
const MIN_JWT_SECRET_LEN: usize = 32;

pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub public_base_url: Url,

    pub jwt_secret: String,
    pub access_token_minutes: i64,
    pub refresh_token_days: i64,

    pub device_mode_ttl: Duration,

    /// Issuer printed on PDF receipts.
    pub gym_name: String,

    /// Bootstrap admin created at startup when the user table is empty.
    pub admin_username: Option<String>,
    pub admin_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let jwt_secret = required("JWT_SECRET")?;
        if jwt_secret.len() < MIN_JWT_SECRET_LEN {
            return Err(ConfigError::InvalidEnvVar {
                name: "JWT_SECRET".to_string(),
                reason: format!("must be at least {} bytes", MIN_JWT_SECRET_LEN),
            }
            .into());
        }

        let public_base_url = optional("PUBLIC_BASE_URL")
            .unwrap_or_else(|| DEFAULT_PUBLIC_BASE_URL.to_string());
        let public_base_url =
            Url::parse(&public_base_url).map_err(|e| ConfigError::InvalidEnvVar {
                name: "PUBLIC_BASE_URL".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: optional("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            public_base_url,
            jwt_secret,
            access_token_minutes: parsed("ACCESS_TOKEN_MINUTES", DEFAULT_ACCESS_TOKEN_MINUTES)?,
            refresh_token_days: parsed("REFRESH_TOKEN_DAYS", DEFAULT_REFRESH_TOKEN_DAYS)?,
            device_mode_ttl: Duration::from_secs(parsed(
                "DEVICE_MODE_TTL_SECONDS",
                DEFAULT_DEVICE_MODE_TTL_SECONDS,
            )?),
            gym_name: optional("GYM_NAME").unwrap_or_else(|| DEFAULT_GYM_NAME.to_string()),
            admin_username: optional("ADMIN_USERNAME"),
            admin_password: optional("ADMIN_PASSWORD"),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

fn parsed<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match optional(name) {
        Some(value) => value.parse().map_err(|e: T::Err| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}

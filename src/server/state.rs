//! State handed to every handler through axum's `State` extractor.
//!
//! Built once in `main` from `Config` and cloned per request.

use sea_orm::DatabaseConnection;
use std::sync::Arc;
use url::Url;

use crate::server::{
    config::Config,
    service::{auth::jwt::JwtService, device_mode::DeviceModeService},
};

/// All fields are cheap to clone: the connection is a pool handle, the JWT service sits
/// behind an `Arc` and the device mode store shares its map between clones.
#[derive(Clone)]
pub struct AppState {
    /// SQLite pool.
    pub db: DatabaseConnection,

    /// Signs and verifies access and refresh tokens.
    pub jwt: Arc<JwtService>,

    /// In-memory, TTL-bounded device mode entries.
    pub device_mode: DeviceModeService,

    /// Base URL that `next`/`previous` pagination links are built on.
    pub public_base_url: Url,

    /// Issuer printed on PDF receipts.
    pub gym_name: String,
}

impl AppState {
    /// Assembles state from already constructed parts. Tests use this directly.
    pub fn new(
        db: DatabaseConnection,
        jwt: JwtService,
        device_mode: DeviceModeService,
        public_base_url: Url,
        gym_name: String,
    ) -> Self {
        Self {
            db,
            jwt: Arc::new(jwt),
            device_mode,
            public_base_url,
            gym_name,
        }
    }

    /// Builds the state from loaded configuration.
    pub fn from_config(db: DatabaseConnection, config: &Config) -> Self {
        let jwt = JwtService::new(
            &config.jwt_secret,
            chrono::Duration::minutes(config.access_token_minutes),
            chrono::Duration::days(config.refresh_token_days),
        );

        Self::new(
            db,
            jwt,
            DeviceModeService::new(config.device_mode_ttl),
            config.public_base_url.clone(),
            config.gym_name.clone(),
        )
    }
}

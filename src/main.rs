mod model;
mod server;

use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, router, scheduler::membership_expiry, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    // Create the bootstrap admin if no staff account exists
    startup::ensure_admin(&db, &config).await?;

    // Start membership expiry scheduler
    let scheduler_db = db.clone();
    tokio::spawn(async move {
        if let Err(e) = membership_expiry::start_scheduler(scheduler_db).await {
            tracing::error!("Membership expiry scheduler error: {}", e);
        }
    });

    let app = router::router()
        .with_state(AppState::from_config(db, &config))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .map_err(|e| {
            AppError::InternalError(format!("Failed to bind {}: {}", config.bind_address, e))
        })?;

    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::InternalError(format!("Server error: {}", e)))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }

    tracing::info!("Shutting down");
}

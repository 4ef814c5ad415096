use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config, data::user::UserRepository, error::AppError, util::password::hash_password,
};

/// Opens the pool for `DATABASE_URL` and brings the schema up to date.
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Pool with every migration applied
/// - `Err(AppError::DbErr)` - Connection or a migration failed
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the bootstrap admin account when no staff account exists yet.
///
/// Uses `ADMIN_USERNAME` / `ADMIN_PASSWORD` from configuration. When the user table is
/// empty and either value is missing, a warning is logged and the server still starts;
/// nobody will be able to log in until an account is created.
///
/// # Returns
/// - `Ok(())` - An account already existed, the admin was created, or no credentials were configured
/// - `Err(AppError)` - Database error or password hashing failure
pub async fn ensure_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let user_repo = UserRepository::new(db);

    if user_repo.any_exists().await? {
        return Ok(());
    }

    let (Some(username), Some(password)) = (&config.admin_username, &config.admin_password)
    else {
        tracing::warn!(
            "No staff accounts exist; set ADMIN_USERNAME and ADMIN_PASSWORD to create one"
        );
        return Ok(());
    };

    let hash = hash_password(password)?;
    let admin = user_repo.create(username, &hash, true).await?;

    tracing::info!("Created bootstrap admin account '{}'", admin.username);

    Ok(())
}

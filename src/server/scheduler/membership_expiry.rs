use chrono::{NaiveDate, Utc};
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{data::member::MemberRepository, error::AppError};

/// Every day at 00:05 UTC.
const SCHEDULE: &str = "0 5 0 * * *";

/// Starts the membership expiry scheduler
///
/// Runs one expiry pass immediately so members that lapsed while the server was down are
/// caught up, then schedules a daily pass.
///
/// # Arguments
/// - `db`: Database connection
pub async fn start_scheduler(db: DatabaseConnection) -> Result<(), AppError> {
    expire_lapsed_memberships(&db, Utc::now().date_naive()).await?;

    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();
    let job = Job::new_async(SCHEDULE, move |_uuid, _lock| {
        let db = job_db.clone();

        Box::pin(async move {
            if let Err(e) = expire_lapsed_memberships(&db, Utc::now().date_naive()).await {
                tracing::error!("Error expiring lapsed memberships: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Membership expiry scheduler started");

    Ok(())
}

/// Marks every `continue` member whose validity ended before `today` as `expired`.
///
/// Members who have `left` are never touched.
///
/// # Returns
/// - `Ok(u64)` - Number of members expired
pub async fn expire_lapsed_memberships(
    db: &DatabaseConnection,
    today: NaiveDate,
) -> Result<u64, AppError> {
    let expired = MemberRepository::new(db).expire_lapsed(today).await?;

    if expired > 0 {
        tracing::info!("Expired {} lapsed memberships", expired);
    }

    Ok(expired)
}

//! Attendance factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Appends a punch for a member.
///
/// # Arguments
/// - `db` - Database connection
/// - `member_id` - Member punching in or out
/// - `direction` - `"in"` or `"out"`
/// - `recorded_at` - Time of the punch
///
/// # Returns
/// - `Ok(entity::attendance::Model)` - Created record
/// - `Err(DbErr)` - Database error during insert
pub async fn create_attendance(
    db: &DatabaseConnection,
    member_id: i32,
    direction: &str,
    recorded_at: DateTime<Utc>,
) -> Result<entity::attendance::Model, DbErr> {
    entity::attendance::ActiveModel {
        member_id: ActiveValue::Set(member_id),
        direction: ActiveValue::Set(direction.to_string()),
        recorded_at: ActiveValue::Set(recorded_at),
        class_id: ActiveValue::Set(None),
        role_name: ActiveValue::Set(Some("member".to_string())),
        ..Default::default()
    }
    .insert(db)
    .await
}

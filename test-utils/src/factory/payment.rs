//! Payment factory.

use chrono::{Days, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an active, paid payment for a member on a plan.
///
/// The validity window starts on `valid_from` and lasts 30 days.
///
/// # Arguments
/// - `db` - Database connection
/// - `member_id` - Member the payment belongs to
/// - `membership_id` - Plan that was paid for
/// - `amount` - Amount paid
/// - `valid_from` - First day covered by the payment
///
/// # Returns
/// - `Ok(entity::payment::Model)` - Created payment
/// - `Err(DbErr)` - Database error during insert
pub async fn create_payment(
    db: &DatabaseConnection,
    member_id: i32,
    membership_id: i32,
    amount: f64,
    valid_from: NaiveDate,
) -> Result<entity::payment::Model, DbErr> {
    entity::payment::ActiveModel {
        member_id: ActiveValue::Set(member_id),
        membership_id: ActiveValue::Set(membership_id),
        amount: ActiveValue::Set(amount),
        valid_from: ActiveValue::Set(valid_from),
        valid_to: ActiveValue::Set(valid_from + Days::new(30)),
        status: ActiveValue::Set("paid".to_string()),
        active: ActiveValue::Set(true),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

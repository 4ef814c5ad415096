//! Unique values and multi-row shortcuts for factories.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Process-wide counter used to keep usernames, labels and mobiles unique.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a member enrolled on a freshly created plan.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((plan, member))` - The created plan and the member referencing it
/// - `Err(DbErr)` - Database error during creation
pub async fn create_member_with_plan(
    db: &DatabaseConnection,
) -> Result<(entity::membership_plan::Model, entity::member::Model), DbErr> {
    let plan = crate::factory::membership_plan::create_plan(db).await?;
    let member = crate::factory::member::MemberFactory::new(db)
        .membership_id(Some(plan.id))
        .build()
        .await?;

    Ok((plan, member))
}

use super::*;

/// Tests detection of an empty user table.
///
/// Expected: false before any user exists, true afterwards
#[tokio::test]
async fn detects_existing_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    assert!(!repo.any_exists().await?);

    factory::user::create_user(db).await?;

    assert!(repo.any_exists().await?);

    Ok(())
}

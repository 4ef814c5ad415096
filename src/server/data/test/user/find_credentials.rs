use super::*;

/// Tests credential lookup returns the stored hash.
///
/// Expected: Some((user, hash)) for a known username
#[tokio::test]
async fn returns_user_with_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .username("frontdesk")
        .password_hash("stored-hash")
        .admin(true)
        .build()
        .await?;

    let (user, hash) = UserRepository::new(db)
        .find_credentials("frontdesk")
        .await?
        .unwrap();

    assert_eq!(user.id, created.id);
    assert!(user.is_admin);
    assert_eq!(hash, "stored-hash");

    Ok(())
}

/// Tests credential lookup for an unknown username.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db).find_credentials("ghost").await?;

    assert!(result.is_none());

    Ok(())
}

use test_utils::{builder::TestBuilder, factory};

use super::*;
use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Resource},
};

/// Tests a request without an Authorization header.
///
/// Expected: Err(MissingToken)
#[tokio::test]
async fn rejects_missing_token() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &jwt, &headers)
        .authorize(Resource::Members)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));
}

/// Tests an admin reaching an admin resource.
///
/// Expected: Ok(User) for the token's subject
#[tokio::test]
async fn admits_admin() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();

    let admin = factory::user::UserFactory::new(db)
        .admin(true)
        .build()
        .await
        .unwrap();
    let headers = bearer(&jwt, &User::from_entity(admin.clone()), TokenType::Access);

    let user = AuthGuard::new(db, &jwt, &headers)
        .authorize(Resource::Ledger)
        .await
        .unwrap();

    assert_eq!(user.id, admin.id);
}

/// Tests a non-admin reaching an admin resource.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn denies_non_admin() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();

    let staff = factory::user::create_user(db).await.unwrap();
    let headers = bearer(&jwt, &User::from_entity(staff.clone()), TokenType::Access);

    let result = AuthGuard::new(db, &jwt, &headers)
        .authorize(Resource::Payments)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) if id == staff.id
    ));
}

/// Tests the auth check only needs a valid token.
///
/// Expected: Ok(User) for a non-admin
#[tokio::test]
async fn auth_check_admits_any_user() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();

    let staff = factory::user::create_user(db).await.unwrap();
    let headers = bearer(&jwt, &User::from_entity(staff.clone()), TokenType::Access);

    let result = AuthGuard::new(db, &jwt, &headers)
        .authorize(Resource::AuthProbe)
        .await;

    assert!(result.is_ok());
}

/// Tests a refresh token cannot be used as a bearer token.
///
/// Expected: Err(InvalidToken)
#[tokio::test]
async fn rejects_refresh_token() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();

    let admin = factory::user::UserFactory::new(db)
        .admin(true)
        .build()
        .await
        .unwrap();
    let headers = bearer(&jwt, &User::from_entity(admin.clone()), TokenType::Refresh);

    let result = AuthGuard::new(db, &jwt, &headers)
        .authorize(Resource::Members)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));
}

/// Tests a token whose user has been removed.
///
/// Expected: Err(UserNotInDatabase)
#[tokio::test]
async fn rejects_token_of_deleted_user() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();

    let ghost = User {
        id: 999,
        username: "ghost".to_string(),
        is_admin: true,
    };
    let headers = bearer(&jwt, &ghost, TokenType::Access);

    let result = AuthGuard::new(db, &jwt, &headers)
        .authorize(Resource::Members)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(999)))
    ));
}

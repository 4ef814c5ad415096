use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

use super::*;

/// Tests the member list requires an admin.
///
/// Expected: 401 without a token, 403 for a non-admin
#[tokio::test]
async fn requires_admin() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let staff = factory::user::create_user(db).await.unwrap();
    let token = token_for(&staff);

    let (anonymous, _) = send(app(db), request(Method::GET, "/api/members", None, None)).await;
    let (non_admin, _) = send(
        app(db),
        request(Method::GET, "/api/members", Some(&token), None),
    )
    .await;

    assert_eq!(anonymous, StatusCode::UNAUTHORIZED);
    assert_eq!(non_admin, StatusCode::FORBIDDEN);
}

/// Tests page links of the member list.
///
/// Expected: page 2 of 3 links to page 3 and back to the first page
#[tokio::test]
async fn pages_carry_links() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::user::UserFactory::new(db)
        .admin(true)
        .build()
        .await
        .unwrap();
    for _ in 0..3 {
        factory::member::create_member(db).await.unwrap();
    }

    let (status, body) = send(
        app(db),
        request(
            Method::GET,
            "/api/members?page_size=1&page=2",
            Some(&token_for(&admin)),
            None,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 3);
    assert_eq!(body["results"].as_array().unwrap().len(), 1);
    assert_eq!(body["next"], "http://gym.test/api/members?page_size=1&page=3");
    assert_eq!(body["previous"], "http://gym.test/api/members?page_size=1");
}

/// Tests a page past the end.
///
/// Expected: 404 `Invalid page.`
#[tokio::test]
async fn page_out_of_range_is_not_found() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::user::UserFactory::new(db)
        .admin(true)
        .build()
        .await
        .unwrap();

    let (status, body) = send(
        app(db),
        request(
            Method::GET,
            "/api/members?page=5",
            Some(&token_for(&admin)),
            None,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Invalid page.");
}

/// Tests the counter sub-views.
///
/// Expected: `total_members` counts every member, an unknown query is 400
#[tokio::test]
async fn answers_counter_queries() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::user::UserFactory::new(db)
        .admin(true)
        .build()
        .await
        .unwrap();
    let token = token_for(&admin);
    factory::member::create_member(db).await.unwrap();
    factory::member::create_member(db).await.unwrap();

    let (status, body) = send(
        app(db),
        request(
            Method::GET,
            "/api/members?query=total-members",
            Some(&token),
            None,
        ),
    )
    .await;
    let (unknown, _) = send(
        app(db),
        request(Method::GET, "/api/members?query=bogus", Some(&token), None),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"total_members": 2}));
    assert_eq!(unknown, StatusCode::BAD_REQUEST);
}

/// Tests registering a member over HTTP.
///
/// Expected: 201 with status `expired`, then 400 for a malformed body
#[tokio::test]
async fn creates_member() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::user::UserFactory::new(db)
        .admin(true)
        .build()
        .await
        .unwrap();
    let token = token_for(&admin);

    let (status, body) = send(
        app(db),
        request(
            Method::POST,
            "/api/members",
            Some(&token),
            Some(json!({
                "first_name": "Ada",
                "last_name": "Lovelace",
                "mobile": "9876543210",
                "dob": "1990-12-10"
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["membership_status"], "expired");
    assert_eq!(body["role_name"], "member");

    let (status, _) = send(
        app(db),
        request(
            Method::POST,
            "/api/members",
            Some(&token),
            Some(json!({"first_name": 12})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// Tests malformed query and path values answer like every other client error.
///
/// Expected: 400 with a JSON `error` body for `page=abc` and a non-numeric ID
#[tokio::test]
async fn malformed_query_and_path_get_error_body() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::user::UserFactory::new(db)
        .admin(true)
        .build()
        .await
        .unwrap();
    let token = token_for(&admin);

    for uri in ["/api/members?page=abc", "/api/members/abc"] {
        let (status, body) = send(app(db), request(Method::GET, uri, Some(&token), None)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert!(body["error"].as_str().is_some_and(|error| !error.is_empty()));
    }
}

/// Tests the largest representable page number.
///
/// Expected: 404 `Invalid page.`
#[tokio::test]
async fn huge_page_number_is_not_found() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::user::UserFactory::new(db)
        .admin(true)
        .build()
        .await
        .unwrap();
    factory::member::create_member(db).await.unwrap();

    let (status, body) = send(
        app(db),
        request(
            Method::GET,
            "/api/members?page=18446744073709551615",
            Some(&token_for(&admin)),
            None,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Invalid page.");
}

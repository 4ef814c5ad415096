use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

use super::*;

/// Tests accepting a payment renews the member.
///
/// Expected: 200 with the member on `continue` and a payment of the plan price
#[tokio::test]
async fn accept_payment_renews_member() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::user::UserFactory::new(db)
        .admin(true)
        .build()
        .await
        .unwrap();
    let plan = factory::membership_plan::create_named_plan(db, "Monthly", 1500.0, 30)
        .await
        .unwrap();
    let member = factory::member::create_member(db).await.unwrap();

    let (status, body) = send(
        app(db),
        request(
            Method::POST,
            "/api/accept-payment",
            Some(&token_for(&admin)),
            Some(json!({"member_id": member.id, "plan": "Monthly"})),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["member"]["membership_status"], "continue");
    assert_eq!(body["member"]["membership_id"], plan.id);
    assert_eq!(body["payment"]["amount"], 1500.0);
    assert_eq!(body["payment"]["active"], true);
}

/// Tests an unknown plan label.
///
/// Expected: 400 naming the `plan` field
#[tokio::test]
async fn accept_payment_rejects_unknown_plan() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::user::UserFactory::new(db)
        .admin(true)
        .build()
        .await
        .unwrap();
    let member = factory::member::create_member(db).await.unwrap();

    let (status, body) = send(
        app(db),
        request(
            Method::POST,
            "/api/accept-payment",
            Some(&token_for(&admin)),
            Some(json!({"member_id": member.id, "plan": "Lifetime"})),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["fields"]["plan"].is_array());
}

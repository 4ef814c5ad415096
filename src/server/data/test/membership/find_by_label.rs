use super::*;

/// Tests looking plans up by label.
///
/// Expected: matching plan for a known label, None otherwise
#[tokio::test]
async fn finds_plan_by_exact_label() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let cardio =
        factory::membership_plan::create_named_plan(db, "3 month Cardio", 5500.0, 90).await?;
    factory::membership_plan::create_named_plan(db, "Regular Monthly", 1500.0, 30).await?;

    let repo = MembershipPlanRepository::new(db);

    let found = repo.find_by_label("3 month Cardio").await?.unwrap();
    assert_eq!(found.id, cardio.id);
    assert_eq!(found.duration_days, 90);

    assert!(repo.find_by_label("Yoga Weekly").await?.is_none());

    Ok(())
}

use super::*;

/// Tests changing a plan's duration.
///
/// Expected: Ok(Some(plan)) with the new duration
#[tokio::test]
async fn updates_plan_duration() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let plan = factory::membership_plan::create_plan(db).await?;

    let updated = MembershipPlanRepository::new(db)
        .update(plan.id, plan_params("Regular Monthly", 31))
        .await?
        .unwrap();

    assert_eq!(updated.id, plan.id);
    assert_eq!(updated.duration_days, 31);

    Ok(())
}

/// Tests updating a plan that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_plan() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = MembershipPlanRepository::new(db)
        .update(999, plan_params("Ghost", 30))
        .await?;

    assert!(result.is_none());

    Ok(())
}

use super::*;

/// Tests creating a plan stores its duration and prices.
///
/// Expected: Ok(MembershipPlan) with every field as given
#[tokio::test]
async fn creates_plan() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let plan = MembershipPlanRepository::new(db)
        .create(plan_params("Regular Monthly", 30))
        .await?;

    assert_eq!(plan.label, "Regular Monthly");
    assert_eq!(plan.duration_days, 30);
    assert_eq!(plan.price, 1500.0);
    assert_eq!(plan.signup_fee, Some(500.0));

    Ok(())
}

/// Tests deleting a plan.
///
/// Expected: true the first time, false once the row is gone
#[tokio::test]
async fn deletes_plan() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let plan = factory::membership_plan::create_plan(db).await?;
    let repo = MembershipPlanRepository::new(db);

    assert!(repo.delete(plan.id).await?);
    assert!(!repo.delete(plan.id).await?);
    assert!(repo.get_by_id(plan.id).await?.is_none());

    Ok(())
}

use super::*;

/// Tests searching plans by class.
///
/// Expected: only plans whose class matches the term
#[tokio::test]
async fn searches_plans_by_class() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let cardio = factory::membership_plan::MembershipPlanFactory::new(db)
        .class("cardio")
        .build()
        .await?;
    factory::membership_plan::create_plan(db).await?;

    let (plans, total) = MembershipPlanRepository::new(db)
        .get_paginated(Some("Cardio"), PageRequest::default())
        .await?;

    assert_eq!(total, 1);
    assert_eq!(plans[0].id, cardio.id);

    Ok(())
}

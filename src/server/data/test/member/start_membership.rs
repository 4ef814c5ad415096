use super::*;

/// Tests starting a membership window.
///
/// Expected: plan, window and status `continue` stored on the member
#[tokio::test]
async fn sets_plan_window_and_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let plan = factory::membership_plan::create_plan(db).await?;
    let member = factory::member::create_member(db).await?;

    let updated = MemberRepository::new(db)
        .start_membership(member.id, plan.id, date(2026, 4, 1), date(2026, 5, 1))
        .await?
        .unwrap();

    assert_eq!(updated.membership_id, Some(plan.id));
    assert_eq!(updated.membership_valid_from, Some(date(2026, 4, 1)));
    assert_eq!(updated.membership_valid_to, Some(date(2026, 5, 1)));
    assert_eq!(updated.membership_status, MembershipStatus::Continue);

    Ok(())
}

/// Tests starting a membership for a member that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let plan = factory::membership_plan::create_plan(db).await?;

    let result = MemberRepository::new(db)
        .start_membership(999, plan.id, date(2026, 4, 1), date(2026, 5, 1))
        .await?;

    assert!(result.is_none());

    Ok(())
}

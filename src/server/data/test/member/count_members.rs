use super::*;

/// Tests member counts by status.
///
/// Verifies that the total counts every member regardless of status, that the role
/// comparison ignores case, and that non-member roles are excluded.
///
/// Expected: total 3, continue 1, left 1
#[tokio::test]
async fn counts_members_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::member::MemberFactory::new(db)
        .status("continue")
        .build()
        .await?;
    factory::member::MemberFactory::new(db)
        .role_name("MEMBER")
        .status("left")
        .build()
        .await?;
    factory::member::create_member(db).await?;
    factory::member::MemberFactory::new(db)
        .role_name("staff")
        .status("continue")
        .build()
        .await?;

    let repo = MemberRepository::new(db);

    assert_eq!(repo.count_members(None).await?, 3);
    assert_eq!(
        repo.count_members(Some(MembershipStatus::Continue)).await?,
        1
    );
    assert_eq!(repo.count_members(Some(MembershipStatus::Left)).await?, 1);

    Ok(())
}

/// Tests counting members enrolled on a plan.
///
/// Expected: only members referencing the plan are counted
#[tokio::test]
async fn counts_members_on_plan() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (plan, _) = factory::helpers::create_member_with_plan(db).await?;
    factory::member::MemberFactory::new(db)
        .membership_id(Some(plan.id))
        .build()
        .await?;
    factory::member::create_member(db).await?;

    let count = MemberRepository::new(db).count_on_plan(plan.id).await?;

    assert_eq!(count, 2);

    Ok(())
}

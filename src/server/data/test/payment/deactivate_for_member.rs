use super::*;

/// Tests deactivating a member's payments.
///
/// Verifies that only the given member's active payments are cleared.
///
/// Expected: one row affected, other member's payment still active
#[tokio::test]
async fn deactivates_only_that_members_payments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (plan, member) = factory::helpers::create_member_with_plan(db).await?;
    let other = factory::member::create_member(db).await?;
    let own = factory::payment::create_payment(db, member.id, plan.id, 1500.0, date(2026, 1, 1))
        .await?;
    let others =
        factory::payment::create_payment(db, other.id, plan.id, 1500.0, date(2026, 1, 1)).await?;

    let repo = PaymentRepository::new(db);
    let affected = repo.deactivate_for_member(member.id).await?;

    assert_eq!(affected, 1);
    assert!(!repo.get_by_id(own.id).await?.unwrap().active);
    assert!(repo.get_by_id(others.id).await?.unwrap().active);
    assert_eq!(repo.count_for_plan(plan.id).await?, 2);

    Ok(())
}

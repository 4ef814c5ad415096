use super::*;

/// Tests filtering payment history by member.
///
/// Expected: only the member's payments, newest first
#[tokio::test]
async fn filters_by_member_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (plan, member) = factory::helpers::create_member_with_plan(db).await?;
    let other = factory::member::create_member(db).await?;
    let first = factory::payment::create_payment(db, member.id, plan.id, 1500.0, date(2026, 1, 1))
        .await?;
    let second =
        factory::payment::create_payment(db, member.id, plan.id, 1500.0, date(2026, 2, 1))
            .await?;
    factory::payment::create_payment(db, other.id, plan.id, 1500.0, date(2026, 1, 1)).await?;

    let repo = PaymentRepository::new(db);

    let (payments, total) = repo
        .get_paginated(Some(member.id), PageRequest::default())
        .await?;
    assert_eq!(total, 2);
    let ids: Vec<i32> = payments.iter().map(|payment| payment.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    let (_, all) = repo.get_paginated(None, PageRequest::default()).await?;
    assert_eq!(all, 3);

    Ok(())
}

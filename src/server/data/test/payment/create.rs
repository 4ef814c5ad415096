use super::*;

/// Tests that a new payment is stored active and paid.
///
/// Expected: Ok(Payment) with active=true and status "paid"
#[tokio::test]
async fn creates_active_paid_payment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (plan, member) = factory::helpers::create_member_with_plan(db).await?;

    let payment = PaymentRepository::new(db)
        .create(CreatePaymentParams {
            member_id: member.id,
            membership_id: plan.id,
            amount: 1500.0,
            valid_from: date(2026, 5, 1),
            valid_to: date(2026, 5, 31),
        })
        .await?;

    assert_eq!(payment.member_id, member.id);
    assert_eq!(payment.amount, 1500.0);
    assert_eq!(payment.status, "paid");
    assert!(payment.active);

    Ok(())
}

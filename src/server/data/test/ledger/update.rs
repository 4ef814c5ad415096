use super::*;

/// Tests a full update of a live entry.
///
/// Expected: Ok(Some(entry)) with the new values
#[tokio::test]
async fn replaces_entry_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LedgerEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let entry = factory::ledger_entry::create_income(db, 10.0, date(2026, 1, 1)).await?;

    let updated = LedgerRepository::new(db)
        .update(
            entry.id,
            LedgerEntryParams {
                entry_type: EntryType::Income,
                label: "Personal training".to_string(),
                party: "Ada Lovelace".to_string(),
                receiver_id: Some(3),
                amount: 2500.0,
                entry_date: date(2026, 1, 2),
                payment_status: PaymentStatus::Partial,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.label, "Personal training");
    assert_eq!(updated.amount, 2500.0);
    assert_eq!(updated.payment_status, PaymentStatus::Partial);

    Ok(())
}

/// Tests that deleted entries cannot be updated.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_deleted_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LedgerEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let entry = factory::ledger_entry::LedgerEntryFactory::new(db)
        .expense()
        .deleted("Duplicate")
        .build()
        .await?;

    let result = LedgerRepository::new(db)
        .update(
            entry.id,
            LedgerEntryParams {
                entry_type: EntryType::Expense,
                label: "Electricity".to_string(),
                party: "Power Utility".to_string(),
                receiver_id: None,
                amount: 80.0,
                entry_date: date(2026, 1, 2),
                payment_status: PaymentStatus::Paid,
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}

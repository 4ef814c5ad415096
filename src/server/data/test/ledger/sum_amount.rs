use super::*;

/// Tests summing income and expenses.
///
/// Verifies that soft-deleted entries are excluded from totals.
///
/// Expected: revenue 300.0, expenses 75.5
#[tokio::test]
async fn sums_live_entries_per_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LedgerEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::ledger_entry::create_income(db, 100.0, date(2026, 1, 5)).await?;
    factory::ledger_entry::create_income(db, 200.0, date(2026, 2, 5)).await?;
    factory::ledger_entry::create_expense(db, 75.5, date(2026, 1, 9)).await?;
    factory::ledger_entry::LedgerEntryFactory::new(db)
        .income()
        .amount(1000.0)
        .deleted("Entered twice")
        .build()
        .await?;

    let repo = LedgerRepository::new(db);

    assert_eq!(repo.sum_amount(EntryType::Income).await?, 300.0);
    assert_eq!(repo.sum_amount(EntryType::Expense).await?, 75.5);

    Ok(())
}

/// Tests totals over an empty ledger.
///
/// Expected: 0.0 rather than an error or null
#[tokio::test]
async fn sums_to_zero_when_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LedgerEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let total = LedgerRepository::new(db)
        .sum_amount(EntryType::Expense)
        .await?;

    assert_eq!(total, 0.0);

    Ok(())
}

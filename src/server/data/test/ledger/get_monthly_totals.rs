use super::*;

/// Tests the per-month sums computed by the database.
///
/// Expected: one row per month with entries, each side summed separately, deleted
/// entries left out and a month with one side reporting 0 for the other
#[tokio::test]
async fn sums_live_entries_per_month() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LedgerEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::ledger_entry::create_income(db, 1500.0, date(2026, 1, 1)).await?;
    factory::ledger_entry::create_income(db, 500.0, date(2026, 1, 20)).await?;
    factory::ledger_entry::create_expense(db, 800.0, date(2026, 1, 5)).await?;
    factory::ledger_entry::create_expense(db, 40.0, date(2026, 3, 9)).await?;
    factory::ledger_entry::LedgerEntryFactory::new(db)
        .expense()
        .amount(999.0)
        .entry_date(date(2026, 2, 10))
        .deleted("Test")
        .build()
        .await?;

    let mut rows = LedgerRepository::new(db).get_monthly_totals().await?;
    rows.sort_by_key(|row| (row.year, row.month));

    assert_eq!(
        rows,
        vec![
            MonthlyReportRow {
                year: 2026,
                month: 1,
                total_revenue: 2000.0,
                total_expenses: 800.0,
            },
            MonthlyReportRow {
                year: 2026,
                month: 3,
                total_revenue: 0.0,
                total_expenses: 40.0,
            },
        ]
    );

    Ok(())
}

/// Tests an empty ledger.
///
/// Expected: no rows
#[tokio::test]
async fn empty_ledger_has_no_months() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LedgerEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(LedgerRepository::new(db).get_monthly_totals().await?.is_empty());

    Ok(())
}

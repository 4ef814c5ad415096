use super::*;

/// Tests filtering listings by entry type.
///
/// Expected: only income entries, latest entry date first, deleted ones excluded
#[tokio::test]
async fn filters_by_type_latest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LedgerEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let older = factory::ledger_entry::create_income(db, 10.0, date(2026, 1, 1)).await?;
    let newer = factory::ledger_entry::create_income(db, 20.0, date(2026, 2, 1)).await?;
    factory::ledger_entry::create_expense(db, 5.0, date(2026, 3, 1)).await?;
    factory::ledger_entry::LedgerEntryFactory::new(db)
        .income()
        .deleted("Test")
        .build()
        .await?;

    let filter = LedgerFilter {
        entry_type: Some(EntryType::Income),
        search: None,
    };
    let (entries, total) = LedgerRepository::new(db)
        .get_paginated(&filter, PageRequest::default())
        .await?;

    assert_eq!(total, 2);
    let ids: Vec<i32> = entries.iter().map(|entry| entry.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}

/// Tests the search term matches the party case-insensitively.
///
/// Expected: the single entry from the matching supplier
#[tokio::test]
async fn searches_by_party() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LedgerEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let supplier = factory::ledger_entry::LedgerEntryFactory::new(db)
        .expense()
        .party("Iron Supplies Ltd")
        .build()
        .await?;
    factory::ledger_entry::LedgerEntryFactory::new(db)
        .expense()
        .party("Power Utility")
        .build()
        .await?;

    let filter = LedgerFilter {
        entry_type: None,
        search: Some("iron".to_string()),
    };
    let (entries, total) = LedgerRepository::new(db)
        .get_paginated(&filter, PageRequest::default())
        .await?;

    assert_eq!(total, 1);
    assert_eq!(entries[0].id, supplier.id);

    Ok(())
}

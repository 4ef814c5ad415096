use super::*;

/// Tests soft deletion keeps the row with its reason.
///
/// Verifies that the entry disappears from repository reads while the stored row
/// carries `deleted_at` and the reason.
///
/// Expected: true, then get_by_id returns None and a second delete returns false
#[tokio::test]
async fn stamps_entry_and_hides_it() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LedgerEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let entry = factory::ledger_entry::create_expense(db, 40.0, date(2026, 3, 2)).await?;
    let repo = LedgerRepository::new(db);

    assert!(
        repo.soft_delete(entry.id, Some("Wrong supplier".to_string()))
            .await?
    );
    assert!(repo.get_by_id(entry.id).await?.is_none());
    assert!(!repo.soft_delete(entry.id, None).await?);

    let stored = entity::prelude::LedgerEntry::find_by_id(entry.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.deleted_at.is_some());
    assert_eq!(stored.delete_reason.as_deref(), Some("Wrong supplier"));

    Ok(())
}

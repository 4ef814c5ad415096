use super::*;

/// Tests the bulk expiry update.
///
/// Verifies that only `continue` members whose window ended before the given day are
/// expired, and that members without a window are left alone.
///
/// Expected: one row affected
#[tokio::test]
async fn expires_lapsed_continue_members_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lapsed = factory::member::MemberFactory::new(db)
        .status("continue")
        .validity(Some(date(2026, 1, 1)), Some(date(2026, 1, 31)))
        .build()
        .await?;
    factory::member::MemberFactory::new(db)
        .status("continue")
        .build()
        .await?;
    factory::member::MemberFactory::new(db)
        .status("left")
        .validity(Some(date(2025, 1, 1)), Some(date(2025, 1, 31)))
        .build()
        .await?;

    let repo = MemberRepository::new(db);
    let affected = repo.expire_lapsed(date(2026, 2, 1)).await?;

    assert_eq!(affected, 1);
    let lapsed = repo.get_by_id(lapsed.id).await?.unwrap();
    assert_eq!(lapsed.membership_status, MembershipStatus::Expired);

    Ok(())
}

use super::*;

/// Tests that updating details leaves the validity window alone.
///
/// Expected: names changed, window and status preserved
#[tokio::test]
async fn updates_details_but_not_window() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::member::MemberFactory::new(db)
        .status("continue")
        .validity(Some(date(2026, 3, 1)), Some(date(2026, 3, 31)))
        .build()
        .await?;

    let mut params = member_params("Renamed", &existing.mobile);
    params.membership_status = None;

    let updated = MemberRepository::new(db)
        .update(existing.id, params)
        .await?
        .unwrap();

    assert_eq!(updated.first_name, "Renamed");
    assert_eq!(updated.membership_status, MembershipStatus::Continue);
    assert_eq!(updated.membership_valid_from, Some(date(2026, 3, 1)));
    assert_eq!(updated.membership_valid_to, Some(date(2026, 3, 31)));

    Ok(())
}

/// Tests updating a member that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = MemberRepository::new(db)
        .update(999, member_params("Nobody", "9800000404"))
        .await?;

    assert!(result.is_none());

    Ok(())
}

use super::*;

/// Tests creating a member without a status.
///
/// Verifies that a freshly registered member has no validity window and starts in
/// status `expired` until the first renewal.
///
/// Expected: Ok(Member) with status Expired
#[tokio::test]
async fn creates_member_as_expired_by_default() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    let member = repo.create(member_params("Ada", "9800000001")).await?;

    assert_eq!(member.first_name, "Ada");
    assert_eq!(member.role_name, "member");
    assert_eq!(member.membership_status, MembershipStatus::Expired);
    assert!(member.membership_valid_from.is_none());
    assert!(member.membership_valid_to.is_none());

    Ok(())
}

/// Tests creating a member with an explicit status.
///
/// Expected: Ok(Member) with the given status
#[tokio::test]
async fn creates_member_with_given_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut params = member_params("Grace", "9800000002");
    params.membership_status = Some(MembershipStatus::Left);

    let member = MemberRepository::new(db).create(params).await?;

    assert_eq!(member.membership_status, MembershipStatus::Left);

    Ok(())
}

/// Tests the mobile number uniqueness check.
///
/// Verifies that a taken number is reported, except when checking against the member
/// that owns it.
///
/// Expected: true for other members, false for the owner
#[tokio::test]
async fn reports_taken_mobile_numbers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    let member = repo.create(member_params("Ada", "9800000003")).await?;

    assert!(repo.mobile_taken("9800000003", None).await?);
    assert!(!repo.mobile_taken("9800000003", Some(member.id)).await?);
    assert!(!repo.mobile_taken("9800000099", None).await?);

    Ok(())
}

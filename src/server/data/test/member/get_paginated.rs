use super::*;

/// Tests that listings only include members with role `member`, newest first.
///
/// Expected: staff rows excluded, total counts members only
#[tokio::test]
async fn lists_only_members_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::member::create_member(db).await?;
    let second = factory::member::MemberFactory::new(db)
        .role_name("Member")
        .build()
        .await?;
    factory::member::MemberFactory::new(db)
        .role_name("trainer")
        .build()
        .await?;

    let (members, total) = MemberRepository::new(db)
        .get_paginated(None, PageRequest::default())
        .await?;

    assert_eq!(total, 2);
    let ids: Vec<i32> = members.iter().map(|member| member.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    Ok(())
}

/// Tests the global search across text fields.
///
/// Verifies that the search term matches case-insensitively on name and address.
///
/// Expected: only matching members returned
#[tokio::test]
async fn searches_across_text_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ada = factory::member::MemberFactory::new(db)
        .first_name("Ada")
        .build()
        .await?;
    let lakeside = factory::member::MemberFactory::new(db)
        .address(Some("4 Lakeside Avenue".to_string()))
        .build()
        .await?;
    factory::member::MemberFactory::new(db)
        .first_name("Grace")
        .build()
        .await?;

    let repo = MemberRepository::new(db);

    let (by_name, total) = repo.get_paginated(Some("ada"), PageRequest::default()).await?;
    assert_eq!(total, 1);
    assert_eq!(by_name[0].id, ada.id);

    let (by_address, _) = repo
        .get_paginated(Some("LAKESIDE"), PageRequest::default())
        .await?;
    assert_eq!(by_address.len(), 1);
    assert_eq!(by_address[0].id, lakeside.id);

    Ok(())
}

/// Tests fetching a later page.
///
/// Expected: remaining rows on page 2, total unchanged
#[tokio::test]
async fn fetches_requested_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::member::create_member(db).await?;
    }

    let page = PageRequest {
        page: 2,
        page_size: 3,
    };
    let (members, total) = MemberRepository::new(db).get_paginated(None, page).await?;

    assert_eq!(total, 5);
    assert_eq!(members.len(), 2);

    Ok(())
}

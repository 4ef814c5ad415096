use super::*;

/// Tests listing one member's punches, latest first.
///
/// Expected: two records for the member in reverse time order
#[tokio::test]
async fn lists_member_punches_latest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::create_member(db).await?;
    let other = factory::member::create_member(db).await?;
    let start = Utc.with_ymd_and_hms(2026, 4, 2, 6, 0, 0).unwrap();

    let punch_in = factory::attendance::create_attendance(db, member.id, "in", start).await?;
    let punch_out =
        factory::attendance::create_attendance(db, member.id, "out", start + Duration::hours(1))
            .await?;
    factory::attendance::create_attendance(db, other.id, "in", start).await?;

    let filter = AttendanceFilter {
        member_id: Some(member.id),
        search: None,
    };
    let (records, total) = AttendanceRepository::new(db)
        .get_paginated(&filter, PageRequest::default())
        .await?;

    assert_eq!(total, 2);
    let ids: Vec<i32> = records.iter().map(|record| record.id).collect();
    assert_eq!(ids, vec![punch_out.id, punch_in.id]);

    Ok(())
}

/// Tests searching punches by direction.
///
/// Expected: only `out` punches
#[tokio::test]
async fn searches_by_direction() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::create_member(db).await?;
    let at = Utc.with_ymd_and_hms(2026, 4, 2, 6, 0, 0).unwrap();
    factory::attendance::create_attendance(db, member.id, "in", at).await?;
    factory::attendance::create_attendance(db, member.id, "out", at).await?;

    let filter = AttendanceFilter {
        member_id: None,
        search: Some("out".to_string()),
    };
    let (records, total) = AttendanceRepository::new(db)
        .get_paginated(&filter, PageRequest::default())
        .await?;

    assert_eq!(total, 1);
    assert_eq!(records[0].direction, Direction::Out);

    Ok(())
}

use super::*;

/// Tests appending a punch.
///
/// Expected: Ok(AttendanceRecord) with the given direction and time
#[tokio::test]
async fn records_punch() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::create_member(db).await?;
    let at = Utc.with_ymd_and_hms(2026, 4, 2, 6, 30, 0).unwrap();

    let record = AttendanceRepository::new(db)
        .create(CreateAttendanceParams {
            member_id: member.id,
            direction: Direction::In,
            recorded_at: at,
            class_id: None,
            role_name: Some("member".to_string()),
        })
        .await?;

    assert_eq!(record.member_id, member.id);
    assert_eq!(record.direction, Direction::In);
    assert_eq!(record.recorded_at, at);

    Ok(())
}

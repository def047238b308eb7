use super::*;

/// Tests that unblocking removes only blocked rows inside the range.
///
/// Blocked rows outside the range and explicitly open rows inside it must
/// survive.
///
/// Expected: Ok(2) with the out-of-range block and the open row intact
#[tokio::test]
async fn removes_only_blocked_rows_in_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _country, _city, _hotel, room) =
        factory::helpers::create_room_with_dependencies(db).await?;

    let repo = AvailabilityRepository::new(db);
    repo.block_date(room.id, date(2026, 9, 1), None).await?;
    repo.block_date(room.id, date(2026, 9, 2), None).await?;
    repo.open_date(room.id, date(2026, 9, 3), Some(60.0)).await?;
    repo.block_date(room.id, date(2026, 9, 5), None).await?;

    let removed = repo
        .unblock_range(room.id, date(2026, 9, 1), date(2026, 9, 5))
        .await?;
    assert_eq!(removed, 2);

    let remaining = entity::prelude::RoomAvailability::find().all(db).await?;
    assert_eq!(remaining.len(), 2);
    assert!(remaining
        .iter()
        .any(|entry| entry.date == date(2026, 9, 3) && entry.is_available));
    assert!(remaining
        .iter()
        .any(|entry| entry.date == date(2026, 9, 5) && !entry.is_available));

    Ok(())
}

/// Tests unblocking a range with no blocked rows.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_when_nothing_blocked() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _country, _city, _hotel, room) =
        factory::helpers::create_room_with_dependencies(db).await?;

    let removed = AvailabilityRepository::new(db)
        .unblock_range(room.id, date(2026, 9, 1), date(2026, 9, 5))
        .await?;

    assert_eq!(removed, 0);

    Ok(())
}

/// Tests that unblocking one room leaves another room's blocks alone.
///
/// Expected: Ok(0) and the other room still blocked
#[tokio::test]
async fn does_not_touch_other_rooms() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _country, _city, hotel, room) =
        factory::helpers::create_room_with_dependencies(db).await?;
    let other_room = factory::create_room(db, hotel.id).await?;

    let repo = AvailabilityRepository::new(db);
    repo.block_date(other_room.id, date(2026, 9, 2), None).await?;

    let removed = repo
        .unblock_range(room.id, date(2026, 9, 1), date(2026, 9, 5))
        .await?;
    assert_eq!(removed, 0);

    let available = repo
        .is_range_available(other_room.id, date(2026, 9, 1), date(2026, 9, 5))
        .await?;
    assert!(!available);

    Ok(())
}

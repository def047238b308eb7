use super::*;

/// Tests availability of a room with no ledger rows at all.
///
/// The ledger is open-world: absence of rows means available.
///
/// Expected: Ok(true)
#[tokio::test]
async fn empty_ledger_is_available() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _country, _city, _hotel, room) =
        factory::helpers::create_room_with_dependencies(db).await?;

    let available = AvailabilityRepository::new(db)
        .is_range_available(room.id, date(2026, 9, 1), date(2026, 9, 5))
        .await?;

    assert!(available);

    Ok(())
}

/// Tests that a single blocked date anywhere in the range makes the whole
/// range unavailable.
///
/// Expected: Ok(false)
#[tokio::test]
async fn blocked_date_inside_range_blocks() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _country, _city, _hotel, room) =
        factory::helpers::create_room_with_dependencies(db).await?;

    let repo = AvailabilityRepository::new(db);
    repo.block_date(room.id, date(2026, 9, 3), None).await?;

    let available = repo
        .is_range_available(room.id, date(2026, 9, 1), date(2026, 9, 5))
        .await?;

    assert!(!available);

    Ok(())
}

/// Tests the half-open interval boundary.
///
/// A block exactly on the check-out day must not affect the range, so a
/// departing and an arriving stay can share that date.
///
/// Expected: Ok(true)
#[tokio::test]
async fn block_on_checkout_day_does_not_count() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _country, _city, _hotel, room) =
        factory::helpers::create_room_with_dependencies(db).await?;

    let repo = AvailabilityRepository::new(db);
    repo.block_date(room.id, date(2026, 9, 5), None).await?;

    let available = repo
        .is_range_available(room.id, date(2026, 9, 1), date(2026, 9, 5))
        .await?;

    assert!(available);

    Ok(())
}

/// Tests that explicitly open ledger rows do not count against the range.
///
/// Expected: Ok(true)
#[tokio::test]
async fn open_entries_do_not_block() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _country, _city, _hotel, room) =
        factory::helpers::create_room_with_dependencies(db).await?;

    let repo = AvailabilityRepository::new(db);
    repo.open_date(room.id, date(2026, 9, 2), Some(75.0)).await?;
    repo.open_date(room.id, date(2026, 9, 3), None).await?;

    let available = repo
        .is_range_available(room.id, date(2026, 9, 1), date(2026, 9, 5))
        .await?;

    assert!(available);

    Ok(())
}

/// Tests that blocks on another room leave this room's range available.
///
/// Expected: Ok(true)
#[tokio::test]
async fn other_rooms_blocks_are_ignored() -> Result<(), DbErr> {
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
    repo.block_date(other_room.id, date(2026, 9, 3), None).await?;

    let available = repo
        .is_range_available(room.id, date(2026, 9, 1), date(2026, 9, 5))
        .await?;

    assert!(available);

    Ok(())
}

use super::*;

/// Tests listing blocked entries in a range.
///
/// Verifies ordering by date and that open entries, out-of-range blocks,
/// and the check-out day itself are excluded.
///
/// Expected: Ok with the two in-range blocked entries, ascending
#[tokio::test]
async fn lists_blocked_entries_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _country, _city, _hotel, room) =
        factory::helpers::create_room_with_dependencies(db).await?;

    let repo = AvailabilityRepository::new(db);
    repo.block_date(room.id, date(2026, 9, 4), None).await?;
    repo.block_date(room.id, date(2026, 9, 2), None).await?;
    repo.open_date(room.id, date(2026, 9, 3), None).await?;
    repo.block_date(room.id, date(2026, 9, 5), None).await?;

    let entries = repo
        .list_unavailable(room.id, date(2026, 9, 1), date(2026, 9, 5))
        .await?;

    let dates: Vec<_> = entries.iter().map(|entry| entry.date).collect();
    assert_eq!(dates, vec![date(2026, 9, 2), date(2026, 9, 4)]);

    Ok(())
}

/// Tests listing a range with no blocked entries.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn empty_for_unblocked_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _country, _city, _hotel, room) =
        factory::helpers::create_room_with_dependencies(db).await?;

    let entries = AvailabilityRepository::new(db)
        .list_unavailable(room.id, date(2026, 9, 1), date(2026, 9, 5))
        .await?;

    assert!(entries.is_empty());

    Ok(())
}

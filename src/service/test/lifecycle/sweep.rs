use super::*;

/// Tests one sweep over both kinds of stale bookings.
///
/// A confirmed booking past its check-out completes; a pending booking
/// past its check-in expires. Bookings whose dates have not passed are
/// untouched.
///
/// Expected: one completion, one expiry, live bookings unchanged
#[tokio::test]
async fn completes_and_expires_stale_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _country, _city, _hotel, room) =
        factory::helpers::create_room_with_dependencies(db).await?;

    let finished = factory::booking::BookingFactory::new(db, user.id, room.id)
        .status(BookingStatus::Confirmed)
        .check_in_date(date(2026, 9, 1))
        .check_out_date(date(2026, 9, 4))
        .build()
        .await?;
    let stale = factory::booking::BookingFactory::new(db, user.id, room.id)
        .check_in_date(date(2026, 9, 2))
        .check_out_date(date(2026, 9, 6))
        .build()
        .await?;
    let upcoming = factory::booking::BookingFactory::new(db, user.id, room.id)
        .check_in_date(date(2026, 9, 20))
        .check_out_date(date(2026, 9, 22))
        .build()
        .await?;

    let report = LifecycleService::sweep(db, date(2026, 9, 10)).await.unwrap();

    assert_eq!(report.completed, 1);
    assert_eq!(report.expired, 1);

    let statuses = [
        (finished.id, BookingStatus::Completed),
        (stale.id, BookingStatus::Cancelled),
        (upcoming.id, BookingStatus::Pending),
    ];
    for (id, expected) in statuses {
        let stored = entity::booking::Entity::find_by_id(id)
            .one(db)
            .await?
            .unwrap();
        assert_eq!(stored.status, expected);
    }

    Ok(())
}

/// Tests that a repeated sweep finds nothing left to do.
///
/// Expected: the second report is all zeros
#[tokio::test]
async fn second_sweep_is_a_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _country, _city, _hotel, room) =
        factory::helpers::create_room_with_dependencies(db).await?;
    factory::booking::BookingFactory::new(db, user.id, room.id)
        .status(BookingStatus::Confirmed)
        .check_in_date(date(2026, 9, 1))
        .check_out_date(date(2026, 9, 4))
        .build()
        .await?;

    let first = LifecycleService::sweep(db, date(2026, 9, 10)).await.unwrap();
    assert_eq!(first.completed, 1);

    let second = LifecycleService::sweep(db, date(2026, 9, 10)).await.unwrap();
    assert_eq!(second.completed, 0);
    assert_eq!(second.expired, 0);

    Ok(())
}

/// Tests what auto-expiry deliberately does not do.
///
/// Expiring a no-show flips the status only. It writes no cancellation
/// record and leaves the blocked dates in the ledger; releasing them is
/// an explicit cancellation's job.
///
/// Expected: status cancelled, zero cancellation rows, dates still blocked
#[tokio::test]
async fn expiry_leaves_ledger_and_writes_no_cancellation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _country, _city, _hotel, room) =
        factory::helpers::create_room_with_dependencies(db).await?;

    let booking = BookingService::create(
        db,
        user.id,
        CreateBookingDto {
            room_id: room.id,
            check_in_date: date(2026, 9, 1),
            check_out_date: date(2026, 9, 4),
            additional_info: None,
        },
    )
    .await
    .unwrap();

    let report = LifecycleService::sweep(db, date(2026, 9, 10)).await.unwrap();
    assert_eq!(report.expired, 1);

    let stored = entity::booking::Entity::find_by_id(booking.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, BookingStatus::Cancelled);

    let cancellations = entity::cancellation::Entity::find().count(db).await?;
    assert_eq!(cancellations, 0);

    let available = AvailabilityRepository::new(db)
        .is_range_available(room.id, date(2026, 9, 1), date(2026, 9, 4))
        .await?;
    assert!(!available);

    Ok(())
}

/// Tests the boundary dates of both sweep queries.
///
/// A stay ending today and a check-in today are not yet stale.
///
/// Expected: nothing transitions
#[tokio::test]
async fn boundary_dates_are_not_swept() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _country, _city, _hotel, room) =
        factory::helpers::create_room_with_dependencies(db).await?;

    factory::booking::BookingFactory::new(db, user.id, room.id)
        .status(BookingStatus::Confirmed)
        .check_in_date(date(2026, 9, 7))
        .check_out_date(date(2026, 9, 10))
        .build()
        .await?;
    factory::booking::BookingFactory::new(db, user.id, room.id)
        .check_in_date(date(2026, 9, 10))
        .check_out_date(date(2026, 9, 12))
        .build()
        .await?;

    let report = LifecycleService::sweep(db, date(2026, 9, 10)).await.unwrap();

    assert_eq!(report.completed, 0);
    assert_eq!(report.expired, 0);

    Ok(())
}

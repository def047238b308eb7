use super::*;

/// Tests booking creation through the full service path.
///
/// Expected: a pending booking whose nights are blocked in the ledger
#[tokio::test]
async fn creates_pending_booking_and_blocks_dates() -> Result<(), DbErr> {
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

    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.user_id, Some(user.id));

    // Three nights, three ledger rows.
    let blocked = entity::room_availability::Entity::find().count(db).await?;
    assert_eq!(blocked, 3);

    let available = AvailabilityRepository::new(db)
        .is_range_available(room.id, date(2026, 9, 1), date(2026, 9, 4))
        .await?;
    assert!(!available);

    Ok(())
}

/// Tests that an overlapping second booking is rejected without side
/// effects.
///
/// Expected: RoomUnavailable, one booking row, three ledger rows
#[tokio::test]
async fn rejects_overlapping_booking_without_side_effects() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _country, _city, _hotel, room) =
        factory::helpers::create_room_with_dependencies(db).await?;

    BookingService::create(
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

    let err = BookingService::create(
        db,
        user.id,
        CreateBookingDto {
            room_id: room.id,
            check_in_date: date(2026, 9, 3),
            check_out_date: date(2026, 9, 6),
            additional_info: None,
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(
        err,
        AppError::BookingErr(BookingError::RoomUnavailable)
    ));

    let bookings = entity::booking::Entity::find().count(db).await?;
    assert_eq!(bookings, 1);
    let blocked = entity::room_availability::Entity::find().count(db).await?;
    assert_eq!(blocked, 3);

    Ok(())
}

/// Tests the half-open range boundary between two stays.
///
/// The check-out day is not a night of the stay, so a second booking may
/// check in the day the first checks out.
///
/// Expected: both bookings succeed
#[tokio::test]
async fn back_to_back_bookings_share_turnover_day() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _country, _city, _hotel, room) =
        factory::helpers::create_room_with_dependencies(db).await?;

    BookingService::create(
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

    let second = BookingService::create(
        db,
        user.id,
        CreateBookingDto {
            room_id: room.id,
            check_in_date: date(2026, 9, 4),
            check_out_date: date(2026, 9, 6),
            additional_info: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(second.check_in_date, date(2026, 9, 4));

    Ok(())
}

/// Tests that a check-out on or before check-in is rejected.
///
/// Expected: InvalidRange for both equal and inverted dates
#[tokio::test]
async fn rejects_empty_or_inverted_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _country, _city, _hotel, room) =
        factory::helpers::create_room_with_dependencies(db).await?;

    for check_out in [date(2026, 9, 1), date(2026, 8, 30)] {
        let err = BookingService::create(
            db,
            user.id,
            CreateBookingDto {
                room_id: room.id,
                check_in_date: date(2026, 9, 1),
                check_out_date: check_out,
                additional_info: None,
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(
            err,
            AppError::BookingErr(BookingError::InvalidRange)
        ));
    }

    Ok(())
}

/// Tests booking a room that does not exist.
///
/// Expected: 404-style NotFound
#[tokio::test]
async fn rejects_unknown_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let err = BookingService::create(
        db,
        user.id,
        CreateBookingDto {
            room_id: 999_999,
            check_in_date: date(2026, 9, 1),
            check_out_date: date(2026, 9, 4),
            additional_info: None,
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));

    Ok(())
}

/// Tests that a manually blocked date inside the range rejects the
/// booking.
///
/// Expected: RoomUnavailable and no booking row
#[tokio::test]
async fn rejects_range_covering_blocked_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _country, _city, _hotel, room) =
        factory::helpers::create_room_with_dependencies(db).await?;

    AvailabilityRepository::new(db)
        .block_date(room.id, date(2026, 9, 2), None)
        .await?;

    let err = BookingService::create(
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
    .unwrap_err();

    assert!(matches!(
        err,
        AppError::BookingErr(BookingError::RoomUnavailable)
    ));

    let bookings = entity::booking::Entity::find().count(db).await?;
    assert_eq!(bookings, 0);

    Ok(())
}

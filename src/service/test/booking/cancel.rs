use super::*;

/// Tests cancellation of a live booking.
///
/// Expected: a cancellation record, status cancelled, dates free again
#[tokio::test]
async fn cancels_booking_and_frees_dates() -> Result<(), DbErr> {
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

    let cancellation = BookingService::cancel(db, booking.id, 25.0).await.unwrap();

    assert_eq!(cancellation.booking_id, booking.id);
    assert_eq!(cancellation.refund_amount, 25.0);

    let stored = entity::booking::Entity::find_by_id(booking.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, BookingStatus::Cancelled);

    let available = AvailabilityRepository::new(db)
        .is_range_available(room.id, date(2026, 9, 1), date(2026, 9, 4))
        .await?;
    assert!(available);

    Ok(())
}

/// Tests that the freed range is immediately bookable by someone else.
///
/// Expected: the second booking succeeds after the first is cancelled
#[tokio::test]
async fn freed_range_can_be_rebooked() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _country, _city, _hotel, room) =
        factory::helpers::create_room_with_dependencies(db).await?;
    let other = factory::create_user(db).await?;

    let dto = || CreateBookingDto {
        room_id: room.id,
        check_in_date: date(2026, 9, 1),
        check_out_date: date(2026, 9, 4),
        additional_info: None,
    };

    let booking = BookingService::create(db, user.id, dto()).await.unwrap();
    BookingService::cancel(db, booking.id, 0.0).await.unwrap();

    let rebooked = BookingService::create(db, other.id, dto()).await.unwrap();
    assert_eq!(rebooked.user_id, Some(other.id));

    Ok(())
}

/// Tests cancelling a booking that is already in a terminal status.
///
/// Expected: InvalidState and no cancellation record
#[tokio::test]
async fn rejects_terminal_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _country, _city, _hotel, room) =
        factory::helpers::create_room_with_dependencies(db).await?;
    let booking = factory::booking::BookingFactory::new(db, user.id, room.id)
        .status(BookingStatus::Completed)
        .build()
        .await?;

    let err = BookingService::cancel(db, booking.id, 0.0).await.unwrap_err();

    assert!(matches!(
        err,
        AppError::BookingErr(BookingError::InvalidState { .. })
    ));

    let cancellations = entity::cancellation::Entity::find().count(db).await?;
    assert_eq!(cancellations, 0);

    Ok(())
}

/// Tests cancelling the same booking twice.
///
/// The second attempt hits the terminal-status check, so only one
/// cancellation record ever exists.
///
/// Expected: InvalidState on the second call, one cancellation row
#[tokio::test]
async fn second_cancellation_is_rejected() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _country, _city, _hotel, room) =
        factory::helpers::create_room_with_dependencies(db).await?;
    let booking = factory::create_booking(db, user.id, room.id).await?;

    BookingService::cancel(db, booking.id, 10.0).await.unwrap();
    let err = BookingService::cancel(db, booking.id, 10.0).await.unwrap_err();

    assert!(matches!(
        err,
        AppError::BookingErr(BookingError::InvalidState { .. })
    ));

    let cancellations = entity::cancellation::Entity::find().count(db).await?;
    assert_eq!(cancellations, 1);

    Ok(())
}

/// Tests cancelling a booking that does not exist.
///
/// Expected: NotFound
#[tokio::test]
async fn rejects_unknown_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let err = BookingService::cancel(db, 999_999, 0.0).await.unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));

    Ok(())
}

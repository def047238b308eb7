use super::*;

/// Tests creating a booking through the repository.
///
/// Verifies the booking starts pending with today's booking date and the
/// provided stay range.
///
/// Expected: Ok with a pending booking dated today
#[tokio::test]
async fn creates_pending_booking_dated_today() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _country, _city, _hotel, room) =
        factory::helpers::create_room_with_dependencies(db).await?;

    let today = Utc::now().date_naive();
    let booking = BookingRepository::new(db)
        .create(
            user.id,
            room.id,
            today + Duration::days(3),
            today + Duration::days(6),
            Some("Late arrival".to_string()),
        )
        .await?;

    assert_eq!(booking.user_id, Some(user.id));
    assert_eq!(booking.room_id, Some(room.id));
    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.booking_date, today);
    assert_eq!(booking.check_in_date, today + Duration::days(3));
    assert_eq!(booking.check_out_date, today + Duration::days(6));
    assert_eq!(booking.additional_info, Some("Late arrival".to_string()));

    Ok(())
}

use super::*;

/// Tests listing a user's bookings.
///
/// Verifies the list is scoped to the user and ordered with the most
/// recent stay first.
///
/// Expected: the user's two bookings, newest check-in first
#[tokio::test]
async fn lists_own_bookings_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _country, _city, _hotel, room) =
        factory::helpers::create_room_with_dependencies(db).await?;
    let other_user = factory::create_user(db).await?;

    let today = Utc::now().date_naive();

    let earlier = factory::booking::BookingFactory::new(db, user.id, room.id)
        .check_in_date(today + Duration::days(3))
        .check_out_date(today + Duration::days(5))
        .build()
        .await?;
    let later = factory::booking::BookingFactory::new(db, user.id, room.id)
        .check_in_date(today + Duration::days(10))
        .check_out_date(today + Duration::days(12))
        .build()
        .await?;
    let _other = factory::create_booking(db, other_user.id, room.id).await?;

    let bookings = BookingRepository::new(db).find_by_user(user.id).await?;

    let ids: Vec<_> = bookings.iter().map(|booking| booking.id).collect();
    assert_eq!(ids, vec![later.id, earlier.id]);

    Ok(())
}

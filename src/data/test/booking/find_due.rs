use super::*;

/// Tests the completion candidate query boundary.
///
/// A confirmed booking is due only once its check-out is strictly before
/// today; a stay ending today is still in progress.
///
/// Expected: only the booking that checked out yesterday
#[tokio::test]
async fn completion_is_due_strictly_after_checkout() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _country, _city, _hotel, room) =
        factory::helpers::create_room_with_dependencies(db).await?;

    let today = Utc::now().date_naive();

    let past = factory::booking::BookingFactory::new(db, user.id, room.id)
        .status(BookingStatus::Confirmed)
        .check_in_date(today - Duration::days(4))
        .check_out_date(today - Duration::days(1))
        .build()
        .await?;
    let _ending_today = factory::booking::BookingFactory::new(db, user.id, room.id)
        .status(BookingStatus::Confirmed)
        .check_in_date(today - Duration::days(2))
        .check_out_date(today)
        .build()
        .await?;
    let _still_pending = factory::booking::BookingFactory::new(db, user.id, room.id)
        .check_in_date(today - Duration::days(4))
        .check_out_date(today - Duration::days(1))
        .build()
        .await?;

    let due = BookingRepository::new(db).find_due_completion(today).await?;

    assert_eq!(due.len(), 1);
    assert_eq!(due[0].id, past.id);

    Ok(())
}

/// Tests the expiry candidate query boundary.
///
/// A pending booking expires only once its check-in is strictly before
/// today; check-in today can still be confirmed.
///
/// Expected: only the pending booking whose check-in passed
#[tokio::test]
async fn expiry_is_due_strictly_after_checkin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _country, _city, _hotel, room) =
        factory::helpers::create_room_with_dependencies(db).await?;

    let today = Utc::now().date_naive();

    let stale = factory::booking::BookingFactory::new(db, user.id, room.id)
        .check_in_date(today - Duration::days(1))
        .check_out_date(today + Duration::days(2))
        .build()
        .await?;
    let _checkin_today = factory::booking::BookingFactory::new(db, user.id, room.id)
        .check_in_date(today)
        .check_out_date(today + Duration::days(2))
        .build()
        .await?;
    let _confirmed = factory::booking::BookingFactory::new(db, user.id, room.id)
        .status(BookingStatus::Confirmed)
        .check_in_date(today - Duration::days(1))
        .check_out_date(today + Duration::days(2))
        .build()
        .await?;

    let due = BookingRepository::new(db).find_due_expiry(today).await?;

    assert_eq!(due.len(), 1);
    assert_eq!(due[0].id, stale.id);

    Ok(())
}

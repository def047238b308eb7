use super::*;

/// Tests that recording a payment confirms a pending booking.
///
/// Expected: a payment row and a confirmed booking
#[tokio::test]
async fn payment_confirms_pending_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _country, _city, _hotel, room) =
        factory::helpers::create_room_with_dependencies(db).await?;
    let booking = factory::create_booking(db, user.id, room.id).await?;

    let payment = PaymentService::create(
        db,
        CreatePaymentDto {
            booking_id: booking.id,
            payment_method: "card".to_string(),
            amount: 200.0,
        },
    )
    .await
    .unwrap();

    assert_eq!(payment.booking_id, booking.id);
    assert_eq!(payment.amount, 200.0);

    let stored = entity::booking::Entity::find_by_id(booking.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, BookingStatus::Confirmed);

    Ok(())
}

/// Tests paying the same booking twice.
///
/// Expected: DuplicatePayment, the first payment intact, status unchanged
#[tokio::test]
async fn second_payment_conflicts_and_changes_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _country, _city, _hotel, room) =
        factory::helpers::create_room_with_dependencies(db).await?;
    let booking = factory::create_booking(db, user.id, room.id).await?;

    let dto = |amount: f64| CreatePaymentDto {
        booking_id: booking.id,
        payment_method: "card".to_string(),
        amount,
    };

    let first = PaymentService::create(db, dto(200.0)).await.unwrap();
    let err = PaymentService::create(db, dto(999.0)).await.unwrap_err();

    assert!(matches!(
        err,
        AppError::BookingErr(BookingError::DuplicatePayment)
    ));

    let payments = entity::payment::Entity::find().all(db).await?;
    assert_eq!(payments.len(), 1);
    assert_eq!(payments[0].id, first.id);
    assert_eq!(payments[0].amount, 200.0);

    let stored = entity::booking::Entity::find_by_id(booking.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, BookingStatus::Confirmed);

    Ok(())
}

/// Tests rejection of zero and negative amounts.
///
/// Expected: BadRequest and no payment row
#[tokio::test]
async fn rejects_non_positive_amount() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _country, _city, _hotel, room) =
        factory::helpers::create_room_with_dependencies(db).await?;
    let booking = factory::create_booking(db, user.id, room.id).await?;

    for amount in [0.0, -50.0] {
        let err = PaymentService::create(
            db,
            CreatePaymentDto {
                booking_id: booking.id,
                payment_method: "card".to_string(),
                amount,
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::BadRequest(_)));
    }

    let payments = entity::payment::Entity::find().count(db).await?;
    assert_eq!(payments, 0);

    Ok(())
}

/// Tests paying a booking that does not exist.
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

    let err = PaymentService::create(
        db,
        CreatePaymentDto {
            booking_id: 999_999,
            payment_method: "card".to_string(),
            amount: 100.0,
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));

    Ok(())
}

/// Tests payment against a booking that already left pending.
///
/// Confirmation is best-effort, so the payment stands and the booking
/// keeps its status.
///
/// Expected: payment recorded, status still cancelled
#[tokio::test]
async fn non_pending_booking_keeps_its_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _country, _city, _hotel, room) =
        factory::helpers::create_room_with_dependencies(db).await?;
    let booking = factory::booking::BookingFactory::new(db, user.id, room.id)
        .status(BookingStatus::Cancelled)
        .build()
        .await?;

    let payment = PaymentService::create(
        db,
        CreatePaymentDto {
            booking_id: booking.id,
            payment_method: "card".to_string(),
            amount: 80.0,
        },
    )
    .await
    .unwrap();

    assert_eq!(payment.booking_id, booking.id);

    let stored = entity::booking::Entity::find_by_id(booking.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, BookingStatus::Cancelled);

    Ok(())
}

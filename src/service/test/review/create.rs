use super::*;

/// Tests the happy path: the owner reviews a completed booking.
///
/// Expected: a review linked to the booking and the reviewer
#[tokio::test]
async fn owner_reviews_completed_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_search_tables()
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

    let review = ReviewService::create(
        db,
        user.id,
        CreateReviewDto {
            booking_id: booking.id,
            rating: 5,
            text: Some("Great stay".to_string()),
        },
    )
    .await
    .unwrap();

    assert_eq!(review.booking_id, Some(booking.id));
    assert_eq!(review.user_id, Some(user.id));
    assert_eq!(review.rating, 5);

    Ok(())
}

/// Tests that only the booking's owner may review it.
///
/// Expected: AccessDenied for any other account
#[tokio::test]
async fn rejects_non_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_search_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _country, _city, _hotel, room) =
        factory::helpers::create_room_with_dependencies(db).await?;
    let stranger = factory::create_user(db).await?;
    let booking = factory::booking::BookingFactory::new(db, user.id, room.id)
        .status(BookingStatus::Completed)
        .build()
        .await?;

    let err = ReviewService::create(
        db,
        stranger.id,
        CreateReviewDto {
            booking_id: booking.id,
            rating: 4,
            text: None,
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(
        err,
        AppError::AuthErr(AuthError::AccessDenied(..))
    ));

    Ok(())
}

/// Tests reviewing a booking whose stay has not completed.
///
/// Expected: InvalidState for every non-completed status
#[tokio::test]
async fn rejects_booking_before_completion() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_search_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _country, _city, _hotel, room) =
        factory::helpers::create_room_with_dependencies(db).await?;

    for status in [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::Cancelled,
    ] {
        let booking = factory::booking::BookingFactory::new(db, user.id, room.id)
            .status(status)
            .build()
            .await?;

        let err = ReviewService::create(
            db,
            user.id,
            CreateReviewDto {
                booking_id: booking.id,
                rating: 4,
                text: None,
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(
            err,
            AppError::BookingErr(BookingError::InvalidState { .. })
        ));
    }

    Ok(())
}

/// Tests that a booking can be reviewed only once.
///
/// Expected: BadRequest on the second review, one row total
#[tokio::test]
async fn rejects_second_review() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_search_tables()
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

    let dto = |rating: i32| CreateReviewDto {
        booking_id: booking.id,
        rating,
        text: None,
    };

    ReviewService::create(db, user.id, dto(5)).await.unwrap();
    let err = ReviewService::create(db, user.id, dto(1)).await.unwrap_err();

    assert!(matches!(err, AppError::BadRequest(_)));

    let reviews = entity::review::Entity::find().count(db).await?;
    assert_eq!(reviews, 1);

    Ok(())
}

/// Tests the rating bounds.
///
/// Expected: BadRequest for ratings outside 1 through 5
#[tokio::test]
async fn rejects_out_of_range_rating() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_search_tables()
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

    for rating in [0, 6, -1] {
        let err = ReviewService::create(
            db,
            user.id,
            CreateReviewDto {
                booking_id: booking.id,
                rating,
                text: None,
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::BadRequest(_)));
    }

    Ok(())
}

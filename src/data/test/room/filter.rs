use super::*;

/// Tests the filter query with no filters set.
///
/// An empty filter does not constrain anything.
///
/// Expected: every room
#[tokio::test]
async fn empty_filter_returns_all_rooms() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _country, _city, hotel, _room) =
        factory::helpers::create_room_with_dependencies(db).await?;
    factory::create_room(db, hotel.id).await?;

    let rooms = RoomRepository::new(db).filter(&RoomFilter::default()).await?;

    assert_eq!(rooms.len(), 2);

    Ok(())
}

/// Tests that present filter fields combine conjunctively.
///
/// A room must satisfy the price bound, the capacity bound, and the wifi
/// flag at once.
///
/// Expected: only the room matching all three
#[tokio::test]
async fn present_fields_combine_conjunctively() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _country, _city, hotel, _room) =
        factory::helpers::create_room_with_dependencies(db).await?;

    let matching = factory::room::RoomFactory::new(db, hotel.id)
        .price_per_night(90.0)
        .capacity(4)
        .has_wifi(true)
        .build()
        .await?;
    // Right price and capacity but no wifi
    factory::room::RoomFactory::new(db, hotel.id)
        .price_per_night(90.0)
        .capacity(4)
        .build()
        .await?;
    // Wifi but too expensive
    factory::room::RoomFactory::new(db, hotel.id)
        .price_per_night(300.0)
        .capacity(4)
        .has_wifi(true)
        .build()
        .await?;

    let filter = RoomFilter {
        max_price: Some(100.0),
        min_capacity: Some(3),
        has_wifi: Some(true),
        ..Default::default()
    };
    let rooms = RoomRepository::new(db).filter(&filter).await?;

    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].id, matching.id);

    Ok(())
}

/// Tests filtering on a flag being explicitly false.
///
/// `Some(false)` is a real constraint, distinct from leaving the flag
/// unset.
///
/// Expected: only rooms without the facility
#[tokio::test]
async fn false_flag_filter_excludes_rooms_with_facility() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _country, _city, hotel, plain_room) =
        factory::helpers::create_room_with_dependencies(db).await?;
    factory::room::RoomFactory::new(db, hotel.id)
        .allows_pets(true)
        .build()
        .await?;

    let filter = RoomFilter {
        allows_pets: Some(false),
        ..Default::default()
    };
    let rooms = RoomRepository::new(db).filter(&filter).await?;

    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].id, plain_room.id);

    Ok(())
}

/// Tests the room type and hotel scoping filters together.
///
/// Expected: only the suite in the requested hotel
#[tokio::test]
async fn filters_by_type_within_hotel() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _country, _city, hotel, _room) =
        factory::helpers::create_room_with_dependencies(db).await?;
    let (_c2, _ci2, other_hotel) = factory::helpers::create_hotel_for_user(db, &user).await?;

    let suite = factory::room::RoomFactory::new(db, hotel.id)
        .room_type("suite")
        .build()
        .await?;
    factory::room::RoomFactory::new(db, other_hotel.id)
        .room_type("suite")
        .build()
        .await?;

    let filter = RoomFilter {
        hotel_id: Some(hotel.id),
        room_type: Some("suite".to_string()),
        ..Default::default()
    };
    let rooms = RoomRepository::new(db).filter(&filter).await?;

    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].id, suite.id);

    Ok(())
}

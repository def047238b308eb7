use super::*;

/// Tests the listing-photo fallback when no photo is marked as cover.
///
/// Expected: the oldest photo
#[tokio::test]
async fn falls_back_to_first_photo() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_search_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_country, _city, hotel) = factory::helpers::create_hotel_for_user(db, &user).await?;

    let first = factory::create_photo(db, hotel.id).await?;
    let _second = factory::create_photo(db, hotel.id).await?;

    let cover = PhotoRepository::new(db).cover_for_hotel(hotel.id).await?;

    assert_eq!(cover.map(|photo| photo.id), Some(first.id));

    Ok(())
}

/// Tests the cover lookup for a hotel with no photos at all.
///
/// Expected: None
#[tokio::test]
async fn none_without_photos() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_search_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_country, _city, hotel) = factory::helpers::create_hotel_for_user(db, &user).await?;

    let cover = PhotoRepository::new(db).cover_for_hotel(hotel.id).await?;

    assert!(cover.is_none());

    Ok(())
}

use super::*;

/// Tests that adding a new cover photo demotes the previous cover.
///
/// A hotel has at most one cover at any time.
///
/// Expected: only the newest photo has is_cover set
#[tokio::test]
async fn new_cover_demotes_previous() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_search_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_country, _city, hotel) = factory::helpers::create_hotel_for_user(db, &user).await?;

    let repo = PhotoRepository::new(db);
    let first = repo
        .add(hotel.id, "https://example.com/a.jpg".to_string(), true)
        .await?;
    let second = repo
        .add(hotel.id, "https://example.com/b.jpg".to_string(), true)
        .await?;

    let photos = repo.list_by_hotel(hotel.id).await?;
    assert_eq!(photos.len(), 2);

    let covers: Vec<_> = photos.iter().filter(|photo| photo.is_cover).collect();
    assert_eq!(covers.len(), 1);
    assert_eq!(covers[0].id, second.id);

    let demoted = photos.iter().find(|photo| photo.id == first.id).unwrap();
    assert!(!demoted.is_cover);

    Ok(())
}

/// Tests that adding a non-cover photo leaves the existing cover alone.
///
/// Expected: the original cover keeps is_cover
#[tokio::test]
async fn non_cover_leaves_cover_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_search_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_country, _city, hotel) = factory::helpers::create_hotel_for_user(db, &user).await?;

    let repo = PhotoRepository::new(db);
    let cover = repo
        .add(hotel.id, "https://example.com/a.jpg".to_string(), true)
        .await?;
    repo.add(hotel.id, "https://example.com/b.jpg".to_string(), false)
        .await?;

    let stored = repo.cover_for_hotel(hotel.id).await?.unwrap();
    assert_eq!(stored.id, cover.id);
    assert!(stored.is_cover);

    Ok(())
}

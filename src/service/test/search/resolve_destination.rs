use super::*;

/// Tests a bare country name.
///
/// Expected: the country with no city narrowing
#[tokio::test]
async fn bare_name_is_a_country() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_search_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed_destination(db, "Spain", "Madrid").await?;

    let destination = SearchService::resolve_destination(db, "Spain")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(destination.country.name, "Spain");
    assert!(destination.city.is_none());

    Ok(())
}

/// Tests the "City, Country" form, with sloppy whitespace.
///
/// Expected: both parts resolved
#[tokio::test]
async fn city_country_pair_resolves_both() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_search_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed_destination(db, "Spain", "Madrid").await?;

    let destination = SearchService::resolve_destination(db, "  Madrid ,  Spain ")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(destination.country.name, "Spain");
    assert_eq!(destination.city.map(|city| city.name), Some("Madrid".to_string()));

    Ok(())
}

/// Tests a city name the country does not contain.
///
/// Expected: country resolved, city left empty
#[tokio::test]
async fn unknown_city_keeps_the_country() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_search_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed_destination(db, "Spain", "Madrid").await?;

    let destination = SearchService::resolve_destination(db, "Oslo, Spain")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(destination.country.name, "Spain");
    assert!(destination.city.is_none());

    Ok(())
}

/// Tests a city that exists, but in a different country than named.
///
/// Expected: the named country wins and the city is dropped
#[tokio::test]
async fn city_must_belong_to_the_named_country() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_search_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed_destination(db, "Spain", "Madrid").await?;
    seed_destination(db, "Norway", "Oslo").await?;

    let destination = SearchService::resolve_destination(db, "Madrid, Norway")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(destination.country.name, "Norway");
    assert!(destination.city.is_none());

    Ok(())
}

/// Tests unknown countries in both forms.
///
/// Expected: None
#[tokio::test]
async fn unknown_country_is_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_search_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed_destination(db, "Spain", "Madrid").await?;

    for destination in ["Atlantis", "Madrid, Atlantis"] {
        let resolved = SearchService::resolve_destination(db, destination)
            .await
            .unwrap();
        assert!(resolved.is_none());
    }

    Ok(())
}

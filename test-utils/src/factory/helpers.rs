//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Provides monotonically increasing values for use in generating unique
/// test identifiers across all factories.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a room together with its full dependency chain.
///
/// This is a convenience method that creates:
/// 1. User (as hotel owner)
/// 2. Country
/// 3. City
/// 4. Hotel
/// 5. Room
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, country, city, hotel, room))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_room_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::country::Model,
        entity::city::Model,
        entity::hotel::Model,
        entity::room::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let country = crate::factory::country::create_country(db).await?;
    let city = crate::factory::city::create_city(db, country.id).await?;
    let hotel = crate::factory::hotel::create_hotel(db, city.id, Some(user.id)).await?;
    let room = crate::factory::room::create_room(db, hotel.id).await?;

    Ok((user, country, city, hotel, room))
}

/// Creates a hotel with its location dependencies using a specific user as owner.
///
/// Useful when you need to test hotel operations for a specific user.
///
/// # Arguments
/// - `db` - Database connection
/// - `user` - User entity to use as hotel owner
///
/// # Returns
/// - `Ok((country, city, hotel))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_hotel_for_user(
    db: &DatabaseConnection,
    user: &entity::user::Model,
) -> Result<
    (
        entity::country::Model,
        entity::city::Model,
        entity::hotel::Model,
    ),
    DbErr,
> {
    let country = crate::factory::country::create_country(db).await?;
    let city = crate::factory::city::create_city(db, country.id).await?;
    let hotel = crate::factory::hotel::create_hotel(db, city.id, Some(user.id)).await?;

    Ok((country, city, hotel))
}

//! Hotel factory for creating test hotel entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test hotels with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::hotel::HotelFactory;
///
/// let hotel = HotelFactory::new(&db, city.id, Some(owner.id))
///     .name("Grand Plaza")
///     .stars(Some(5))
///     .build()
///     .await?;
/// ```
pub struct HotelFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    address: String,
    stars: Option<i32>,
    description: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    city_id: i32,
    owner_id: Option<i32>,
}

impl<'a> HotelFactory<'a> {
    /// Creates a new HotelFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Hotel {id}"` where id is auto-incremented
    /// - address: `"{id} Test Street"`
    /// - stars: `Some(3)`
    /// - description: `Some("Test hotel description")`
    /// - latitude/longitude: `None`
    pub fn new(db: &'a DatabaseConnection, city_id: i32, owner_id: Option<i32>) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Hotel {}", id),
            address: format!("{} Test Street", id),
            stars: Some(3),
            description: Some("Test hotel description".to_string()),
            latitude: None,
            longitude: None,
            city_id,
            owner_id,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn stars(mut self, stars: Option<i32>) -> Self {
        self.stars = stars;
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    /// Builds and inserts the hotel entity into the database.
    pub async fn build(self) -> Result<entity::hotel::Model, DbErr> {
        entity::hotel::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            address: ActiveValue::Set(self.address),
            stars: ActiveValue::Set(self.stars),
            description: ActiveValue::Set(self.description),
            latitude: ActiveValue::Set(self.latitude),
            longitude: ActiveValue::Set(self.longitude),
            city_id: ActiveValue::Set(self.city_id),
            owner_id: ActiveValue::Set(self.owner_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a hotel with default values in the given city.
pub async fn create_hotel(
    db: &DatabaseConnection,
    city_id: i32,
    owner_id: Option<i32>,
) -> Result<entity::hotel::Model, DbErr> {
    HotelFactory::new(db, city_id, owner_id).build().await
}

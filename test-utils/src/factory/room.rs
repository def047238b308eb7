//! Room factory for creating test room entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test rooms with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::room::RoomFactory;
///
/// let room = RoomFactory::new(&db, hotel.id)
///     .price_per_night(250.0)
///     .capacity(4)
///     .has_wifi(true)
///     .build()
///     .await?;
/// ```
pub struct RoomFactory<'a> {
    db: &'a DatabaseConnection,
    hotel_id: i32,
    name: String,
    room_type: String,
    price_per_night: f64,
    capacity: i32,
    description: Option<String>,
    cancellation_policy: Option<String>,
    has_wifi: bool,
    allows_pets: bool,
    has_air_conditioning: bool,
    has_tv: bool,
    has_minibar: bool,
    has_balcony: bool,
    has_kitchen: bool,
    has_safe: bool,
}

impl<'a> RoomFactory<'a> {
    /// Creates a new RoomFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Room {id}"` where id is auto-incremented
    /// - room_type: `"double"`
    /// - price_per_night: `100.0`
    /// - capacity: `2`
    /// - all facility flags: `false`
    pub fn new(db: &'a DatabaseConnection, hotel_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            hotel_id,
            name: format!("Room {}", id),
            room_type: "double".to_string(),
            price_per_night: 100.0,
            capacity: 2,
            description: None,
            cancellation_policy: None,
            has_wifi: false,
            allows_pets: false,
            has_air_conditioning: false,
            has_tv: false,
            has_minibar: false,
            has_balcony: false,
            has_kitchen: false,
            has_safe: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn room_type(mut self, room_type: impl Into<String>) -> Self {
        self.room_type = room_type.into();
        self
    }

    pub fn price_per_night(mut self, price_per_night: f64) -> Self {
        self.price_per_night = price_per_night;
        self
    }

    pub fn capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn cancellation_policy(mut self, cancellation_policy: Option<String>) -> Self {
        self.cancellation_policy = cancellation_policy;
        self
    }

    pub fn has_wifi(mut self, has_wifi: bool) -> Self {
        self.has_wifi = has_wifi;
        self
    }

    pub fn allows_pets(mut self, allows_pets: bool) -> Self {
        self.allows_pets = allows_pets;
        self
    }

    pub fn has_air_conditioning(mut self, has_air_conditioning: bool) -> Self {
        self.has_air_conditioning = has_air_conditioning;
        self
    }

    pub fn has_balcony(mut self, has_balcony: bool) -> Self {
        self.has_balcony = has_balcony;
        self
    }

    /// Builds and inserts the room entity into the database.
    pub async fn build(self) -> Result<entity::room::Model, DbErr> {
        entity::room::ActiveModel {
            id: ActiveValue::NotSet,
            hotel_id: ActiveValue::Set(self.hotel_id),
            name: ActiveValue::Set(self.name),
            room_type: ActiveValue::Set(self.room_type),
            price_per_night: ActiveValue::Set(self.price_per_night),
            capacity: ActiveValue::Set(self.capacity),
            description: ActiveValue::Set(self.description),
            cancellation_policy: ActiveValue::Set(self.cancellation_policy),
            has_wifi: ActiveValue::Set(self.has_wifi),
            allows_pets: ActiveValue::Set(self.allows_pets),
            has_air_conditioning: ActiveValue::Set(self.has_air_conditioning),
            has_tv: ActiveValue::Set(self.has_tv),
            has_minibar: ActiveValue::Set(self.has_minibar),
            has_balcony: ActiveValue::Set(self.has_balcony),
            has_kitchen: ActiveValue::Set(self.has_kitchen),
            has_safe: ActiveValue::Set(self.has_safe),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a room with default values in the given hotel.
pub async fn create_room(
    db: &DatabaseConnection,
    hotel_id: i32,
) -> Result<entity::room::Model, DbErr> {
    RoomFactory::new(db, hotel_id).build().await
}

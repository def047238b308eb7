//! Room DTOs and the optional-filter query.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct CreateRoomDto {
    pub hotel_id: i32,
    pub name: String,
    pub room_type: String,
    pub price_per_night: f64,
    pub capacity: i32,
    pub description: Option<String>,
    pub cancellation_policy: Option<String>,
    #[serde(default)]
    pub has_wifi: bool,
    #[serde(default)]
    pub allows_pets: bool,
    #[serde(default)]
    pub has_air_conditioning: bool,
    #[serde(default)]
    pub has_tv: bool,
    #[serde(default)]
    pub has_minibar: bool,
    #[serde(default)]
    pub has_balcony: bool,
    #[serde(default)]
    pub has_kitchen: bool,
    #[serde(default)]
    pub has_safe: bool,
}

#[derive(Serialize, ToSchema)]
pub struct RoomDto {
    pub id: i32,
    pub hotel_id: i32,
    pub name: String,
    pub room_type: String,
    pub price_per_night: f64,
    pub capacity: i32,
    pub description: Option<String>,
    pub cancellation_policy: Option<String>,
    pub has_wifi: bool,
    pub allows_pets: bool,
    pub has_air_conditioning: bool,
    pub has_tv: bool,
    pub has_minibar: bool,
    pub has_balcony: bool,
    pub has_kitchen: bool,
    pub has_safe: bool,
}

impl From<entity::room::Model> for RoomDto {
    fn from(room: entity::room::Model) -> Self {
        Self {
            id: room.id,
            hotel_id: room.hotel_id,
            name: room.name,
            room_type: room.room_type,
            price_per_night: room.price_per_night,
            capacity: room.capacity,
            description: room.description,
            cancellation_policy: room.cancellation_policy,
            has_wifi: room.has_wifi,
            allows_pets: room.allows_pets,
            has_air_conditioning: room.has_air_conditioning,
            has_tv: room.has_tv,
            has_minibar: room.has_minibar,
            has_balcony: room.has_balcony,
            has_kitchen: room.has_kitchen,
            has_safe: room.has_safe,
        }
    }
}

/// Conjunctive optional filters for the room listing query.
///
/// Every field that is present narrows the result; absent fields do not
/// constrain anything.
#[derive(Debug, Default, Clone, Deserialize, ToSchema)]
pub struct RoomFilter {
    pub hotel_id: Option<i32>,
    pub room_type: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_capacity: Option<i32>,
    pub has_wifi: Option<bool>,
    pub allows_pets: Option<bool>,
    pub has_air_conditioning: Option<bool>,
    pub has_tv: Option<bool>,
    pub has_minibar: Option<bool>,
    pub has_balcony: Option<bool>,
    pub has_kitchen: Option<bool>,
    pub has_safe: Option<bool>,
}

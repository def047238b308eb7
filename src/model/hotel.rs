//! Hotel and photo DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::room::RoomDto;

#[derive(Deserialize, ToSchema)]
pub struct CreateHotelDto {
    pub name: String,
    pub address: String,
    pub stars: Option<i32>,
    pub description: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub city_id: i32,
    pub owner_id: Option<i32>,
}

#[derive(Serialize, ToSchema)]
pub struct HotelDto {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub stars: Option<i32>,
    pub description: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub city_id: i32,
    pub owner_id: Option<i32>,
}

impl From<entity::hotel::Model> for HotelDto {
    fn from(hotel: entity::hotel::Model) -> Self {
        Self {
            id: hotel.id,
            name: hotel.name,
            address: hotel.address,
            stars: hotel.stars,
            description: hotel.description,
            latitude: hotel.latitude,
            longitude: hotel.longitude,
            city_id: hotel.city_id,
            owner_id: hotel.owner_id,
        }
    }
}

/// Hotel detail view with its city, rooms, and photos resolved.
#[derive(Serialize, ToSchema)]
pub struct HotelDetailDto {
    #[serde(flatten)]
    pub hotel: HotelDto,
    pub city_name: String,
    pub rooms: Vec<RoomDto>,
    pub photos: Vec<HotelPhotoDto>,
}

#[derive(Deserialize, ToSchema)]
pub struct CreateHotelPhotoDto {
    pub image_url: String,
    #[serde(default)]
    pub is_cover: bool,
}

#[derive(Serialize, ToSchema)]
pub struct HotelPhotoDto {
    pub id: i32,
    pub hotel_id: i32,
    pub image_url: String,
    pub is_cover: bool,
}

impl From<entity::hotel_photo::Model> for HotelPhotoDto {
    fn from(photo: entity::hotel_photo::Model) -> Self {
        Self {
            id: photo.id,
            hotel_id: photo.hotel_id,
            image_url: photo.image_url,
            is_cover: photo.is_cover,
        }
    }
}

/// Query filters for a hotel's review listing.
#[derive(Deserialize, ToSchema)]
pub struct HotelReviewsQuery {
    pub min_rating: Option<i32>,
    #[serde(default)]
    pub only_with_text: bool,
}

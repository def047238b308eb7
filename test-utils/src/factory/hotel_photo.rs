//! Hotel photo factory for creating test photo entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test hotel photos with customizable fields.
pub struct HotelPhotoFactory<'a> {
    db: &'a DatabaseConnection,
    hotel_id: i32,
    image_url: String,
    is_cover: bool,
}

impl<'a> HotelPhotoFactory<'a> {
    /// Creates a new HotelPhotoFactory with a unique default image URL and
    /// `is_cover` set to `false`.
    pub fn new(db: &'a DatabaseConnection, hotel_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            hotel_id,
            image_url: format!("https://example.com/photos/{}.jpg", id),
            is_cover: false,
        }
    }

    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    pub fn is_cover(mut self, is_cover: bool) -> Self {
        self.is_cover = is_cover;
        self
    }

    pub async fn build(self) -> Result<entity::hotel_photo::Model, DbErr> {
        entity::hotel_photo::ActiveModel {
            id: ActiveValue::NotSet,
            hotel_id: ActiveValue::Set(self.hotel_id),
            image_url: ActiveValue::Set(self.image_url),
            is_cover: ActiveValue::Set(self.is_cover),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a non-cover photo with default values for the given hotel.
pub async fn create_photo(
    db: &DatabaseConnection,
    hotel_id: i32,
) -> Result<entity::hotel_photo::Model, DbErr> {
    HotelPhotoFactory::new(db, hotel_id).build().await
}

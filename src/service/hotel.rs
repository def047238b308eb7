//! Hotel and photo management.

use sea_orm::DatabaseConnection;

use crate::{
    data::{
        hotel::HotelRepository, location::LocationRepository, photo::PhotoRepository,
        room::RoomRepository, user::UserRepository,
    },
    error::AppError,
    model::hotel::{CreateHotelDto, CreateHotelPhotoDto, HotelDetailDto},
};

pub struct HotelService;

impl HotelService {
    /// Creates a hotel after checking its foreign keys exist.
    pub async fn create(
        db: &DatabaseConnection,
        dto: CreateHotelDto,
    ) -> Result<entity::hotel::Model, AppError> {
        LocationRepository::new(db)
            .find_city_by_id(dto.city_id)
            .await?
            .ok_or_else(|| AppError::BadRequest(format!("City {} does not exist", dto.city_id)))?;

        if let Some(owner_id) = dto.owner_id {
            UserRepository::new(db)
                .find_by_id(owner_id)
                .await?
                .ok_or_else(|| {
                    AppError::BadRequest(format!("Owner {owner_id} does not exist"))
                })?;
        }

        Ok(HotelRepository::new(db).create(dto).await?)
    }

    /// Hotel detail with its city name, rooms, and photos.
    pub async fn get_detail(
        db: &DatabaseConnection,
        hotel_id: i32,
    ) -> Result<HotelDetailDto, AppError> {
        let (hotel, city) = HotelRepository::new(db)
            .find_with_city(hotel_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Hotel {hotel_id} not found")))?;

        let rooms = RoomRepository::new(db).list_by_hotel(hotel.id).await?;
        let photos = PhotoRepository::new(db).list_by_hotel(hotel.id).await?;

        Ok(HotelDetailDto {
            hotel: hotel.into(),
            city_name: city.map(|city| city.name).unwrap_or_default(),
            rooms: rooms.into_iter().map(Into::into).collect(),
            photos: photos.into_iter().map(Into::into).collect(),
        })
    }

    pub async fn list_by_city(
        db: &DatabaseConnection,
        city_id: i32,
    ) -> Result<Vec<entity::hotel::Model>, AppError> {
        Ok(HotelRepository::new(db).list_by_city(city_id).await?)
    }

    pub async fn add_photo(
        db: &DatabaseConnection,
        hotel_id: i32,
        dto: CreateHotelPhotoDto,
    ) -> Result<entity::hotel_photo::Model, AppError> {
        HotelRepository::new(db)
            .find_by_id(hotel_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Hotel {hotel_id} not found")))?;

        Ok(PhotoRepository::new(db)
            .add(hotel_id, dto.image_url, dto.is_cover)
            .await?)
    }

    pub async fn list_photos(
        db: &DatabaseConnection,
        hotel_id: i32,
    ) -> Result<Vec<entity::hotel_photo::Model>, AppError> {
        HotelRepository::new(db)
            .find_by_id(hotel_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Hotel {hotel_id} not found")))?;

        Ok(PhotoRepository::new(db).list_by_hotel(hotel_id).await?)
    }
}

//! Room management and the optional-filter listing.

use sea_orm::DatabaseConnection;

use crate::{
    data::{hotel::HotelRepository, room::RoomRepository},
    error::AppError,
    model::room::{CreateRoomDto, RoomFilter},
};

pub struct RoomService;

impl RoomService {
    pub async fn create(
        db: &DatabaseConnection,
        dto: CreateRoomDto,
    ) -> Result<entity::room::Model, AppError> {
        HotelRepository::new(db)
            .find_by_id(dto.hotel_id)
            .await?
            .ok_or_else(|| {
                AppError::BadRequest(format!("Hotel {} does not exist", dto.hotel_id))
            })?;

        Ok(RoomRepository::new(db).create(dto).await?)
    }

    pub async fn get(db: &DatabaseConnection, room_id: i32) -> Result<entity::room::Model, AppError> {
        RoomRepository::new(db)
            .find_by_id(room_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Room {room_id} not found")))
    }

    pub async fn list_by_hotel(
        db: &DatabaseConnection,
        hotel_id: i32,
    ) -> Result<Vec<entity::room::Model>, AppError> {
        HotelRepository::new(db)
            .find_by_id(hotel_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Hotel {hotel_id} not found")))?;

        Ok(RoomRepository::new(db).list_by_hotel(hotel_id).await?)
    }

    pub async fn filter(
        db: &DatabaseConnection,
        filter: RoomFilter,
    ) -> Result<Vec<entity::room::Model>, AppError> {
        Ok(RoomRepository::new(db).filter(&filter).await?)
    }
}

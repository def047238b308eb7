//! Room repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::model::room::{CreateRoomDto, RoomFilter};

pub struct RoomRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoomRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, dto: CreateRoomDto) -> Result<entity::room::Model, DbErr> {
        entity::room::ActiveModel {
            id: ActiveValue::NotSet,
            hotel_id: ActiveValue::Set(dto.hotel_id),
            name: ActiveValue::Set(dto.name),
            room_type: ActiveValue::Set(dto.room_type),
            price_per_night: ActiveValue::Set(dto.price_per_night),
            capacity: ActiveValue::Set(dto.capacity),
            description: ActiveValue::Set(dto.description),
            cancellation_policy: ActiveValue::Set(dto.cancellation_policy),
            has_wifi: ActiveValue::Set(dto.has_wifi),
            allows_pets: ActiveValue::Set(dto.allows_pets),
            has_air_conditioning: ActiveValue::Set(dto.has_air_conditioning),
            has_tv: ActiveValue::Set(dto.has_tv),
            has_minibar: ActiveValue::Set(dto.has_minibar),
            has_balcony: ActiveValue::Set(dto.has_balcony),
            has_kitchen: ActiveValue::Set(dto.has_kitchen),
            has_safe: ActiveValue::Set(dto.has_safe),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::room::Model>, DbErr> {
        entity::prelude::Room::find_by_id(id).one(self.db).await
    }

    pub async fn list_by_hotel(&self, hotel_id: i32) -> Result<Vec<entity::room::Model>, DbErr> {
        entity::prelude::Room::find()
            .filter(entity::room::Column::HotelId.eq(hotel_id))
            .order_by_asc(entity::room::Column::Id)
            .all(self.db)
            .await
    }

    /// Rooms matching every present filter field.
    pub async fn filter(&self, filter: &RoomFilter) -> Result<Vec<entity::room::Model>, DbErr> {
        let mut query = entity::prelude::Room::find();

        if let Some(hotel_id) = filter.hotel_id {
            query = query.filter(entity::room::Column::HotelId.eq(hotel_id));
        }
        if let Some(room_type) = &filter.room_type {
            query = query.filter(entity::room::Column::RoomType.eq(room_type));
        }
        if let Some(min_price) = filter.min_price {
            query = query.filter(entity::room::Column::PricePerNight.gte(min_price));
        }
        if let Some(max_price) = filter.max_price {
            query = query.filter(entity::room::Column::PricePerNight.lte(max_price));
        }
        if let Some(min_capacity) = filter.min_capacity {
            query = query.filter(entity::room::Column::Capacity.gte(min_capacity));
        }

        let flags = [
            (filter.has_wifi, entity::room::Column::HasWifi),
            (filter.allows_pets, entity::room::Column::AllowsPets),
            (
                filter.has_air_conditioning,
                entity::room::Column::HasAirConditioning,
            ),
            (filter.has_tv, entity::room::Column::HasTv),
            (filter.has_minibar, entity::room::Column::HasMinibar),
            (filter.has_balcony, entity::room::Column::HasBalcony),
            (filter.has_kitchen, entity::room::Column::HasKitchen),
            (filter.has_safe, entity::room::Column::HasSafe),
        ];
        for (wanted, column) in flags {
            if let Some(wanted) = wanted {
                query = query.filter(column.eq(wanted));
            }
        }

        query
            .order_by_asc(entity::room::Column::Id)
            .all(self.db)
            .await
    }

    /// Rooms of a hotel with at least the given capacity, for the
    /// availability search.
    pub async fn candidates_for_hotel(
        &self,
        hotel_id: i32,
        min_capacity: i32,
    ) -> Result<Vec<entity::room::Model>, DbErr> {
        entity::prelude::Room::find()
            .filter(entity::room::Column::HotelId.eq(hotel_id))
            .filter(entity::room::Column::Capacity.gte(min_capacity))
            .order_by_asc(entity::room::Column::PricePerNight)
            .all(self.db)
            .await
    }
}

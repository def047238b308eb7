//! Hotel repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::model::hotel::CreateHotelDto;

pub struct HotelRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> HotelRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, dto: CreateHotelDto) -> Result<entity::hotel::Model, DbErr> {
        entity::hotel::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(dto.name),
            address: ActiveValue::Set(dto.address),
            stars: ActiveValue::Set(dto.stars),
            description: ActiveValue::Set(dto.description),
            latitude: ActiveValue::Set(dto.latitude),
            longitude: ActiveValue::Set(dto.longitude),
            city_id: ActiveValue::Set(dto.city_id),
            owner_id: ActiveValue::Set(dto.owner_id),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::hotel::Model>, DbErr> {
        entity::prelude::Hotel::find_by_id(id).one(self.db).await
    }

    /// Hotel together with its city, or `None` for an unknown id.
    pub async fn find_with_city(
        &self,
        id: i32,
    ) -> Result<Option<(entity::hotel::Model, Option<entity::city::Model>)>, DbErr> {
        entity::prelude::Hotel::find_by_id(id)
            .find_also_related(entity::prelude::City)
            .one(self.db)
            .await
    }

    pub async fn list_by_city(&self, city_id: i32) -> Result<Vec<entity::hotel::Model>, DbErr> {
        entity::prelude::Hotel::find()
            .filter(entity::hotel::Column::CityId.eq(city_id))
            .order_by_asc(entity::hotel::Column::Name)
            .all(self.db)
            .await
    }

    /// Hotels matching a destination, for the availability search.
    ///
    /// Always scoped to a country; a city id narrows to that city, and a
    /// minimum star rating drops hotels rated below it. Unrated hotels
    /// pass the star filter.
    pub async fn candidates(
        &self,
        country_id: i32,
        city_id: Option<i32>,
        min_stars: Option<i32>,
    ) -> Result<Vec<entity::hotel::Model>, DbErr> {
        let mut query = entity::prelude::Hotel::find()
            .join(JoinType::InnerJoin, entity::hotel::Relation::City.def())
            .filter(entity::city::Column::CountryId.eq(country_id));

        if let Some(city_id) = city_id {
            query = query.filter(entity::hotel::Column::CityId.eq(city_id));
        }
        if let Some(min_stars) = min_stars {
            query = query.filter(
                entity::hotel::Column::Stars
                    .gte(min_stars)
                    .or(entity::hotel::Column::Stars.is_null()),
            );
        }

        query.all(self.db).await
    }
}

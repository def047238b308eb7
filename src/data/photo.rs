//! Hotel photo repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct PhotoRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PhotoRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds a photo to a hotel.
    ///
    /// A hotel has at most one cover: inserting with `is_cover` demotes any
    /// existing cover photo first.
    pub async fn add(
        &self,
        hotel_id: i32,
        image_url: String,
        is_cover: bool,
    ) -> Result<entity::hotel_photo::Model, DbErr> {
        if is_cover {
            entity::prelude::HotelPhoto::update_many()
                .col_expr(
                    entity::hotel_photo::Column::IsCover,
                    sea_orm::sea_query::Expr::value(false),
                )
                .filter(entity::hotel_photo::Column::HotelId.eq(hotel_id))
                .filter(entity::hotel_photo::Column::IsCover.eq(true))
                .exec(self.db)
                .await?;
        }

        entity::hotel_photo::ActiveModel {
            id: ActiveValue::NotSet,
            hotel_id: ActiveValue::Set(hotel_id),
            image_url: ActiveValue::Set(image_url),
            is_cover: ActiveValue::Set(is_cover),
        }
        .insert(self.db)
        .await
    }

    pub async fn list_by_hotel(
        &self,
        hotel_id: i32,
    ) -> Result<Vec<entity::hotel_photo::Model>, DbErr> {
        entity::prelude::HotelPhoto::find()
            .filter(entity::hotel_photo::Column::HotelId.eq(hotel_id))
            .order_by_asc(entity::hotel_photo::Column::Id)
            .all(self.db)
            .await
    }

    /// The photo to show in listings: the cover if one is set, otherwise the
    /// oldest photo, otherwise none.
    pub async fn cover_for_hotel(
        &self,
        hotel_id: i32,
    ) -> Result<Option<entity::hotel_photo::Model>, DbErr> {
        let cover = entity::prelude::HotelPhoto::find()
            .filter(entity::hotel_photo::Column::HotelId.eq(hotel_id))
            .filter(entity::hotel_photo::Column::IsCover.eq(true))
            .one(self.db)
            .await?;

        if cover.is_some() {
            return Ok(cover);
        }

        entity::prelude::HotelPhoto::find()
            .filter(entity::hotel_photo::Column::HotelId.eq(hotel_id))
            .order_by_asc(entity::hotel_photo::Column::Id)
            .one(self.db)
            .await
    }
}

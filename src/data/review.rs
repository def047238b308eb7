//! Review repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

pub struct ReviewRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReviewRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        booking_id: i32,
        rating: i32,
        text: Option<String>,
    ) -> Result<entity::review::Model, DbErr> {
        entity::review::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(Some(user_id)),
            booking_id: ActiveValue::Set(Some(booking_id)),
            rating: ActiveValue::Set(rating),
            text: ActiveValue::Set(text),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_booking_id(
        &self,
        booking_id: i32,
    ) -> Result<Vec<entity::review::Model>, DbErr> {
        entity::prelude::Review::find()
            .filter(entity::review::Column::BookingId.eq(booking_id))
            .order_by_asc(entity::review::Column::Id)
            .all(self.db)
            .await
    }

    /// Reviews for a hotel, reached through the booking's room.
    ///
    /// `min_rating` keeps reviews at or above the threshold;
    /// `only_with_text` drops rating-only reviews.
    pub async fn list_for_hotel(
        &self,
        hotel_id: i32,
        min_rating: Option<i32>,
        only_with_text: bool,
    ) -> Result<Vec<entity::review::Model>, DbErr> {
        let mut query = entity::prelude::Review::find()
            .join(JoinType::InnerJoin, entity::review::Relation::Booking.def())
            .join(JoinType::InnerJoin, entity::booking::Relation::Room.def())
            .filter(entity::room::Column::HotelId.eq(hotel_id));

        if let Some(min_rating) = min_rating {
            query = query.filter(entity::review::Column::Rating.gte(min_rating));
        }
        if only_with_text {
            query = query.filter(entity::review::Column::Text.is_not_null());
        }

        query
            .order_by_desc(entity::review::Column::Id)
            .all(self.db)
            .await
    }

    /// All ratings for a hotel, used to derive review count and average.
    pub async fn ratings_for_hotel(&self, hotel_id: i32) -> Result<Vec<i32>, DbErr> {
        let reviews = entity::prelude::Review::find()
            .join(JoinType::InnerJoin, entity::review::Relation::Booking.def())
            .join(JoinType::InnerJoin, entity::booking::Relation::Room.def())
            .filter(entity::room::Column::HotelId.eq(hotel_id))
            .select_only()
            .column(entity::review::Column::Rating)
            .into_tuple::<i32>()
            .all(self.db)
            .await?;

        Ok(reviews)
    }
}

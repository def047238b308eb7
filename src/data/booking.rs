//! Booking repository.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use entity::booking::BookingStatus;

pub struct BookingRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new booking in `Pending` status with today's booking date.
    pub async fn create(
        &self,
        user_id: i32,
        room_id: i32,
        check_in_date: NaiveDate,
        check_out_date: NaiveDate,
        additional_info: Option<String>,
    ) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(Some(user_id)),
            room_id: ActiveValue::Set(Some(room_id)),
            booking_date: ActiveValue::Set(Utc::now().date_naive()),
            check_in_date: ActiveValue::Set(check_in_date),
            check_out_date: ActiveValue::Set(check_out_date),
            status: ActiveValue::Set(BookingStatus::Pending),
            additional_info: ActiveValue::Set(additional_info),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find_by_id(id).one(self.db).await
    }

    /// All bookings for a user, most recent stay first.
    pub async fn find_by_user(&self, user_id: i32) -> Result<Vec<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::UserId.eq(user_id))
            .order_by_desc(entity::booking::Column::CheckInDate)
            .all(self.db)
            .await
    }

    /// Compare-and-swap status transition.
    ///
    /// Updates the booking only if it is still in `from` status. Returns
    /// whether the transition won; `false` means a concurrent writer moved
    /// the booking first (or it was never in `from`).
    pub async fn update_status(
        &self,
        id: i32,
        from: BookingStatus,
        to: BookingStatus,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Booking::update_many()
            .col_expr(
                entity::booking::Column::Status,
                sea_orm::sea_query::Expr::value(to),
            )
            .filter(entity::booking::Column::Id.eq(id))
            .filter(entity::booking::Column::Status.eq(from))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Confirmed bookings whose stay ended before `today`, due to be
    /// marked completed by the lifecycle sweep.
    pub async fn find_due_completion(
        &self,
        today: NaiveDate,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::Status.eq(BookingStatus::Confirmed))
            .filter(entity::booking::Column::CheckOutDate.lt(today))
            .all(self.db)
            .await
    }

    /// Pending bookings whose check-in passed without confirmation, due to
    /// be expired by the lifecycle sweep.
    pub async fn find_due_expiry(
        &self,
        today: NaiveDate,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::Status.eq(BookingStatus::Pending))
            .filter(entity::booking::Column::CheckInDate.lt(today))
            .all(self.db)
            .await
    }
}

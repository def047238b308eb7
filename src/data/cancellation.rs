//! Cancellation repository.

use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

pub struct CancellationRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CancellationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the cancellation record for a booking.
    ///
    /// At most one cancellation may exist per booking; the unique constraint
    /// on `booking_id` enforces this and duplicates surface as a `DbErr`
    /// with `sql_err() == UniqueConstraintViolation`.
    pub async fn create(
        &self,
        booking_id: i32,
        cancellation_date: NaiveDate,
        refund_amount: f64,
    ) -> Result<entity::cancellation::Model, DbErr> {
        entity::cancellation::ActiveModel {
            id: ActiveValue::NotSet,
            booking_id: ActiveValue::Set(booking_id),
            cancellation_date: ActiveValue::Set(cancellation_date),
            refund_amount: ActiveValue::Set(refund_amount),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_booking_id(
        &self,
        booking_id: i32,
    ) -> Result<Option<entity::cancellation::Model>, DbErr> {
        entity::prelude::Cancellation::find()
            .filter(entity::cancellation::Column::BookingId.eq(booking_id))
            .one(self.db)
            .await
    }
}

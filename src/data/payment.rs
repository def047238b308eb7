//! Payment repository.

use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

pub struct PaymentRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PaymentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the payment record for a booking.
    ///
    /// The unique constraint on `booking_id` surfaces as a `DbErr` with
    /// `sql_err() == UniqueConstraintViolation` when a payment already
    /// exists; the service maps that to its duplicate-payment error.
    pub async fn create(
        &self,
        booking_id: i32,
        payment_date: NaiveDate,
        payment_method: String,
        amount: f64,
    ) -> Result<entity::payment::Model, DbErr> {
        entity::payment::ActiveModel {
            id: ActiveValue::NotSet,
            booking_id: ActiveValue::Set(booking_id),
            payment_date: ActiveValue::Set(payment_date),
            payment_method: ActiveValue::Set(payment_method),
            amount: ActiveValue::Set(amount),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_booking_id(
        &self,
        booking_id: i32,
    ) -> Result<Option<entity::payment::Model>, DbErr> {
        entity::prelude::Payment::find()
            .filter(entity::payment::Column::BookingId.eq(booking_id))
            .one(self.db)
            .await
    }
}

//! Payment factory for creating test payment entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test payments with customizable fields.
pub struct PaymentFactory<'a> {
    db: &'a DatabaseConnection,
    booking_id: i32,
    payment_date: chrono::NaiveDate,
    payment_method: String,
    amount: f64,
}

impl<'a> PaymentFactory<'a> {
    /// Creates a new PaymentFactory with default values.
    ///
    /// Defaults:
    /// - payment_date: today
    /// - payment_method: `"card"`
    /// - amount: `200.0`
    pub fn new(db: &'a DatabaseConnection, booking_id: i32) -> Self {
        Self {
            db,
            booking_id,
            payment_date: Utc::now().date_naive(),
            payment_method: "card".to_string(),
            amount: 200.0,
        }
    }

    pub fn payment_method(mut self, payment_method: impl Into<String>) -> Self {
        self.payment_method = payment_method.into();
        self
    }

    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = amount;
        self
    }

    pub async fn build(self) -> Result<entity::payment::Model, DbErr> {
        entity::payment::ActiveModel {
            id: ActiveValue::NotSet,
            booking_id: ActiveValue::Set(self.booking_id),
            payment_date: ActiveValue::Set(self.payment_date),
            payment_method: ActiveValue::Set(self.payment_method),
            amount: ActiveValue::Set(self.amount),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a payment with default values for the given booking.
pub async fn create_payment(
    db: &DatabaseConnection,
    booking_id: i32,
) -> Result<entity::payment::Model, DbErr> {
    PaymentFactory::new(db, booking_id).build().await
}

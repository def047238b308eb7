//! Payment DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct CreatePaymentDto {
    pub booking_id: i32,
    pub payment_method: String,
    pub amount: f64,
}

#[derive(Serialize, ToSchema)]
pub struct PaymentDto {
    pub id: i32,
    pub booking_id: i32,
    pub payment_date: NaiveDate,
    pub payment_method: String,
    pub amount: f64,
}

impl From<entity::payment::Model> for PaymentDto {
    fn from(payment: entity::payment::Model) -> Self {
        Self {
            id: payment.id,
            booking_id: payment.booking_id,
            payment_date: payment.payment_date,
            payment_method: payment.payment_method,
            amount: payment.amount,
        }
    }
}

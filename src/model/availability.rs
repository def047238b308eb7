//! Availability ledger DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Query parameters for range availability checks and blocked-entry listings.
#[derive(Deserialize, ToSchema)]
pub struct AvailabilityRangeQuery {
    pub room_id: i32,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
}

#[derive(Serialize, ToSchema)]
pub struct AvailabilityCheckDto {
    pub room_id: i32,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub available: bool,
}

/// Manual ledger entry: block a date or explicitly open it, optionally with
/// a price override.
#[derive(Deserialize, ToSchema)]
pub struct CreateAvailabilityDto {
    pub room_id: i32,
    pub date: NaiveDate,
    pub is_available: bool,
    pub price_override: Option<f64>,
}

#[derive(Serialize, ToSchema)]
pub struct AvailabilityEntryDto {
    pub id: i32,
    pub room_id: i32,
    pub date: NaiveDate,
    pub is_available: bool,
    pub price_override: Option<f64>,
}

impl From<entity::room_availability::Model> for AvailabilityEntryDto {
    fn from(entry: entity::room_availability::Model) -> Self {
        Self {
            id: entry.id,
            room_id: entry.room_id,
            date: entry.date,
            is_available: entry.is_available,
            price_override: entry.price_override,
        }
    }
}

//! Hotel search request and result DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Sort orders for search results.
///
/// Hotels with no available price sort as worst for the price orders;
/// hotels with no reviews sort as worst for `Reviews` and `Rating`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    PriceAsc,
    PriceDesc,
    Reviews,
    Rating,
}

#[derive(Deserialize, ToSchema)]
pub struct SearchRequestDto {
    /// Free-text destination: "City, Country" or a bare country name.
    pub destination: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub rooms: u32,
    pub adults: u32,
    pub min_stars: Option<i32>,
    pub sort_by: Option<SortBy>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HotelSearchResultDto {
    pub hotel_id: i32,
    pub name: String,
    pub address: String,
    pub stars: Option<i32>,
    pub description: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Lowest nightly price among the rooms that are free for the range.
    pub min_price: Option<f64>,
    /// Cover photo URL, falling back to the first photo when none is marked.
    pub cover_photo: Option<String>,
    pub review_count: u64,
    pub average_rating: Option<f64>,
    /// Rooms that satisfy the capacity requirement and are free for the range.
    pub available_room_ids: Vec<i32>,
}
